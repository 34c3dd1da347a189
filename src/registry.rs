use crate::errors::RegistryError;
use crate::invite::{generate_unique_invite_code, normalize_invite_code};
use crate::models::{CreateGroupParams, Group, GroupId};
use tracing::{info, warn};

/// Every group of the session, in creation order.
///
/// Callers get clones or shared borrows back; all mutation goes through
/// methods that look the group up by id or invite code first.
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: Vec<Group>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two public groups a fresh session starts with.
    pub fn with_sample_groups() -> Self {
        let mut registry = Self::new();
        registry.groups.push(sample_group(
            "Treino Matinal",
            "Grupo para quem treina de manhã",
            "Musculação",
            "MANHA123",
            12,
        ));
        registry.groups.push(sample_group(
            "Corrida 5K",
            "Preparação para corrida de 5km",
            "Corrida",
            "RUN5K456",
            8,
        ));
        registry
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|group| group.id == id)
    }

    pub(crate) fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|group| group.id == id)
    }

    pub(crate) fn groups_mut(&mut self) -> impl Iterator<Item = &mut Group> {
        self.groups.iter_mut()
    }

    pub fn create_group(&mut self, params: CreateGroupParams) -> Result<Group, RegistryError> {
        let name = required(&params.name, "name")?;
        let category = required(&params.category, "category")?;

        let invite_code = generate_unique_invite_code(&mut rand::thread_rng(), |candidate| {
            self.groups.iter().any(|group| group.invite_code == candidate)
        })?;

        let group = Group {
            id: GroupId::new(),
            name,
            description: params.description.trim().to_string(),
            category,
            is_private: params.is_private,
            invite_code,
            members: 1,
            challenges: Vec::new(),
        };

        info!(
            group_id = %group.id,
            invite_code = %group.invite_code,
            is_private = group.is_private,
            "group created"
        );
        self.groups.push(group.clone());
        Ok(group)
    }

    pub fn find_by_invite_code(&self, code: &str) -> Option<&Group> {
        let code = normalize_invite_code(code);
        if code.is_empty() {
            return None;
        }
        self.groups.iter().find(|group| group.invite_code == code)
    }

    /// Adds one member to the group owning `code`. There is no member
    /// identity, so joining twice counts twice.
    pub fn join_group(&mut self, code: &str) -> Result<Group, RegistryError> {
        let normalized = normalize_invite_code(code);
        let Some(group) = self
            .groups
            .iter_mut()
            .find(|group| !normalized.is_empty() && group.invite_code == normalized)
        else {
            warn!(invite_code = %normalized, "join rejected: unknown invite code");
            return Err(RegistryError::not_found(format!("invite code {normalized}")));
        };

        group.members = group.members.saturating_add(1);
        info!(group_id = %group.id, members = group.members, "group joined");
        Ok(group.clone())
    }

    pub fn list_public_groups(&self) -> Vec<&Group> {
        self.groups.iter().filter(|group| !group.is_private).collect()
    }
}

pub(crate) fn required(value: &str, field: &str) -> Result<String, RegistryError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RegistryError::validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

fn sample_group(
    name: &str,
    description: &str,
    category: &str,
    invite_code: &str,
    members: u32,
) -> Group {
    Group {
        id: GroupId::new(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        is_private: false,
        invite_code: invite_code.to_string(),
        members,
        challenges: Vec::new(),
    }
}
