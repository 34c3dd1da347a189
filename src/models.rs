use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

id_type!(
    /// Group identifier.
    GroupId
);
id_type!(
    /// Challenge identifier.
    ChallengeId
);
id_type!(
    /// Participant identifier, scoped to one challenge.
    ParticipantId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckInType {
    Daily,
    Manual,
    Photo,
    Text,
}

impl CheckInType {
    pub const ALL: [CheckInType; 4] = [Self::Daily, Self::Manual, Self::Photo, Self::Text];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Manual => "manual",
            Self::Photo => "photo",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for CheckInType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckInType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| format!("unknown check-in type '{}'", s.trim()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub check_ins: u32,
    pub last_check_in: Option<DateTime<Utc>>,
    /// Body of the latest `text` check-in.
    pub last_note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub name: String,
    pub description: String,
    /// Length in days.
    pub duration: u32,
    pub rules: String,
    pub check_in_type: CheckInType,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub is_private: bool,
    pub invite_code: String,
    pub members: u32,
    pub challenges: Vec<Challenge>,
}

pub const CATEGORIES: [&str; 6] = [
    "Musculação",
    "Corrida",
    "Yoga",
    "Crossfit",
    "Natação",
    "Ciclismo",
];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateGroupParams {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub is_private: bool,
}

/// Challenge input as typed into the form; `duration` and `check_in_type`
/// are parsed by the ledger.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateChallengeParams {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub rules: String,
    pub check_in_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckInParams {
    pub participant: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JoinGroupRequest {
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckInReceipt {
    pub group_id: GroupId,
    pub challenge_id: ChallengeId,
    pub participant: Participant,
}

/// Listing view of a group, without its challenges.
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub is_private: bool,
    pub invite_code: String,
    pub members: u32,
    pub challenge_count: usize,
}

impl From<&Group> for GroupSummary {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id,
            name: group.name.clone(),
            description: group.description.clone(),
            category: group.category.clone(),
            is_private: group.is_private,
            invite_code: group.invite_code.clone(),
            members: group.members,
            challenge_count: group.challenges.len(),
        }
    }
}
