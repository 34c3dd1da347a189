//! Challenges owned by a group, and the check-ins recorded against them.

use crate::errors::RegistryError;
use crate::models::{
    Challenge, ChallengeId, CheckInParams, CheckInReceipt, CheckInType, CreateChallengeParams,
    Group, GroupId, Participant, ParticipantId,
};
use crate::registry::{GroupRegistry, required};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

impl Group {
    pub fn challenge(&self, id: ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|challenge| challenge.id == id)
    }

    fn add_challenge(&mut self, params: CreateChallengeParams) -> Result<&Challenge, RegistryError> {
        let name = required(&params.name, "name")?;
        let duration = parse_duration(&params.duration)?;
        let check_in_type = required(&params.check_in_type, "check_in_type")?
            .parse::<CheckInType>()
            .map_err(RegistryError::Validation)?;

        self.challenges.push(Challenge {
            id: ChallengeId::new(),
            name,
            description: params.description.trim().to_string(),
            duration,
            rules: params.rules.trim().to_string(),
            check_in_type,
            participants: Vec::new(),
        });

        let index = self.challenges.len() - 1;
        Ok(&self.challenges[index])
    }
}

impl Challenge {
    pub fn participant(&self, name: &str) -> Option<&Participant> {
        let name = name.trim();
        self.participants
            .iter()
            .find(|participant| same_name(&participant.name, name))
    }

    /// Records one check-in for `params.participant`, enrolling them on
    /// their first one. Daily challenges take one check-in per UTC day.
    fn record_check_in(
        &mut self,
        params: CheckInParams,
        now: DateTime<Utc>,
    ) -> Result<Participant, RegistryError> {
        let name = required(&params.participant, "participant")?;
        let note = params
            .note
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty());

        if self.check_in_type == CheckInType::Text && note.is_none() {
            return Err(RegistryError::validation("note is required for text check-ins"));
        }

        let check_in_type = self.check_in_type;
        let existing = self
            .participants
            .iter()
            .position(|participant| same_name(&participant.name, &name));
        let index = match existing {
            Some(index) => index,
            None => {
                self.participants.push(Participant {
                    id: ParticipantId::new(),
                    name,
                    check_ins: 0,
                    last_check_in: None,
                    last_note: None,
                });
                self.participants.len() - 1
            }
        };
        let participant = &mut self.participants[index];

        if check_in_type == CheckInType::Daily
            && participant
                .last_check_in
                .is_some_and(|last| last.date_naive() == now.date_naive())
        {
            return Err(RegistryError::validation(format!(
                "{} already checked in today",
                participant.name
            )));
        }

        participant.check_ins = participant.check_ins.saturating_add(1);
        participant.last_check_in = Some(now);
        if check_in_type == CheckInType::Text {
            participant.last_note = note;
        }

        Ok(participant.clone())
    }
}

impl GroupRegistry {
    pub fn create_challenge(
        &mut self,
        group_id: GroupId,
        params: CreateChallengeParams,
    ) -> Result<Challenge, RegistryError> {
        let group = self
            .group_mut(group_id)
            .ok_or_else(|| RegistryError::not_found(format!("group {group_id}")))?;

        let challenge = group.add_challenge(params).inspect_err(|err| {
            warn!(group_id = %group_id, error = %err, "challenge rejected");
        })?;

        info!(
            group_id = %group_id,
            challenge_id = %challenge.id,
            duration = challenge.duration,
            check_in_type = %challenge.check_in_type,
            "challenge created"
        );
        Ok(challenge.clone())
    }

    pub fn check_in(
        &mut self,
        challenge_id: ChallengeId,
        params: CheckInParams,
    ) -> Result<CheckInReceipt, RegistryError> {
        self.check_in_at(challenge_id, params, Utc::now())
    }

    pub fn check_in_at(
        &mut self,
        challenge_id: ChallengeId,
        params: CheckInParams,
        now: DateTime<Utc>,
    ) -> Result<CheckInReceipt, RegistryError> {
        let (group_id, challenge) = self
            .groups_mut()
            .find_map(|group| {
                let group_id = group.id;
                group
                    .challenges
                    .iter_mut()
                    .find(|challenge| challenge.id == challenge_id)
                    .map(|challenge| (group_id, challenge))
            })
            .ok_or_else(|| RegistryError::not_found(format!("challenge {challenge_id}")))?;

        let participant = challenge.record_check_in(params, now).inspect_err(|err| {
            warn!(challenge_id = %challenge_id, error = %err, "check-in rejected");
        })?;

        info!(
            challenge_id = %challenge_id,
            participant = %participant.name,
            check_ins = participant.check_ins,
            "check-in recorded"
        );
        Ok(CheckInReceipt {
            group_id,
            challenge_id,
            participant,
        })
    }
}

/// Display names match case-insensitively, accents included.
fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn parse_duration(input: &str) -> Result<u32, RegistryError> {
    let input = required(input, "duration")?;
    match input.parse::<u32>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(RegistryError::validation(format!(
            "duration must be a positive number of days, got '{input}'"
        ))),
    }
}
