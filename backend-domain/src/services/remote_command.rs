// Remote console commands
// Built from verified arguments and only rendered to text at the transport boundary

use std::num::NonZeroU32;

use crate::services::sanitizer::{sanitize, ArgumentClass, CommandError, VerifiedArg};
use crate::value_objects::Rank;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCommand {
    SetRank {
        username: VerifiedArg,
        rank: VerifiedArg,
    },
    GiveItem {
        username: VerifiedArg,
        item: VerifiedArg,
        amount: NonZeroU32,
    },
    Broadcast {
        message: String,
    },
}

impl RemoteCommand {
    pub fn set_rank(username: &str, rank: &str) -> Result<Self, CommandError> {
        Ok(RemoteCommand::SetRank {
            username: VerifiedArg::verify(ArgumentClass::Username, username)?,
            rank: VerifiedArg::verify(ArgumentClass::Rank, rank)?,
        })
    }

    pub fn set_known_rank(username: &str, rank: Rank) -> Result<Self, CommandError> {
        Self::set_rank(username, rank.as_str())
    }

    pub fn give_item(username: &str, item: &str, amount: u32) -> Result<Self, CommandError> {
        let amount = NonZeroU32::new(amount).ok_or(CommandError::InvalidAmount)?;
        Ok(RemoteCommand::GiveItem {
            username: VerifiedArg::verify(ArgumentClass::Username, username)?,
            item: VerifiedArg::verify(ArgumentClass::Item, item)?,
            amount,
        })
    }

    /// Broadcast text is filtered rather than verified; it is display text, not an identity.
    pub fn broadcast(message: &str) -> Result<Self, CommandError> {
        let filtered = sanitize(ArgumentClass::Broadcast, message);
        let trimmed = filtered.trim();
        if trimmed.is_empty() {
            return Err(CommandError::Empty(ArgumentClass::Broadcast));
        }
        Ok(RemoteCommand::Broadcast {
            message: trimmed.to_string(),
        })
    }

    pub fn verb(&self) -> &'static str {
        match self {
            RemoteCommand::SetRank { .. } => "set_rank",
            RemoteCommand::GiveItem { .. } => "give_item",
            RemoteCommand::Broadcast { .. } => "broadcast",
        }
    }

    pub fn to_wire(&self) -> String {
        match self {
            RemoteCommand::SetRank { username, rank } => {
                format!("/lp user {} parent set {}", username, rank)
            }
            RemoteCommand::GiveItem {
                username,
                item,
                amount,
            } => format!("/give {} {} {}", username, item, amount),
            RemoteCommand::Broadcast { message } => format!("/broadcast {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_assignment_renders_both_values() {
        let command = RemoteCommand::set_rank("Steve123", "reindeer").expect("command");
        assert_eq!(command.to_wire(), "/lp user Steve123 parent set reindeer");
        assert_eq!(command.verb(), "set_rank");

        let known = RemoteCommand::set_known_rank("Steve123", Rank::SantaPlus).expect("command");
        assert_eq!(known.to_wire(), "/lp user Steve123 parent set santa_plus");
    }

    #[test]
    fn rank_assignment_fails_closed() {
        assert_eq!(
            RemoteCommand::set_rank("Steve123 op", "reindeer"),
            Err(CommandError::Disallowed(ArgumentClass::Username))
        );
        assert_eq!(
            RemoteCommand::set_rank("Steve123", "reindeer\nop Steve123"),
            Err(CommandError::Disallowed(ArgumentClass::Rank))
        );
    }

    #[test]
    fn give_item_interpolates_amount_numerically() {
        let command = RemoteCommand::give_item("Alex", "minecraft:snowball", 16).expect("command");
        assert_eq!(command.to_wire(), "/give Alex minecraft:snowball 16");
        assert_eq!(
            RemoteCommand::give_item("Alex", "minecraft:snowball", 0),
            Err(CommandError::InvalidAmount)
        );
    }

    #[test]
    fn broadcast_is_filtered_not_rejected() {
        let command = RemoteCommand::broadcast("Gift hunt starts now! <3").expect("command");
        assert_eq!(command.to_wire(), "/broadcast Gift hunt starts now! 3");
        assert_eq!(
            RemoteCommand::broadcast("<>{}"),
            Err(CommandError::Empty(ArgumentClass::Broadcast))
        );
    }
}
