// Game console
// Derived remote operations: each one verifies its arguments before the console is contacted

use std::sync::Arc;

use backend_domain::ports::{RemoteConsole, RemoteError};
use backend_domain::{Rank, RemoteCommand};
use tracing::{debug, warn};

const DEFAULT_GIVE_AMOUNT: u32 = 1;

#[derive(Clone)]
pub struct GameConsole {
    remote: Arc<dyn RemoteConsole>,
}

impl GameConsole {
    pub fn new(remote: Arc<dyn RemoteConsole>) -> Self {
        Self { remote }
    }

    pub async fn set_player_rank(&self, username: &str, rank: Rank) -> Result<String, RemoteError> {
        let command = RemoteCommand::set_known_rank(username, rank)?;
        self.dispatch(command).await
    }

    pub async fn give_item(
        &self,
        username: &str,
        item: &str,
        amount: Option<u32>,
    ) -> Result<String, RemoteError> {
        let command =
            RemoteCommand::give_item(username, item, amount.unwrap_or(DEFAULT_GIVE_AMOUNT))?;
        self.dispatch(command).await
    }

    pub async fn broadcast(&self, message: &str) -> Result<String, RemoteError> {
        let command = RemoteCommand::broadcast(message)?;
        self.dispatch(command).await
    }

    pub async fn probe(&self) -> Result<(), RemoteError> {
        self.remote.probe().await
    }

    async fn dispatch(&self, command: RemoteCommand) -> Result<String, RemoteError> {
        debug!(verb = command.verb(), "sending remote command");
        let result = self.remote.send(&command).await;
        if let Err(err) = &result {
            warn!(verb = command.verb(), error = %err, "remote command did not complete");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingConsole;

    #[tokio::test]
    async fn invalid_arguments_never_reach_the_console() {
        let remote = Arc::new(RecordingConsole::default());
        let console = GameConsole::new(remote.clone());

        let err = console
            .set_player_rank("Steve123; op Steve123", Rank::Reindeer)
            .await
            .expect_err("reject username");
        assert!(matches!(err, RemoteError::InvalidInput(_)));
        let err = console
            .give_item("Steve 123", "minecraft:snowball", None)
            .await
            .expect_err("reject username");
        assert!(matches!(err, RemoteError::InvalidInput(_)));
        assert_eq!(remote.call_count(), 0);
    }

    #[tokio::test]
    async fn give_item_defaults_to_one() {
        let remote = Arc::new(RecordingConsole::default());
        let console = GameConsole::new(remote.clone());

        console
            .give_item("Alex", "minecraft:snowball", None)
            .await
            .expect("give item");
        assert_eq!(remote.sent(), vec!["/give Alex minecraft:snowball 1".to_string()]);
    }

    #[tokio::test]
    async fn broadcast_sends_filtered_text() {
        let remote = Arc::new(RecordingConsole::default());
        let console = GameConsole::new(remote.clone());

        console
            .broadcast("Ice Race at 18:00 <b>now</b>")
            .await
            .expect("broadcast");
        assert_eq!(remote.sent(), vec!["/broadcast Ice Race at 1800 bnowb".to_string()]);
    }
}
