use async_trait::async_trait;
use thiserror::Error;

use crate::services::{CommandError, RemoteCommand};

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] CommandError),
    /// Connection, authentication, timeout or transport fault. Details go to the log only.
    #[error("remote command failed")]
    Failed,
}

/// One connect, authenticate, send, receive, disconnect cycle per call.
#[async_trait]
pub trait RemoteConsole: Send + Sync {
    async fn send(&self, command: &RemoteCommand) -> Result<String, RemoteError>;

    /// Connects and authenticates without sending a command.
    async fn probe(&self) -> Result<(), RemoteError>;
}
