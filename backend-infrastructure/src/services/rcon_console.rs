// RCON console adapter
// One connection per command: connect, authenticate, send, read, drop

use std::time::Duration;

use async_trait::async_trait;
use rcon::Connection;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, error, warn};

use backend_domain::ports::{RemoteConsole, RemoteError};
use backend_domain::{RconConfig, RemoteCommand};

pub struct RconConsole {
    config: RconConfig,
}

impl RconConsole {
    pub fn new(config: RconConfig) -> Self {
        Self { config }
    }

    async fn connect(&self) -> Result<Connection<TcpStream>, rcon::Error> {
        Connection::<TcpStream>::builder()
            .enable_minecraft_quirks(true)
            .connect(self.config.address(), &self.config.password)
            .await
    }

    fn deadline(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds.max(1))
    }

    fn ensure_enabled(&self) -> Result<(), RemoteError> {
        if self.config.enabled {
            return Ok(());
        }
        warn!("remote console is disabled by configuration");
        Err(RemoteError::Failed)
    }
}

#[async_trait]
impl RemoteConsole for RconConsole {
    /// `cmd` follows the command with an empty exec packet to find the end of a
    /// multi-packet response. That packet is framing, not a second command.
    async fn send(&self, command: &RemoteCommand) -> Result<String, RemoteError> {
        self.ensure_enabled()?;
        let wire = command.to_wire();
        let exchange = async {
            let mut connection = self.connect().await?;
            connection.cmd(&wire).await
        };

        match timeout(self.deadline(), exchange).await {
            Ok(Ok(response)) => {
                debug!(verb = command.verb(), "remote command acknowledged");
                Ok(response)
            }
            Ok(Err(err)) => {
                error!(verb = command.verb(), address = %self.config.address(), error = %err, "remote command failed");
                Err(RemoteError::Failed)
            }
            Err(_) => {
                error!(
                    verb = command.verb(),
                    address = %self.config.address(),
                    timeout_seconds = self.config.timeout_seconds,
                    "remote command timed out"
                );
                Err(RemoteError::Failed)
            }
        }
    }

    async fn probe(&self) -> Result<(), RemoteError> {
        self.ensure_enabled()?;
        match timeout(self.deadline(), self.connect()).await {
            Ok(Ok(_connection)) => Ok(()),
            Ok(Err(err)) => {
                warn!(address = %self.config.address(), error = %err, "remote console probe failed");
                Err(RemoteError::Failed)
            }
            Err(_) => {
                warn!(address = %self.config.address(), "remote console probe timed out");
                Err(RemoteError::Failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    const AUTH: i32 = 3;
    const EXEC: i32 = 2;
    const AUTH_RESPONSE: i32 = 2;
    const RESPONSE_VALUE: i32 = 0;

    async fn read_packet(stream: &mut TcpStream) -> Option<(i32, i32, String)> {
        let length = stream.read_i32_le().await.ok()?;
        let id = stream.read_i32_le().await.ok()?;
        let kind = stream.read_i32_le().await.ok()?;
        let mut body = vec![0u8; usize::try_from(length - 10).ok()?];
        stream.read_exact(&mut body).await.ok()?;
        let mut padding = [0u8; 2];
        stream.read_exact(&mut padding).await.ok()?;
        Some((id, kind, String::from_utf8_lossy(&body).to_string()))
    }

    async fn write_packet(stream: &mut TcpStream, id: i32, kind: i32, body: &str) {
        let mut packet = Vec::new();
        packet.extend_from_slice(&(body.len() as i32 + 10).to_le_bytes());
        packet.extend_from_slice(&id.to_le_bytes());
        packet.extend_from_slice(&kind.to_le_bytes());
        packet.extend_from_slice(body.as_bytes());
        packet.extend_from_slice(&[0, 0]);
        stream.write_all(&packet).await.expect("write packet");
    }

    /// Minimal RCON server: accepts `password`, records each command and
    /// answers it with `ok: <command>`. Empty exec packets are end-of-response
    /// markers and are echoed back without being recorded.
    async fn spawn_server(password: &'static str) -> (u16, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind rcon");
        let port = listener.local_addr().expect("rcon addr").port();
        let commands = Arc::new(Mutex::new(Vec::new()));
        let seen = commands.clone();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let seen = seen.clone();
                tokio::spawn(async move {
                    while let Some((id, kind, body)) = read_packet(&mut stream).await {
                        match kind {
                            AUTH if body == password => {
                                write_packet(&mut stream, id, AUTH_RESPONSE, "").await
                            }
                            AUTH => write_packet(&mut stream, -1, AUTH_RESPONSE, "").await,
                            EXEC if body.is_empty() => {
                                write_packet(&mut stream, id, RESPONSE_VALUE, "").await
                            }
                            EXEC => {
                                seen.lock().expect("commands lock").push(body.clone());
                                let reply = format!("ok: {}", body);
                                write_packet(&mut stream, id, RESPONSE_VALUE, &reply).await
                            }
                            _ => {}
                        }
                    }
                });
            }
        });
        (port, commands)
    }

    fn console(port: u16, password: &str) -> RconConsole {
        RconConsole::new(RconConfig {
            enabled: true,
            host: "127.0.0.1".to_string(),
            port,
            password: password.to_string(),
            timeout_seconds: 2,
        })
    }

    #[tokio::test]
    async fn sends_one_rendered_command_per_connection() {
        let (port, commands) = spawn_server("snowball").await;
        let console = console(port, "snowball");
        let command = RemoteCommand::set_rank("Steve123", "reindeer").expect("command");

        let response = console.send(&command).await.expect("send");

        assert_eq!(response, "ok: /lp user Steve123 parent set reindeer");
        assert_eq!(
            commands.lock().expect("commands lock").clone(),
            vec!["/lp user Steve123 parent set reindeer".to_string()]
        );
        console.probe().await.expect("probe");
    }

    #[tokio::test]
    async fn wrong_password_is_an_opaque_failure() {
        let (port, commands) = spawn_server("snowball").await;
        let console = console(port, "icicle");
        let command = RemoteCommand::broadcast("hello").expect("command");

        let err = console.send(&command).await.expect_err("auth rejected");
        assert!(matches!(err, RemoteError::Failed));
        assert_eq!(err.to_string(), "remote command failed");
        assert!(commands.lock().expect("commands lock").is_empty());
    }

    #[tokio::test]
    async fn refused_connection_is_an_opaque_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let port = listener.local_addr().expect("addr").port();
        drop(listener);

        let command = RemoteCommand::broadcast("hello").expect("command");
        let err = console(port, "snowball")
            .send(&command)
            .await
            .expect_err("nothing listening");
        assert!(matches!(err, RemoteError::Failed));
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let port = listener.local_addr().expect("addr").port();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });
        let mut console = console(port, "snowball");
        console.config.timeout_seconds = 1;

        let command = RemoteCommand::broadcast("hello").expect("command");
        let err = console.send(&command).await.expect_err("timed out");
        assert!(matches!(err, RemoteError::Failed));
    }

    #[tokio::test]
    async fn disabled_console_never_connects() {
        let mut console = console(1, "snowball");
        console.config.enabled = false;
        let command = RemoteCommand::broadcast("hello").expect("command");

        assert!(matches!(
            console.send(&command).await,
            Err(RemoteError::Failed)
        ));
        assert!(console.probe().await.is_err());
    }
}
