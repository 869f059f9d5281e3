use log::{debug, error, info, warn};
use serde_json::from_str;
use std::io::{self, BufRead, Write};

use crate::domain::{handle, Command, HotelRegistry};
use super::types::Response;

/// The operator's in-memory session. Everything is discarded when it is dropped.
#[derive(Debug, Default)]
pub struct Session {
    registry: HotelRegistry,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &HotelRegistry {
        &self.registry
    }

    pub fn execute(&mut self, command: Command) -> Response {
        debug!("Handling {:?}", command);
        let is_query = command.is_query();

        match handle(command, self.registry.clone()) {
            Ok((success, next)) => {
                if !is_query {
                    info!("Accepted {:?}", success);
                }
                self.registry = next;
                Response::from(success)
            }
            Err(err) => {
                warn!("Rejected ({}): {}", err.kind(), err);
                Response::from(err)
            }
        }
    }

    /// Blank lines and lines starting with `#` produce no response.
    pub fn execute_line(&mut self, line: &str) -> Option<Response> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        match from_str::<Command>(line) {
            Ok(command) => Some(self.execute(command)),
            Err(e) => {
                error!("Failed to parse command: {}", e);
                Some(Response::Invalid {
                    message: format!("Failed to parse command: {}", e),
                })
            }
        }
    }
}

/// Reads one JSON command per line and writes one JSON response per line.
pub fn run_session<R: BufRead, W: Write>(input: R, mut output: W, session: &mut Session) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if let Some(response) = session.execute_line(&line) {
            let json = serde_json::to_string(&response)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(output, "{}", json)?;
            output.flush()?;
        }
    }
    Ok(())
}
