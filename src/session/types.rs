use serde::{Deserialize, Serialize};

use crate::domain::{CommandSuccess, ErrorKind, HandleError};

/// One line of session output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Response {
    Ok {
        result: CommandSuccess,
    },
    /// The command was understood but refused; the registry is unchanged.
    Rejected {
        kind: ErrorKind,
        message: String,
    },
    /// The line could not be read as a command.
    Invalid {
        message: String,
    },
}

impl From<CommandSuccess> for Response {
    fn from(result: CommandSuccess) -> Self {
        Response::Ok { result }
    }
}

impl From<HandleError> for Response {
    fn from(err: HandleError) -> Self {
        Response::Rejected {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
