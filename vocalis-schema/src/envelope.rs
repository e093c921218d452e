use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status code the native backend uses for success.
pub const SUCCESS_CODE: i32 = 200;

/// `{code, msg, data}` reply returned by every native backend command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEnvelope<T = Value> {
    pub code: i32,
    pub msg: String,
    pub data: Option<T>,
}

impl<T> CommandEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: "Success".to_string(),
            data: Some(data),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            code: 500,
            msg: msg.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Unwrap the payload, or hand back the backend's message as the failure reason.
    pub fn into_result(self) -> Result<T, String> {
        match (self.code, self.data) {
            (SUCCESS_CODE, Some(data)) => Ok(data),
            (SUCCESS_CODE, None) => Err(format!("{}: empty payload", self.msg)),
            (_, _) => Err(self.msg),
        }
    }
}

/// Payload of `get_exe_path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExePathData {
    pub path: String,
}
