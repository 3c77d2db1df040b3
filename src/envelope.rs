//! Single structured result printed per invocation.

use crate::errors::AppResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Success { success: bool, message: String },
    Failure { success: bool, error: String },
}

impl Envelope {
    pub fn success(message: impl Into<String>) -> Self {
        Envelope::Success {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(error: impl ToString) -> Self {
        Envelope::Failure {
            success: false,
            error: error.to_string(),
        }
    }

    pub fn from_result<E: ToString>(result: Result<String, E>) -> Self {
        match result {
            Ok(message) => Self::success(message),
            Err(e) => Self::failure(e),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }

    /// Compact JSON, non-ASCII kept as UTF-8.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
