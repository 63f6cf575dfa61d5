use serde::Serialize;

use crate::errors::GradingError;

pub const SUCCESS_CODE: &str = "OK";

// 统一的命令输出结构
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: SUCCESS_CODE.to_string(),
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl ApiResponse<()> {
    pub fn from_error(err: &GradingError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.format_simple(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}
