use serde::Serialize;

// 单条消息响应（401/403/404 等）
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// 校验错误响应：每条违反的约束一条消息
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

// 全局错误处理响应体
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetails {
    pub message: String,
    pub error: serde_json::Value,
}

impl ErrorDetails {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: serde_json::json!({}),
        }
    }
}
