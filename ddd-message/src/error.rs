//! 消息层统一错误定义
//!
//! 聚焦消息构建、类型解析与注册表的最小必要集合，
//! 便于在中间件层统一转换为对外的错误分类。
//!
use thiserror::Error;

/// 统一错误类型（消息层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum MessageError {
    // --- 构建 ---
    #[error("invalid message data: name={name}, reason={reason}")]
    InvalidData { name: String, reason: String },
    #[error("parse error: {reason}")]
    Parse { reason: String },

    // --- 类型/注册 ---
    #[error("unknown message kind: {0}")]
    UnknownKind(String),
    #[error("message not registered: {0}")]
    NotRegistered(String),
    #[error("message already registered: {0}")]
    AlreadyRegistered(String),
}

impl MessageError {
    pub fn invalid_data(name: impl Into<String>, reason: impl Into<String>) -> Self {
        MessageError::InvalidData {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type MessageResult<T> = Result<T, MessageError>;

// 允许在构建消息时直接使用 `?` 将 chrono 的解析错误转换为 MessageError

impl From<chrono::ParseError> for MessageError {
    fn from(err: chrono::ParseError) -> Self {
        MessageError::Parse {
            reason: err.to_string(),
        }
    }
}
