use crate::response::{JsonResponse, json_response};
use ddd_message::MessageError;
use http::StatusCode;
use serde_json::json;

/// 中间件错误
///
/// 每个错误只作用于一次请求；`status_code` 给出对外的状态码分类，
/// 具体如何转换为协议响应由调用方决定。
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum MiddlewareError {
    #[error("missing message name: request attribute `{attribute}` is not set")]
    MissingName { attribute: String },

    #[error("malformed message: {reason}")]
    MalformedMessage { reason: String },

    #[error("invalid message `{name}`: {source}")]
    InvalidMessage {
        name: String,
        #[source]
        source: MessageError,
    },

    #[error("unknown message kind for `{name}`: {kind}")]
    UnknownMessageKind { name: String, kind: String },

    #[error("an error occurred during dispatching of message `{name}`")]
    DispatchFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

impl MiddlewareError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        MiddlewareError::MalformedMessage {
            reason: reason.into(),
        }
    }

    pub fn dispatch_failed(name: impl Into<String>) -> impl FnOnce(anyhow::Error) -> Self {
        let name = name.into();
        move |source| MiddlewareError::DispatchFailed { name, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            MiddlewareError::MissingName { .. }
            | MiddlewareError::MalformedMessage { .. }
            | MiddlewareError::InvalidMessage { .. } => StatusCode::BAD_REQUEST,
            MiddlewareError::UnknownMessageKind { .. } | MiddlewareError::DispatchFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 出错消息的名称（若已解析到）
    pub fn message_name(&self) -> Option<&str> {
        match self {
            MiddlewareError::InvalidMessage { name, .. }
            | MiddlewareError::UnknownMessageKind { name, .. }
            | MiddlewareError::DispatchFailed { name, .. } => Some(name),
            MiddlewareError::MissingName { .. } | MiddlewareError::MalformedMessage { .. } => None,
        }
    }

    /// 渲染为 `{"message": ...}` 响应，状态码取自 `status_code`
    pub fn to_response(&self) -> JsonResponse {
        json_response(self.status_code(), json!({ "message": self.to_string() }))
    }
}

pub type MiddlewareResult<T> = Result<T, MiddlewareError>;
