//! 单一种类分发器的公共步骤
//!
//! 名称取自请求属性；消息数据只包含 `{payload, metadata}`，
//! 标识与创建时间交由消息工厂补齐。
//!
use crate::{
    error::{MiddlewareError, MiddlewareResult},
    next::Next,
    request::{RequestExt, ServerRequest},
    response::{JsonResponse, ResponseExt},
};
use ddd_message::MessageData;
use ddd_message::message_data::{METADATA, PAYLOAD};
use serde_json::Value;

pub(crate) fn resolve_name(request: &ServerRequest, attribute: &str) -> MiddlewareResult<String> {
    request
        .attribute(attribute)
        .map(str::to_owned)
        .ok_or_else(|| MiddlewareError::MissingName {
            attribute: attribute.to_string(),
        })
}

pub(crate) fn abbreviated_data(payload: MessageData, metadata: MessageData) -> MessageData {
    let mut data = MessageData::new();
    data.insert(PAYLOAD.to_string(), Value::Object(payload));
    data.insert(METADATA.to_string(), Value::Object(metadata));
    data
}

/// 以错误对应的状态码标记响应，交给 `next` 处理
pub(crate) async fn delegate(
    request: ServerRequest,
    response: JsonResponse,
    error: MiddlewareError,
    next: &dyn Next,
) -> JsonResponse {
    tracing::debug!(%error, "delegating failed dispatch");
    let status = error.status_code();
    next.call(request, response.with_status(status), error).await
}
