//! 通用消息分发器（MessageDispatcher）
//!
//! 从请求体中读取完整的消息数据（标识、名称、载荷、元数据），经消息工厂构建后
//! 按消息种类选择总线分发：
//! - 命令/事件：分发成功后由响应策略给出 `202 Accepted`；
//! - 查询：将总线返回的延迟结果交给响应策略解析。
//!
//! 所有失败都以 `MiddlewareError` 返回，由外层负责转换为协议响应。
//!
use crate::{
    error::{MiddlewareError, MiddlewareResult},
    metadata::{MetadataGatherer, noop_gatherer},
    request::{RequestExt, ServerRequest},
    response::JsonResponse,
    response_strategy::ResponseStrategy,
};
use bon::Builder;
use ddd_message::message_data::{MESSAGE_NAME, METADATA, UUID};
use ddd_message::{CommandBus, EventBus, MessageData, MessageFactory, MessageKind, QueryBus};
use http::StatusCode;
use serde_json::Value;
use std::sync::Arc;

#[derive(Builder)]
pub struct MessageDispatcher {
    command_bus: Arc<dyn CommandBus>,
    query_bus: Arc<dyn QueryBus>,
    event_bus: Arc<dyn EventBus>,
    message_factory: Arc<dyn MessageFactory>,
    response_strategy: Arc<dyn ResponseStrategy>,
    #[builder(default = noop_gatherer())]
    metadata_gatherer: Arc<dyn MetadataGatherer>,
}

impl MessageDispatcher {
    pub async fn dispatch(&self, request: &ServerRequest) -> MiddlewareResult<JsonResponse> {
        let mut data = request.parsed_body()?;

        required_str(&data, UUID)?;
        let name = required_str(&data, MESSAGE_NAME)?;

        merge_metadata(&mut data, self.metadata_gatherer.gather(request))?;

        let message = self
            .message_factory
            .create_message_from_map(&name, data)
            .map_err(|source| MiddlewareError::InvalidMessage {
                name: name.clone(),
                source,
            })?;

        let kind = message
            .kind()
            .map_err(|_| MiddlewareError::UnknownMessageKind {
                name: name.clone(),
                kind: message.message_type().to_string(),
            })?;

        tracing::debug!(message_name = %name, %kind, uuid = message.uuid(), "dispatching message");

        match kind {
            MessageKind::Command => {
                self.command_bus
                    .dispatch(message)
                    .await
                    .map_err(MiddlewareError::dispatch_failed(name))?;
                Ok(self.response_strategy.with_status(StatusCode::ACCEPTED))
            }
            MessageKind::Event => {
                self.event_bus
                    .dispatch(message)
                    .await
                    .map_err(MiddlewareError::dispatch_failed(name))?;
                Ok(self.response_strategy.with_status(StatusCode::ACCEPTED))
            }
            MessageKind::Query => {
                let deferred = self
                    .query_bus
                    .dispatch(message)
                    .map_err(MiddlewareError::dispatch_failed(name))?;
                Ok(self.response_strategy.from_deferred(deferred).await)
            }
        }
    }
}

fn required_str(data: &MessageData, key: &str) -> MiddlewareResult<String> {
    match data.get(key).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => Err(MiddlewareError::malformed(format!(
            "message data must contain a key {key}"
        ))),
    }
}

// 采集到的元数据覆盖请求体中的同名键
fn merge_metadata(data: &mut MessageData, gathered: MessageData) -> MiddlewareResult<()> {
    if gathered.is_empty() {
        return Ok(());
    }

    let slot = data.entry(METADATA).or_insert(Value::Null);
    if slot.is_null() {
        *slot = Value::Object(MessageData::new());
    }

    match slot {
        Value::Object(metadata) => {
            metadata.extend(gathered);
            Ok(())
        }
        _ => Err(MiddlewareError::malformed("metadata must be an object")),
    }
}
