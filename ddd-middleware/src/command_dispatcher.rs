use crate::{
    error::{MiddlewareError, MiddlewareResult},
    metadata::{MetadataGatherer, noop_gatherer},
    next::Next,
    request::{RequestExt, ServerRequest},
    response::{JsonResponse, ResponseExt},
    single_kind::{abbreviated_data, delegate, resolve_name},
};
use bon::Builder;
use ddd_message::{CommandBus, MessageFactory};
use http::StatusCode;
use std::sync::Arc;

/// 默认的命令名称请求属性
pub const COMMAND_NAME_ATTRIBUTE: &str = "command_name";

/// 命令分发器
///
/// 命令名称取自请求属性，请求体作为载荷。成功时直接以 `202 Accepted` 作答，
/// 失败时交给 `next`。
#[derive(Builder)]
pub struct CommandDispatcher {
    command_bus: Arc<dyn CommandBus>,
    message_factory: Arc<dyn MessageFactory>,
    #[builder(default = noop_gatherer())]
    metadata_gatherer: Arc<dyn MetadataGatherer>,
    #[builder(into, default = COMMAND_NAME_ATTRIBUTE.to_string())]
    name_attribute: String,
}

impl CommandDispatcher {
    pub async fn dispatch(
        &self,
        request: ServerRequest,
        response: JsonResponse,
        next: &dyn Next,
    ) -> JsonResponse {
        match self.try_dispatch(&request).await {
            Ok(()) => response.with_status(StatusCode::ACCEPTED),
            Err(err) => delegate(request, response, err, next).await,
        }
    }

    async fn try_dispatch(&self, request: &ServerRequest) -> MiddlewareResult<()> {
        let name = resolve_name(request, &self.name_attribute)?;
        let payload = request.parsed_body()?;
        let data = abbreviated_data(payload, self.metadata_gatherer.gather(request));

        let message = self
            .message_factory
            .create_message_from_map(&name, data)
            .map_err(|source| MiddlewareError::InvalidMessage {
                name: name.clone(),
                source,
            })?;

        tracing::debug!(message_name = %name, uuid = message.uuid(), "dispatching command");

        self.command_bus
            .dispatch(message)
            .await
            .map_err(MiddlewareError::dispatch_failed(name))
    }
}
