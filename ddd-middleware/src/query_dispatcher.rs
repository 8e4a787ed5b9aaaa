use crate::{
    error::{MiddlewareError, MiddlewareResult},
    metadata::{MetadataGatherer, noop_gatherer},
    next::Next,
    request::{RequestExt, ServerRequest},
    response::JsonResponse,
    response_strategy::ResponseStrategy,
    single_kind::{abbreviated_data, delegate, resolve_name},
};
use bon::Builder;
use ddd_message::{Deferred, MessageFactory, QueryBus};
use std::sync::Arc;

/// 默认的查询名称请求属性
pub const QUERY_NAME_ATTRIBUTE: &str = "query_name";

/// 查询分发器
///
/// 查询名称取自请求属性，请求体作为载荷；可选并入 URL 查询参数。
/// 总线返回的延迟结果交给响应策略解析，分发失败时交给 `next`。
#[derive(Builder)]
pub struct QueryDispatcher {
    query_bus: Arc<dyn QueryBus>,
    message_factory: Arc<dyn MessageFactory>,
    response_strategy: Arc<dyn ResponseStrategy>,
    #[builder(default = noop_gatherer())]
    metadata_gatherer: Arc<dyn MetadataGatherer>,
    #[builder(into, default = QUERY_NAME_ATTRIBUTE.to_string())]
    name_attribute: String,
    /// 为真时将 URL 查询参数并入载荷（同名键以请求体为准）
    #[builder(default)]
    include_query_params: bool,
}

impl QueryDispatcher {
    pub async fn dispatch(
        &self,
        request: ServerRequest,
        response: JsonResponse,
        next: &dyn Next,
    ) -> JsonResponse {
        match self.try_dispatch(&request) {
            Ok(deferred) => self.response_strategy.from_deferred(deferred).await,
            Err(err) => delegate(request, response, err, next).await,
        }
    }

    fn try_dispatch(&self, request: &ServerRequest) -> MiddlewareResult<Deferred> {
        let name = resolve_name(request, &self.name_attribute)?;
        let payload = if self.include_query_params {
            let mut params = request.query_params();
            params.extend(request.parsed_body()?);
            params
        } else {
            request.parsed_body()?
        };
        let data = abbreviated_data(payload, self.metadata_gatherer.gather(request));

        let message = self
            .message_factory
            .create_message_from_map(&name, data)
            .map_err(|source| MiddlewareError::InvalidMessage {
                name: name.clone(),
                source,
            })?;

        tracing::debug!(message_name = %name, uuid = message.uuid(), "dispatching query");

        self.query_bus
            .dispatch(message)
            .map_err(MiddlewareError::dispatch_failed(name))
    }
}
