use crate::{error::MiddlewareError, request::ServerRequest, response::JsonResponse};
use async_trait::async_trait;
use serde_json::json;
use std::future::Future;

/// 失败时的后续处理（next continuation）
///
/// 单一种类分发器在失败时不自行作答，而是把请求、已标记错误状态码的响应与错误
/// 一并交给调用方。
#[async_trait]
pub trait Next: Send + Sync {
    async fn call(
        &self,
        request: ServerRequest,
        response: JsonResponse,
        error: MiddlewareError,
    ) -> JsonResponse;
}

#[async_trait]
impl<F, Fut> Next for F
where
    F: Fn(ServerRequest, JsonResponse, MiddlewareError) -> Fut + Send + Sync,
    Fut: Future<Output = JsonResponse> + Send + 'static,
{
    async fn call(
        &self,
        request: ServerRequest,
        response: JsonResponse,
        error: MiddlewareError,
    ) -> JsonResponse {
        (self)(request, response, error).await
    }
}

/// 将错误信息写入响应体，保留已标记的状态码
#[derive(Clone, Copy, Debug, Default)]
pub struct ErrorResponder;

#[async_trait]
impl Next for ErrorResponder {
    async fn call(
        &self,
        _request: ServerRequest,
        response: JsonResponse,
        error: MiddlewareError,
    ) -> JsonResponse {
        let (parts, _body) = response.into_parts();
        http::Response::from_parts(parts, json!({ "message": error.to_string() }))
    }
}
