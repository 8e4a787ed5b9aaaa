//! 出站响应能力
//!
//! 响应体统一为已序列化的 JSON 值；仅携带状态码的响应使用 `null` 响应体。

use http::StatusCode;
use http::header::{CONTENT_TYPE, HeaderValue};
use serde_json::Value;

pub type JsonResponse = http::Response<Value>;

/// 构造带 JSON 响应体的响应
pub fn json_response(status: StatusCode, body: Value) -> JsonResponse {
    let mut response = JsonResponse::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

/// 仅携带状态码的响应
pub fn empty_response(status: StatusCode) -> JsonResponse {
    json_response(status, Value::Null)
}

pub trait ResponseExt {
    /// 以新状态码返回响应（消费原响应，不修改调用方持有的其他副本）
    fn with_status(self, status: StatusCode) -> Self;
}

impl<B> ResponseExt for http::Response<B> {
    fn with_status(self, status: StatusCode) -> Self {
        let (mut parts, body) = self.into_parts();
        parts.status = status;
        http::Response::from_parts(parts, body)
    }
}
