//! 响应策略（Response Strategy）
//!
//! 将分发结果（固定状态码，或查询的延迟结果）转换为协议响应。
//! 分发器不关心“如何等待”异步结果，这一决定完全由策略实现承担：
//! 直接在请求任务中等待、带超时等待，或交给独立任务解析。
//!
use crate::response::{JsonResponse, empty_response, json_response};
use async_trait::async_trait;
use bon::Builder;
use ddd_message::Deferred;
use http::StatusCode;
use serde_json::json;
use std::time::Duration;

#[async_trait]
pub trait ResponseStrategy: Send + Sync {
    /// 仅携带状态码的响应（命令/事件确认）
    fn with_status(&self, status: StatusCode) -> JsonResponse;

    /// 将延迟结果桥接为响应；解析失败必须体现在响应中
    async fn from_deferred(&self, deferred: Deferred) -> JsonResponse;
}

/// JSON 响应策略
///
/// - 解析成功：`200 OK`，响应体为查询结果；
/// - 解析失败：`500`，响应体为 `{"message": ...}`；
/// - 配置了 `timeout` 且超时：`504`；
/// - `detached` 为真时在独立的 tokio 任务中解析，请求被取消时查询仍会执行完毕。
#[derive(Builder, Clone, Debug, Default)]
pub struct JsonResponseStrategy {
    timeout: Option<Duration>,
    /// 在独立任务中解析延迟结果
    ///
    /// 通过 `tokio::spawn` 派生任务，必须在 tokio 运行时内调用 `from_deferred`，否则会 panic。
    #[builder(default)]
    detached: bool,
}

impl JsonResponseStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    async fn resolve(&self, deferred: Deferred) -> anyhow::Result<serde_json::Value> {
        if self.detached {
            Deferred::spawn(deferred).await
        } else {
            deferred.await
        }
    }
}

#[async_trait]
impl ResponseStrategy for JsonResponseStrategy {
    fn with_status(&self, status: StatusCode) -> JsonResponse {
        empty_response(status)
    }

    async fn from_deferred(&self, deferred: Deferred) -> JsonResponse {
        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, self.resolve(deferred)).await {
                Ok(outcome) => outcome,
                Err(_elapsed) => {
                    tracing::debug!(?limit, "query result timed out");
                    return json_response(
                        StatusCode::GATEWAY_TIMEOUT,
                        json!({ "message": "query result timed out" }),
                    );
                }
            },
            None => self.resolve(deferred).await,
        };

        match outcome {
            Ok(value) => json_response(StatusCode::OK, value),
            Err(err) => {
                tracing::debug!(error = %err, "query result resolved with an error");
                json_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": err.to_string() }),
                )
            }
        }
    }
}
