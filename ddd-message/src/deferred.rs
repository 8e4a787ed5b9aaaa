//! 延迟结果（Deferred）
//!
//! 查询总线分发后返回的结果句柄：计算可能已完成，也可能稍后在其他执行上下文
//! （工作线程、运行时任务）中完成。句柄本身是一个 `'static` 的 Future，
//! 由响应策略决定何时、以何种方式等待。
//!
use futures_core::future::BoxFuture;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// 查询的延迟结果
pub struct Deferred {
    inner: BoxFuture<'static, anyhow::Result<Value>>,
}

impl Deferred {
    pub fn new<F>(fut: F) -> Self
    where
        F: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        Self {
            inner: Box::pin(fut),
        }
    }

    /// 已完成的结果
    pub fn ready(value: Value) -> Self {
        Self::new(async move { Ok(value) })
    }

    /// 已失败的结果，错误在解析时才会暴露
    pub fn failed(err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        Self::new(async move { Err(err) })
    }

    /// 在 tokio 运行时上派生任务执行计算，结果在任务完成后可用
    ///
    /// 必须在 tokio 运行时内调用。
    pub fn spawn<F>(fut: F) -> Self
    where
        F: Future<Output = anyhow::Result<Value>> + Send + 'static,
    {
        let handle = tokio::spawn(fut);
        Self::new(async move {
            match handle.await {
                Ok(result) => result,
                Err(join_err) => Err(anyhow::Error::new(join_err)),
            }
        })
    }
}

impl Future for Deferred {
    type Output = anyhow::Result<Value>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}
