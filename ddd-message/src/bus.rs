//! 消息总线（Bus）协议
//!
//! 每种消息各有一条总线，中间件只把它们当作不透明的分发目标：
//! - 命令/事件：分发成功即确认，不返回数据；
//! - 查询：分发调用本身同步返回 [`Deferred`]，结果稍后解析。
//!
//! 分发调用返回的错误属于“分发期”错误；查询结果解析时才出现的错误
//! 封装在 `Deferred` 内部，由响应策略负责处理。
//!
use crate::{deferred::Deferred, message::Message};
use async_trait::async_trait;

/// 命令总线：将命令投递给已注册的处理器
#[async_trait]
pub trait CommandBus: Send + Sync {
    async fn dispatch(&self, message: Message) -> anyhow::Result<()>;
}

/// 事件总线：将事件投递给所有订阅者
#[async_trait]
pub trait EventBus: Send + Sync {
    async fn dispatch(&self, message: Message) -> anyhow::Result<()>;
}

/// 查询总线：返回查询结果的延迟句柄
pub trait QueryBus: Send + Sync {
    fn dispatch(&self, message: Message) -> anyhow::Result<Deferred>;
}
