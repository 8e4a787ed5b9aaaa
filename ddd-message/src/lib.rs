//! 消息层基础库（ddd-message）
//!
//! 提供 HTTP 消息分发中间件所依赖的消息抽象：
//! - 消息值对象（`message`）与种类（`message_kind`）
//! - 原始数据约定（`message_data`）与消息工厂（`message_factory`、`message_registry`）
//! - 三类总线协议（`bus`）与查询的延迟结果（`deferred`）
//!
//! 本 crate 不绑定任何总线或传输实现，总线由调用方以 trait 对象注入。
//!
pub mod bus;
pub mod deferred;
pub mod error;
pub mod message;
pub mod message_data;
pub mod message_factory;
pub mod message_kind;
pub mod message_registry;

pub use bus::{CommandBus, EventBus, QueryBus};
pub use deferred::Deferred;
pub use error::{MessageError, MessageResult};
pub use message::Message;
pub use message_data::MessageData;
pub use message_factory::MessageFactory;
pub use message_kind::MessageKind;
pub use message_registry::MessageRegistry;
