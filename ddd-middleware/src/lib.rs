//! HTTP 消息分发中间件（ddd-middleware）
//!
//! 将入站请求体转换为类型化的应用消息（命令/查询/事件），路由到对应总线，
//! 并把处理结果转换为协议响应：
//! - [`MessageDispatcher`]：通用入口，消息名称与种类都来自请求体；
//! - [`CommandDispatcher`] / [`QueryDispatcher`]：固定种类，名称来自请求属性，
//!   失败时交给调用方提供的 [`Next`]；
//! - [`ResponseStrategy`]：统一“固定状态码”与“延迟结果”两种结果形态。
//!
pub mod command_dispatcher;
pub mod error;
pub mod message_dispatcher;
pub mod metadata;
pub mod next;
pub mod query_dispatcher;
pub mod request;
pub mod response;
pub mod response_strategy;
mod single_kind;

pub use command_dispatcher::{COMMAND_NAME_ATTRIBUTE, CommandDispatcher};
pub use error::{MiddlewareError, MiddlewareResult};
pub use message_dispatcher::MessageDispatcher;
pub use metadata::{MetadataGatherer, NoopMetadataGatherer};
pub use next::{ErrorResponder, Next};
pub use query_dispatcher::{QUERY_NAME_ATTRIBUTE, QueryDispatcher};
pub use request::{RequestAttributes, RequestExt, ServerRequest};
pub use response::{JsonResponse, ResponseExt, empty_response, json_response};
pub use response_strategy::{JsonResponseStrategy, ResponseStrategy};
