//! 消息原始数据（MessageData）
//!
//! 入站请求体解析后的结构化映射，以及构建消息时约定使用的字段名。

use serde_json::{Map, Value};

/// 消息原始数据：字符串键到任意 JSON 值的映射
pub type MessageData = Map<String, Value>;

/// 消息唯一标识
pub const UUID: &str = "uuid";
/// 消息名称（路由到具体处理器）
pub const MESSAGE_NAME: &str = "message_name";
/// 消息载荷
pub const PAYLOAD: &str = "payload";
/// 消息元数据
pub const METADATA: &str = "metadata";
/// 消息创建时间（RFC 3339）
pub const CREATED_AT: &str = "created_at";
