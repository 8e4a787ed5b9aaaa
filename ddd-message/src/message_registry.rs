//! 基于注册表的消息工厂（MessageRegistry）
//!
//! 以消息名称为键登记消息种类，构建时按登记结果分类，
//! 并补齐缺省的标识与创建时间。
//!
use crate::{
    error::{MessageError, MessageResult},
    message::Message,
    message_data::{CREATED_AT, METADATA, MessageData, PAYLOAD, UUID},
    message_factory::MessageFactory,
    message_kind::MessageKind,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::Value;
use uuid::Uuid;

/// 进程内消息注册表，可并发登记与查询
#[derive(Default)]
pub struct MessageRegistry {
    kinds: DashMap<String, MessageKind>,
}

impl MessageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记消息名称及其种类，重复登记返回 `AlreadyRegistered`
    pub fn register(&self, name: impl Into<String>, kind: MessageKind) -> MessageResult<()> {
        match self.kinds.entry(name.into()) {
            Entry::Occupied(entry) => Err(MessageError::AlreadyRegistered(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(kind);
                Ok(())
            }
        }
    }

    pub fn register_command(&self, name: impl Into<String>) -> MessageResult<()> {
        self.register(name, MessageKind::Command)
    }

    pub fn register_query(&self, name: impl Into<String>) -> MessageResult<()> {
        self.register(name, MessageKind::Query)
    }

    pub fn register_event(&self, name: impl Into<String>) -> MessageResult<()> {
        self.register(name, MessageKind::Event)
    }

    pub fn kind_of(&self, name: &str) -> Option<MessageKind> {
        self.kinds.get(name).map(|entry| *entry.value())
    }

    /// 获取已登记的消息名列表（只读视图）
    pub fn registered_messages(&self) -> Vec<String> {
        self.kinds.iter().map(|e| e.key().clone()).collect()
    }
}

impl MessageFactory for MessageRegistry {
    fn create_message_from_map(&self, name: &str, mut data: MessageData) -> MessageResult<Message> {
        let kind = self
            .kind_of(name)
            .ok_or_else(|| MessageError::NotRegistered(name.to_string()))?;

        // 标识是不透明字符串，仅在缺省时生成
        let uuid = match data.remove(UUID) {
            None | Some(Value::Null) => Uuid::new_v4().to_string(),
            Some(Value::String(raw)) if raw.is_empty() => Uuid::new_v4().to_string(),
            Some(Value::String(raw)) => raw,
            Some(_) => return Err(MessageError::invalid_data(name, "uuid must be a string")),
        };

        let created_at = match data.remove(CREATED_AT) {
            None | Some(Value::Null) => Utc::now(),
            Some(Value::String(raw)) => parse_created_at(&raw)?,
            Some(_) => {
                return Err(MessageError::invalid_data(
                    name,
                    "created_at must be a timestamp string",
                ));
            }
        };

        let payload = take_object(&mut data, PAYLOAD, name)?;
        let metadata = take_object(&mut data, METADATA, name)?;

        Ok(Message::builder()
            .uuid(uuid)
            .message_name(name)
            .message_type(kind.as_str())
            .payload(payload)
            .metadata(metadata)
            .created_at(created_at)
            .build())
    }
}

/// 无时区的时间戳格式，按 UTC 解释
const NAIVE_CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// RFC 3339 优先，其次是无时区格式
fn parse_created_at(raw: &str) -> MessageResult<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(at.with_timezone(&Utc));
    }

    Ok(NaiveDateTime::parse_from_str(raw, NAIVE_CREATED_AT_FORMAT)?.and_utc())
}

// 缺省或 null 视为空映射
fn take_object(data: &mut MessageData, key: &str, name: &str) -> MessageResult<MessageData> {
    match data.remove(key) {
        None | Some(Value::Null) => Ok(MessageData::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(MessageError::invalid_data(
            name,
            format!("{key} must be an object"),
        )),
    }
}
