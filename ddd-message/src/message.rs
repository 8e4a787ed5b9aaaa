use crate::error::MessageResult;
use crate::message_data::MessageData;
use crate::message_kind::MessageKind;
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 应用消息（命令/查询/事件）
///
/// 由消息工厂按请求构建，分发一次后即丢弃。
/// `message_type` 保存工厂给出的原始分类，路由前通过 [`Message::kind`] 解析，
/// 而不是直接信任调用方声明的类型字符串。
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// 消息唯一标识
    #[builder(into)]
    uuid: String,
    /// 消息名称，用于定位处理器
    #[builder(into)]
    message_name: String,
    /// 消息分类（command/query/event）
    #[builder(into)]
    message_type: String,
    /// 消息载荷
    #[builder(default)]
    payload: MessageData,
    /// 元数据（调用方提供与请求采集的合并结果）
    #[builder(default)]
    metadata: MessageData,
    /// 创建时间
    #[builder(default = Utc::now())]
    created_at: DateTime<Utc>,
}

impl Message {
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn message_name(&self) -> &str {
        &self.message_name
    }

    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    pub fn payload(&self) -> &MessageData {
        &self.payload
    }

    pub fn metadata(&self) -> &MessageData {
        &self.metadata
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 解析消息种类；分类不属于 command/query/event 时返回 `UnknownKind`
    pub fn kind(&self) -> MessageResult<MessageKind> {
        self.message_type.parse()
    }
}
