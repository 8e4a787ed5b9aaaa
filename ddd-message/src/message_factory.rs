use crate::{error::MessageResult, message::Message, message_data::MessageData};

/// 消息工厂（Message Factory）
///
/// 根据消息名称与原始数据构建 [`Message`]，并给出消息分类。
/// 数据结构不满足该消息要求时返回错误。
pub trait MessageFactory: Send + Sync {
    fn create_message_from_map(&self, name: &str, data: MessageData) -> MessageResult<Message>;
}
