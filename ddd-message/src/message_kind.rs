use crate::error::MessageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 消息种类
///
/// 决定消息被路由到哪一条总线：
/// - `Command`：写意图，投递到命令总线；
/// - `Query`：读意图，投递到查询总线并返回延迟结果；
/// - `Event`：已发生的事实，投递到事件总线。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Command,
    Query,
    Event,
}

impl MessageKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Command => "command",
            MessageKind::Query => "query",
            MessageKind::Event => "event",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "command" => Ok(MessageKind::Command),
            "query" => Ok(MessageKind::Query),
            "event" => Ok(MessageKind::Event),
            other => Err(MessageError::UnknownKind(other.to_string())),
        }
    }
}
