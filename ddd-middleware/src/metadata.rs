use crate::request::ServerRequest;
use ddd_message::MessageData;
use std::sync::Arc;

/// 元数据采集器（Metadata Gatherer）
///
/// 从入站请求中提取上下文元数据（如请求头中的关联 ID、调用方身份），
/// 合并到构建出的消息中。
pub trait MetadataGatherer: Send + Sync {
    fn gather(&self, request: &ServerRequest) -> MessageData;
}

/// 空实现：不检查请求，始终返回空映射
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopMetadataGatherer;

impl MetadataGatherer for NoopMetadataGatherer {
    fn gather(&self, _request: &ServerRequest) -> MessageData {
        MessageData::new()
    }
}

pub(crate) fn noop_gatherer() -> Arc<dyn MetadataGatherer> {
    Arc::new(NoopMetadataGatherer)
}
