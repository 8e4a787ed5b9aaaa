#![allow(dead_code)]

use async_trait::async_trait;
use ddd_message::{
    CommandBus, Deferred, EventBus, Message, MessageData, MessageError, MessageFactory,
    MessageResult, QueryBus,
};
use ddd_middleware::{
    JsonResponse, MetadataGatherer, MiddlewareError, Next, ResponseStrategy, ServerRequest,
    json_response,
};
use http::StatusCode;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn object(value: Value) -> MessageData {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

pub fn post(body: Value) -> ServerRequest {
    http::Request::builder()
        .method("POST")
        .uri("/api/messages")
        .body(body)
        .unwrap()
}

#[derive(Default)]
pub struct Recorder {
    calls: AtomicUsize,
    received: Mutex<Vec<Message>>,
}

impl Recorder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<Message> {
        self.received.lock().unwrap().clone()
    }

    fn record(&self, message: Message) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(message);
    }
}

/// 命令/事件总线替身：记录收到的消息，可配置为分发失败
#[derive(Default)]
pub struct FakeBus {
    pub recorder: Recorder,
    fail: bool,
}

impl FakeBus {
    pub fn failing() -> Self {
        Self {
            recorder: Recorder::default(),
            fail: true,
        }
    }
}

#[async_trait]
impl CommandBus for FakeBus {
    async fn dispatch(&self, message: Message) -> anyhow::Result<()> {
        self.recorder.record(message);
        if self.fail {
            anyhow::bail!("Error");
        }
        Ok(())
    }
}

#[async_trait]
impl EventBus for FakeBus {
    async fn dispatch(&self, message: Message) -> anyhow::Result<()> {
        self.recorder.record(message);
        if self.fail {
            anyhow::bail!("Error");
        }
        Ok(())
    }
}

/// 查询总线替身：返回 `{"uuid": <消息标识>}` 的延迟结果，可配置为分发失败
#[derive(Default)]
pub struct FakeQueryBus {
    pub recorder: Recorder,
    fail: bool,
}

impl FakeQueryBus {
    pub fn failing() -> Self {
        Self {
            recorder: Recorder::default(),
            fail: true,
        }
    }
}

impl QueryBus for FakeQueryBus {
    fn dispatch(&self, message: Message) -> anyhow::Result<Deferred> {
        let uuid = message.uuid().to_string();
        self.recorder.record(message);
        if self.fail {
            anyhow::bail!("Error");
        }
        Ok(Deferred::spawn(async move { Ok(json!({ "uuid": uuid })) }))
    }
}

/// 消息工厂替身：按固定分类构建消息，并记录调用参数
pub struct FakeFactory {
    message_type: String,
    fail: bool,
    calls: Mutex<Vec<(String, MessageData)>>,
}

impl FakeFactory {
    pub fn classifying(message_type: &str) -> Self {
        Self {
            message_type: message_type.to_string(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            fail: true,
            ..Self::classifying("command")
        }
    }

    pub fn calls(&self) -> Vec<(String, MessageData)> {
        self.calls.lock().unwrap().clone()
    }
}

impl MessageFactory for FakeFactory {
    fn create_message_from_map(&self, name: &str, data: MessageData) -> MessageResult<Message> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), data.clone()));

        if self.fail {
            return Err(MessageError::invalid_data(name, "payload does not match"));
        }

        let uuid = data
            .get("uuid")
            .and_then(Value::as_str)
            .unwrap_or("generated")
            .to_string();
        let section = |key: &str| match data.get(key) {
            Some(Value::Object(map)) => map.clone(),
            _ => MessageData::new(),
        };

        Ok(Message::builder()
            .uuid(uuid)
            .message_name(name)
            .message_type(self.message_type.clone())
            .payload(section("payload"))
            .metadata(section("metadata"))
            .build())
    }
}

/// 响应策略替身：记录调用；延迟结果被解析后包装进响应体
#[derive(Default)]
pub struct FakeStrategy {
    statuses: Mutex<Vec<StatusCode>>,
    deferred_calls: AtomicUsize,
}

impl FakeStrategy {
    pub fn statuses(&self) -> Vec<StatusCode> {
        self.statuses.lock().unwrap().clone()
    }

    pub fn deferred_calls(&self) -> usize {
        self.deferred_calls.load(Ordering::SeqCst)
    }

    pub fn untouched(&self) -> bool {
        self.statuses().is_empty() && self.deferred_calls() == 0
    }
}

#[async_trait]
impl ResponseStrategy for FakeStrategy {
    fn with_status(&self, status: StatusCode) -> JsonResponse {
        self.statuses.lock().unwrap().push(status);
        json_response(status, json!({ "strategy": "status" }))
    }

    async fn from_deferred(&self, deferred: Deferred) -> JsonResponse {
        self.deferred_calls.fetch_add(1, Ordering::SeqCst);
        let resolved = deferred.await.unwrap_or(Value::Null);
        json_response(
            StatusCode::OK,
            json!({ "strategy": "deferred", "resolved": resolved }),
        )
    }
}

/// 元数据采集器替身
pub struct FakeGatherer {
    metadata: MessageData,
    calls: AtomicUsize,
}

impl FakeGatherer {
    pub fn returning(metadata: Value) -> Self {
        Self {
            metadata: object(metadata),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MetadataGatherer for FakeGatherer {
    fn gather(&self, _request: &ServerRequest) -> MessageData {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.metadata.clone()
    }
}

/// `next` 替身：记录收到的状态码与错误，原样返回响应
#[derive(Default)]
pub struct RecordingNext {
    seen: Mutex<Vec<(StatusCode, String, StatusCode)>>,
}

impl RecordingNext {
    /// (响应状态码, 错误信息, 错误分类状态码)
    pub fn seen(&self) -> Vec<(StatusCode, String, StatusCode)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Next for RecordingNext {
    async fn call(
        &self,
        _request: ServerRequest,
        response: JsonResponse,
        error: MiddlewareError,
    ) -> JsonResponse {
        self.seen
            .lock()
            .unwrap()
            .push((response.status(), error.to_string(), error.status_code()));
        response
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
