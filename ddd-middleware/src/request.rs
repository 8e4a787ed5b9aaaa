//! 入站请求能力
//!
//! 中间件只依赖请求的三项能力：读取已解析的请求体、读取命名属性（通常由路由层写入）、
//! 读取 URL 查询参数。
//!
use crate::error::{MiddlewareError, MiddlewareResult};
use ddd_message::MessageData;
use serde_json::Value;
use std::collections::HashMap;

/// 请求体已解析为 JSON 的入站请求
pub type ServerRequest = http::Request<Value>;

/// 请求属性，存放在请求扩展（extensions）中
#[derive(Clone, Debug, Default)]
pub struct RequestAttributes(HashMap<String, String>);

impl RequestAttributes {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

pub trait RequestExt {
    fn attribute(&self, key: &str) -> Option<&str>;

    fn with_attribute(self, key: impl Into<String>, value: impl Into<String>) -> Self;

    /// 请求体为 `null` 时视为空映射，非对象时返回 `MalformedMessage`
    fn parsed_body(&self) -> MiddlewareResult<MessageData>;

    fn query_params(&self) -> MessageData;
}

impl RequestExt for ServerRequest {
    fn attribute(&self, key: &str) -> Option<&str> {
        self.extensions()
            .get::<RequestAttributes>()
            .and_then(|attrs| attrs.get(key))
    }

    fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self.extensions_mut().get_mut::<RequestAttributes>() {
            Some(attrs) => attrs.insert(key, value),
            None => {
                let mut attrs = RequestAttributes::default();
                attrs.insert(key, value);
                self.extensions_mut().insert(attrs);
            }
        }
        self
    }

    fn parsed_body(&self) -> MiddlewareResult<MessageData> {
        match self.body() {
            Value::Null => Ok(MessageData::new()),
            Value::Object(map) => Ok(map.clone()),
            _ => Err(MiddlewareError::malformed("request body must be an object")),
        }
    }

    fn query_params(&self) -> MessageData {
        let query = self.uri().query().unwrap_or_default();
        url::form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
            .collect()
    }
}
