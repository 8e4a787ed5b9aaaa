use async_trait::async_trait;
use ddd_message::{CommandBus, Deferred, EventBus, Message, MessageRegistry, QueryBus};
use ddd_middleware::{
    ErrorResponder, JsonResponseStrategy, MessageDispatcher, QUERY_NAME_ATTRIBUTE,
    QueryDispatcher, RequestExt, empty_response,
};
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

struct PrintingBus;

#[async_trait]
impl CommandBus for PrintingBus {
    async fn dispatch(&self, message: Message) -> anyhow::Result<()> {
        println!(
            "command: name={}, payload={:?}",
            message.message_name(),
            message.payload()
        );
        Ok(())
    }
}

#[async_trait]
impl EventBus for PrintingBus {
    async fn dispatch(&self, message: Message) -> anyhow::Result<()> {
        println!("event: name={}", message.message_name());
        Ok(())
    }
}

struct UserQueries;

impl QueryBus for UserQueries {
    fn dispatch(&self, message: Message) -> anyhow::Result<Deferred> {
        let user_id = message.payload().get("user_id").cloned();
        Ok(Deferred::spawn(async move {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Ok(json!({ "user_id": user_id, "name": "Alice" }))
        }))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Arc::new(MessageRegistry::new());
    registry.register_command("RegisterUser")?;
    registry.register_event("UserRegistered")?;
    registry.register_query("FetchUser")?;

    let strategy = Arc::new(
        JsonResponseStrategy::builder()
            .timeout(Duration::from_secs(1))
            .build(),
    );

    let dispatcher = MessageDispatcher::builder()
        .command_bus(Arc::new(PrintingBus))
        .query_bus(Arc::new(UserQueries))
        .event_bus(Arc::new(PrintingBus))
        .message_factory(registry.clone())
        .response_strategy(strategy.clone())
        .build();

    let request = http::Request::new(json!({
        "uuid": "08db0554-8e07-49a3-9cf2-d28dd9ec10ab",
        "message_name": "RegisterUser",
        "payload": { "user_id": 123 },
    }));
    let response = dispatcher.dispatch(&request).await?;
    println!("RegisterUser -> {}", response.status());

    // 未登记的消息 -> InvalidMessage 错误，由外层转换为响应
    let request = http::Request::new(json!({
        "uuid": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
        "message_name": "DeleteUser",
    }));
    if let Err(err) = dispatcher.dispatch(&request).await {
        let response = err.to_response();
        println!("DeleteUser -> {} {}", response.status(), response.body());
    }

    let queries = QueryDispatcher::builder()
        .query_bus(Arc::new(UserQueries))
        .message_factory(registry)
        .response_strategy(strategy)
        .include_query_params(true)
        .build();

    let request = http::Request::builder()
        .uri("/users?user_id=123")
        .body(serde_json::Value::Null)?
        .with_attribute(QUERY_NAME_ATTRIBUTE, "FetchUser");
    let response = queries
        .dispatch(request, empty_response(StatusCode::OK), &ErrorResponder)
        .await;
    println!("FetchUser -> {} {}", response.status(), response.body());

    Ok(())
}
