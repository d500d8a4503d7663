mod support;

use std::sync::Arc;

use http::{Method, StatusCode};
use lowcoder_node::{LowcoderNode, PREVIOUS_NODE_DATA_KEY};
use lowcoder_host::{NodeType, WebhookOutcome, WebhookReplyBody, WebhookRequest, WorkflowItem};
use pretty_assertions::assert_eq;
use support::{context, context_with_options, MemoryHost};

const BOT_UA: &str = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

fn resume_request() -> WebhookRequest {
    WebhookRequest::new(Method::POST, "/65129e728953c27f7d15b64d")
        .with_header("content-type", "application/json")
        .with_query("type", "resume")
        .with_body(serde_json::json!({"answer": 42}))
}

#[tokio::test]
async fn execute_parks_the_execution_and_passes_items_through() {
    let host = Arc::new(MemoryHost::default());
    let ctx = context(Arc::clone(&host));
    let node = LowcoderNode::new();

    let items = vec![
        WorkflowItem::new(serde_json::json!({"a": 1})),
        WorkflowItem::new(serde_json::json!({"b": 2})),
    ];
    let output = node.execute(items.clone(), &ctx).await.unwrap();

    assert_eq!(output, items);
    assert_eq!(
        host.waited_until.lock().as_ref().map(|dt| dt.to_rfc3339()),
        Some("3000-01-01T00:00:00+00:00".to_owned())
    );
    assert_eq!(
        host.static_data.lock().get(PREVIOUS_NODE_DATA_KEY),
        Some(&serde_json::json!([{"a": 1}, {"b": 2}]))
    );
}

#[tokio::test]
async fn execute_overwrites_previous_data_on_each_pause() {
    let host = Arc::new(MemoryHost::default());
    let ctx = context(Arc::clone(&host));
    let node = LowcoderNode::new();

    node.execute(vec![WorkflowItem::new(serde_json::json!({"run": 1}))], &ctx)
        .await
        .unwrap();
    node.execute(vec![WorkflowItem::new(serde_json::json!({"run": 2}))], &ctx)
        .await
        .unwrap();

    assert_eq!(
        host.static_data.lock().get(PREVIOUS_NODE_DATA_KEY),
        Some(&serde_json::json!([{"run": 2}]))
    );
}

#[tokio::test]
async fn resume_delivery_carries_the_request_envelope() {
    let host = Arc::new(MemoryHost::default());
    let ctx = context(host);
    let node = LowcoderNode::new();

    let outcome = node.webhook(resume_request(), &ctx).await.unwrap();

    match outcome {
        WebhookOutcome::Resume { items, status } => {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(items.len(), 1);
            let json = &items[0].json;
            assert_eq!(json["headers"]["content-type"], "application/json");
            assert_eq!(json["query"]["type"], "resume");
            assert_eq!(json["body"], serde_json::json!({"answer": 42}));
            assert_eq!(json["params"], serde_json::json!({}));
        }
        WebhookOutcome::Direct { .. } => panic!("expected Resume"),
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn resume_uses_the_configured_response_code() {
    let host = Arc::new(MemoryHost::default());
    let ctx = context_with_options(host, serde_json::json!({"response_code": 201}));
    let node = LowcoderNode::new();

    let outcome = node.webhook(resume_request(), &ctx).await.unwrap();
    match outcome {
        WebhookOutcome::Resume { status, .. } => assert_eq!(status, StatusCode::CREATED),
        WebhookOutcome::Direct { .. } => panic!("expected Resume"),
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn non_resume_delivery_answers_directly_with_previous_data() {
    let host = Arc::new(MemoryHost::default());
    let ctx = context(Arc::clone(&host));
    let node = LowcoderNode::new();

    node.execute(vec![WorkflowItem::new(serde_json::json!({"seen": true}))], &ctx)
        .await
        .unwrap();

    let request = WebhookRequest::new(Method::GET, "/65129e728953c27f7d15b64d")
        .with_query("type", "status");
    let outcome = node.webhook(request, &ctx).await.unwrap();

    assert!(!outcome.resumes_execution());
    match outcome {
        WebhookOutcome::Direct { reply } => {
            assert_eq!(reply.status, StatusCode::OK);
            match reply.body {
                WebhookReplyBody::Json(body) => {
                    assert_eq!(body["message"], "Static response: workflow not resumed");
                    assert_eq!(body["type"], "status");
                    assert_eq!(body["previousData"], serde_json::json!([{"seen": true}]));
                }
                other => panic!("expected JSON body, got {other:?}"),
            }
        }
        WebhookOutcome::Resume { .. } => panic!("expected Direct"),
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn non_resume_delivery_before_any_pause_reports_empty_sequence() {
    let host = Arc::new(MemoryHost::default());
    let ctx = context(host);
    let node = LowcoderNode::new();

    let request = WebhookRequest::new(Method::GET, "/app");
    let outcome = node.webhook(request, &ctx).await.unwrap();

    match outcome {
        WebhookOutcome::Direct { reply } => match reply.body {
            WebhookReplyBody::Json(body) => {
                assert_eq!(body["previousData"], serde_json::json!([]));
                assert_eq!(body["type"], serde_json::Value::Null);
            }
            other => panic!("expected JSON body, got {other:?}"),
        },
        WebhookOutcome::Resume { .. } => panic!("expected Direct"),
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn bot_delivery_is_rejected_with_401_when_filtering_is_on() {
    let host = Arc::new(MemoryHost::default());
    let ctx = context_with_options(host, serde_json::json!({"ignore_bots": true}));
    let node = LowcoderNode::new();

    let request = resume_request().with_header("user-agent", BOT_UA);
    let outcome = node.webhook(request, &ctx).await.unwrap();

    assert!(!outcome.resumes_execution());
    match outcome {
        WebhookOutcome::Direct { reply } => {
            assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
            assert_eq!(
                reply.headers.get("www-authenticate").unwrap(),
                "Basic realm=\"Webhook\""
            );
            assert_eq!(
                reply.body,
                WebhookReplyBody::Text("Authorization data is wrong!".to_owned())
            );
        }
        WebhookOutcome::Resume { .. } => panic!("expected Direct"),
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn bot_delivery_proceeds_when_filtering_is_off() {
    let host = Arc::new(MemoryHost::default());
    let ctx = context_with_options(host, serde_json::json!({"ignore_bots": false}));
    let node = LowcoderNode::new();

    let request = resume_request().with_header("user-agent", BOT_UA);
    let outcome = node.webhook(request, &ctx).await.unwrap();
    assert!(outcome.resumes_execution());
}

#[tokio::test]
async fn browser_delivery_passes_the_bot_filter() {
    let host = Arc::new(MemoryHost::default());
    let ctx = context_with_options(host, serde_json::json!({"ignore_bots": true}));
    let node = LowcoderNode::new();

    let request = resume_request().with_header(
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36",
    );
    let outcome = node.webhook(request, &ctx).await.unwrap();
    assert!(outcome.resumes_execution());
}
