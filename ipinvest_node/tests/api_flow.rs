//! End-to-end marketplace flow: submit an idea, sell its tokens, compute
//! the royalty split and assemble the splitter transaction bodies.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ipinvest_node::api::{create_router, AppState};
use ipinvest_node::config::Config;
use ipinvest_node::storage::memory::MemoryStore;

fn test_router() -> Router {
    let state = AppState::new(Arc::new(MemoryStore::new()), Config::default());
    create_router(state)
}

async fn request(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let req = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn submit_idea(router: &Router) -> Value {
    let (status, idea) = request(
        router,
        "POST",
        "/api/ideas",
        Some(json!({
            "title": "Quantum Computing Patent",
            "description": "Revolutionary quantum algorithm for cryptography",
            "field": "Quantum Computing",
            "inventor": "Dr. Alice Chen"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    idea
}

#[tokio::test]
async fn health_reports_network() {
    let router = test_router();
    let (status, body) = request(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["network"], "andromeda-1");
}

#[tokio::test]
async fn submitted_idea_gets_valuation_and_supply() {
    let router = test_router();
    let idea = submit_idea(&router).await;

    assert_eq!(idea["total_tokens"], 1000);
    assert_eq!(idea["tokens_sold"], 0);
    assert_eq!(idea["status"], "active");
    assert!(idea["nft_id"].as_str().unwrap().starts_with("IP-"));

    let value = idea["predicted_value"].as_f64().unwrap();
    let price = idea["token_price"].as_f64().unwrap();
    assert!((500_000.0..3_000_000.0).contains(&value));
    assert!((price * 1000.0 - value).abs() < 1e-6);

    // It shows up in the active list.
    let (status, ideas) = request(&router, "GET", "/api/ideas", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ideas.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_fields_are_rejected() {
    let router = test_router();
    let (status, body) = request(
        &router,
        "POST",
        "/api/ideas",
        Some(json!({
            "title": " ",
            "description": "d",
            "field": "f",
            "inventor": "i"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["field"], "title");
}

#[tokio::test]
async fn invest_then_split_royalties() {
    let router = test_router();
    let idea = submit_idea(&router).await;
    let idea_id = idea["id"].as_str().unwrap().to_string();
    let price = idea["token_price"].as_f64().unwrap();

    let invest_uri = format!("/api/ideas/{}/invest", idea_id);
    let (status, resp) = request(
        &router,
        "POST",
        &invest_uri,
        Some(json!({ "wallet_address": "andr1aaa", "tokens": 700 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["success"], true);
    assert_eq!(resp["tokens_purchased"], 700);
    assert_eq!(resp["tokens_remaining"], 300);
    assert!((resp["total_cost"].as_f64().unwrap() - 700.0 * price).abs() < 1e-6);
    assert!(resp["transaction_hash"].as_str().unwrap().starts_with("TX-"));

    let (status, _) = request(
        &router,
        "POST",
        &invest_uri,
        Some(json!({ "wallet_address": "andr1bbb", "tokens": 300 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Supply is exhausted now.
    let (status, body) = request(
        &router,
        "POST",
        &invest_uri,
        Some(json!({ "wallet_address": "andr1ccc", "tokens": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["available"], 0);

    // 0.7 creator, 700/1000 and 300/1000 of the 0.3 pool.
    let (status, split) = request(
        &router,
        "POST",
        &format!("/api/splitter/royalties/{}", idea_id),
        Some(json!({ "creator_address": "andr1creator" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let recipients = split["recipients"].as_array().unwrap();
    assert_eq!(recipients.len(), 3);
    assert_eq!(recipients[0]["recipient"]["address"], "andr1creator");
    assert_eq!(recipients[0]["percent"], "0.7");
    assert_eq!(recipients[1]["recipient"]["address"], "andr1aaa");
    assert_eq!(recipients[1]["percent"], "0.21");
    assert_eq!(recipients[2]["recipient"]["address"], "andr1bbb");
    assert_eq!(recipients[2]["percent"], "0.09");

    assert_eq!(split["display"][0]["percent"], "70.00%");
    assert_eq!(split["display"][1]["percent"], "21.00%");

    // Portfolio sees the first wallet's position at current prices.
    let (status, portfolio) = request(&router, "GET", "/api/portfolio/andr1aaa", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(portfolio["investments"].as_array().unwrap().len(), 1);
    assert!((portfolio["total_value"].as_f64().unwrap() - 700.0 * price).abs() < 1e-6);
}

#[tokio::test]
async fn royalties_without_investors_fail() {
    let router = test_router();
    let idea = submit_idea(&router).await;
    let idea_id = idea["id"].as_str().unwrap();

    let (status, body) = request(
        &router,
        "POST",
        &format!("/api/splitter/royalties/{}", idea_id),
        Some(json!({ "creator_address": "andr1creator" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Insufficient participants");
}

#[tokio::test]
async fn royalties_for_unknown_idea_404() {
    let router = test_router();
    let (status, _) = request(
        &router,
        "POST",
        "/api/splitter/royalties/00000000-0000-0000-0000-000000000000",
        Some(json!({ "creator_address": "andr1creator" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn instantiate_tx_body_is_unsigned_cosmjs_shape() {
    let router = test_router();
    let (status, body) = request(
        &router,
        "POST",
        "/api/splitter/instantiate",
        Some(json!({
            "creator_address": "andr1tjw6yhv5ln0tlgph3g352dvrssn898qzncv6kz",
            "treasury_address": "andr1ddja765fy64v432dydm0ggfaqejgtzlfyr9l8c"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["typeUrl"], "/cosmwasm.wasm.v1.MsgInstantiateContract");
    assert_eq!(body["value"]["codeId"], "1215");
    assert_eq!(body["value"]["label"], "Splitter-andr1tjw");
    assert_eq!(body["value"]["funds"], json!([]));

    // The contract msg travels as an embedded JSON string.
    let inner: Value =
        serde_json::from_str(body["value"]["msg"].as_str().unwrap()).unwrap();
    assert_eq!(inner["recipients"][0]["percent"], "0.8");
    assert_eq!(inner["recipients"][1]["percent"], "0.2");
    assert!(inner["lock_time"].is_null());
    assert_eq!(
        inner["owner"],
        "andr1tjw6yhv5ln0tlgph3g352dvrssn898qzncv6kz"
    );
}

#[tokio::test]
async fn send_tx_body_defaults_to_one_andr() {
    let router = test_router();
    let (status, body) = request(
        &router,
        "POST",
        "/api/splitter/send",
        Some(json!({
            "sender_address": "andr1sender",
            "splitter_address": "andr1splitter"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["typeUrl"], "/cosmwasm.wasm.v1.MsgExecuteContract");
    assert_eq!(body["value"]["msg"], "{\"send\":{}}");
    assert_eq!(
        body["value"]["funds"],
        json!([{ "denom": "uandr", "amount": "1000000" }])
    );
}

#[tokio::test]
async fn analytics_track_investments() {
    let router = test_router();
    let idea = submit_idea(&router).await;
    let idea_id = idea["id"].as_str().unwrap();
    let price = idea["token_price"].as_f64().unwrap();

    let (_, _) = request(
        &router,
        "POST",
        &format!("/api/ideas/{}/invest", idea_id),
        Some(json!({ "wallet_address": "andr1aaa", "tokens": 10 })),
    )
    .await;

    let (status, body) = request(&router, "GET", "/api/analytics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_ideas"], 1);
    assert_eq!(body["total_investments"], 1);
    assert!((body["total_value"].as_f64().unwrap() - 10.0 * price).abs() < 1e-6);

    let (status, recs) = request(&router, "GET", "/api/recommendations", None).await;
    assert_eq!(status, StatusCode::OK);
    let recs = recs.as_array().unwrap();
    assert_eq!(recs.len(), 1);
    let score = recs[0]["score"].as_f64().unwrap();
    assert!((0.6..0.95).contains(&score));
}
