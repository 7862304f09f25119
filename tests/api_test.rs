use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use glimpse::api::GlimpseApi;
use glimpse::conf::{Config, DatasetsConfig};
use glimpse::service::GlimpseService;
use glimpse::testutil::workspace_with_samples;

fn setup() -> (TempDir, Router) {
    let (dir, config) = workspace_with_samples();
    let router = GlimpseApi::new(GlimpseService::new(config)).router();
    (dir, router)
}

fn setup_empty() -> (TempDir, Router) {
    let dir = TempDir::new().unwrap();
    let config = Config {
        datasets: DatasetsConfig {
            root: dir.path().to_path_buf(),
            ..DatasetsConfig::default()
        },
        ..Config::default()
    };
    let router = GlimpseApi::new(GlimpseService::new(config)).router();
    (dir, router)
}

async fn body_bytes(router: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, bytes)
}

async fn body_json(router: Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = body_bytes(router, req).await;
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_openapi() {
    let (_dir, router) = setup();
    let req = Request::get("/openapi.json").body(Body::empty()).unwrap();
    let (status, json) = body_json(router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["openapi"], "3.1.0");
    assert!(json["paths"].is_object());
    assert!(json["paths"]["/health"].is_object());
    assert!(json["paths"]["/api/v1/view"].is_object());
    assert!(json["paths"]["/api/v1/dataset/preview"].is_object());
}

#[tokio::test]
async fn test_health() {
    let (_dir, router) = setup();
    let req = Request::get("/health").body(Body::empty()).unwrap();
    let (status, bytes) = body_bytes(router, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"OK");
}

#[tokio::test]
async fn test_view_with_default_sources() {
    let (_dir, router) = setup();
    let (status, json) = body_json(router, post_json("/api/v1/view", &json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ready");

    let translate = &json["panels"]["translate"];
    assert_eq!(translate["sketch_sql"], "SELECT * FROM A LIMIT 20");
    assert_eq!(translate["a"]["num_rows"], 3);
    assert_eq!(translate["b"]["num_rows"], 2);

    let temporal = &json["panels"]["temporal"];
    assert_eq!(temporal["a"]["num_rows"], 3);

    // no selection was made, so no scenario panel
    assert!(json["panels"].get("scenario").is_none());
}

#[tokio::test]
async fn test_view_awaiting_datasets_is_not_an_error() {
    let (_dir, router) = setup_empty();
    let (status, json) = body_json(router, post_json("/api/v1/view", &json!({}))).await;
    // unresolvable default paths: guidance, never a hard failure
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "awaiting_datasets");
    assert!(json["message"].as_str().unwrap().contains("both datasets"));
    assert!(json.get("panels").is_none());
}

#[tokio::test]
async fn test_view_awaiting_when_one_dataset_empty() {
    let (_dir, router) = setup();
    let body = json!({
        "b": {"upload": {"content": "cost\n"}}
    });
    let (status, json) = body_json(router, post_json("/api/v1/view", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "awaiting_datasets");
}

#[tokio::test]
async fn test_view_scenario_scales_revenue() {
    let (_dir, router) = setup();
    let body = json!({
        "scenario": {"columns": ["revenue"], "multiplier": 1.1}
    });
    let (status, json) = body_json(router, post_json("/api/v1/view", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ready");

    let scenario = &json["panels"]["scenario"];
    assert_eq!(scenario["multiplier"], 1.1);
    assert_eq!(scenario["total_rows"], 3);
    assert_eq!(scenario["numeric_columns"], json!(["revenue", "units"]));

    let columns = scenario["preview"]["columns"].as_array().unwrap();
    let revenue = columns.iter().find(|c| c["name"] == "revenue").unwrap();
    let values: Vec<f64> = revenue["values"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();
    assert_eq!(values, vec![100.0 * 1.1, 200.0 * 1.1, 300.0 * 1.1]);

    // unselected numeric column untouched
    let units = columns.iter().find(|c| c["name"] == "units").unwrap();
    assert_eq!(units["values"], json!([10.0, 5.0, 8.0]));
}

#[tokio::test]
async fn test_view_scenario_halves_revenue() {
    let (_dir, router) = setup();
    let body = json!({
        "scenario": {"columns": ["revenue"], "multiplier": 0.5}
    });
    let (_, json) = body_json(router, post_json("/api/v1/view", &body)).await;
    let columns = json["panels"]["scenario"]["preview"]["columns"]
        .as_array()
        .unwrap();
    let revenue = columns.iter().find(|c| c["name"] == "revenue").unwrap();
    assert_eq!(revenue["values"], json!([50.0, 100.0, 150.0]));
}

#[tokio::test]
async fn test_view_scenario_error_reported_inline() {
    let (_dir, router) = setup();
    let body = json!({
        "scenario": {"columns": ["region"], "multiplier": 1.1}
    });
    let (status, json) = body_json(router, post_json("/api/v1/view", &body)).await;
    // the faulty panel carries the error; the rest of the view still renders
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ready");
    assert!(
        json["panels"]["scenario"]["error"]
            .as_str()
            .unwrap()
            .contains("region")
    );
    assert_eq!(json["panels"]["translate"]["a"]["num_rows"], 3);
}

#[tokio::test]
async fn test_view_scenario_multiplier_out_of_bounds() {
    let (_dir, router) = setup();
    let body = json!({
        "scenario": {"columns": ["revenue"], "multiplier": 9.0}
    });
    let (status, json) = body_json(router, post_json("/api/v1/view", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["panels"]["scenario"]["error"].is_string());
}

#[tokio::test]
async fn test_preview_upload() {
    let (_dir, router) = setup();
    let body = json!({
        "source": {"upload": {"content": "region,revenue\nnorth,100\nsouth,200\neast,300\n"}},
        "rows": 2
    });
    let (status, json) = body_json(router, post_json("/api/v1/dataset/preview", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_rows"], 3);
    assert_eq!(json["numeric_columns"], json!(["revenue"]));
    assert_eq!(json["preview"]["num_rows"], 2);
}

#[tokio::test]
async fn test_preview_repo_path() {
    let (_dir, router) = setup();
    let body = json!({"source": {"repo": {"path": "data/sample_b.csv"}}});
    let (status, json) = body_json(router, post_json("/api/v1/dataset/preview", &body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_rows"], 2);
    assert_eq!(json["numeric_columns"], json!(["cost"]));
}

#[tokio::test]
async fn test_preview_missing_path_is_404() {
    let (_dir, router) = setup();
    let body = json!({"source": {"repo": {"path": "data/nope.csv"}}});
    let (status, json) = body_json(router, post_json("/api/v1/dataset/preview", &body)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "DATASET_NOT_FOUND");
}

#[tokio::test]
async fn test_preview_malformed_upload_is_400() {
    let (_dir, router) = setup();
    let body = json!({"source": {"upload": {"content": ""}}});
    let (status, json) = body_json(router, post_json("/api/v1/dataset/preview", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_REQUEST");
}
