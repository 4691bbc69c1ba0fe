use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use crud_api::config::Environment;
use crud_api::http::router;
use crud_api::lifecycle::{seed_demo_data, ApiSystem};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

// --- Helpers ---

fn app(environment: Environment) -> (Router, ApiSystem) {
    let system = ApiSystem::new(16);
    (router(&system, environment), system)
}

async fn send_raw(router: &Router, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map_or_else(Body::empty, |value| Body::from(value.to_string()));
    send_raw(router, method, uri, body).await
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, "GET", uri, None).await
}

async fn post(router: &Router, uri: &str, body: Value) -> Value {
    let (status, json) = send(router, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json["data"].clone()
}

fn error_message(json: &Value) -> &str {
    json["error"]["message"].as_str().unwrap_or_default()
}

// --- Users ---

#[tokio::test]
async fn test_create_user_assigns_next_id() {
    let (router, _system) = app(Environment::Development);

    let (status, json) = send(
        &router,
        "POST",
        "/api/users",
        Some(json!({ "name": "Ada", "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "User created successfully");
    assert_eq!(json["data"]["id"], 1);
    assert!(json["data"]["createdAt"].is_string());

    let second = post(&router, "/api/users", json!({ "name": "Bo", "email": "bo@example.com" })).await;
    assert_eq!(second["id"], 2);
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict_and_changes_nothing() {
    let (router, _system) = app(Environment::Development);
    post(&router, "/api/users", json!({ "name": "Ada", "email": "ada@example.com" })).await;
    let bo = post(&router, "/api/users", json!({ "name": "Bo", "email": "bo@example.com" })).await;

    let (status, json) = send(
        &router,
        "POST",
        "/api/users",
        Some(json!({ "name": "Copy", "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["success"], false);

    let (status, _) = send(
        &router,
        "PUT",
        "/api/users/2",
        Some(json!({ "name": "Bob", "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, listed) = get(&router, "/api/users").await;
    assert_eq!(listed["count"], 2);
    let (_, fetched) = get(&router, "/api/users/2").await;
    assert_eq!(fetched["data"], bo);
}

#[tokio::test]
async fn test_replace_user_keeps_id_and_created_at() {
    let (router, _system) = app(Environment::Development);
    let ada = post(&router, "/api/users", json!({ "name": "Ada", "email": "ada@example.com" })).await;

    let (status, json) = send(
        &router,
        "PUT",
        "/api/users/1",
        Some(json!({ "name": "Ada L.", "email": "ada@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "User updated successfully");
    assert_eq!(json["data"]["name"], "Ada L.");
    assert_eq!(json["data"]["id"], ada["id"]);
    assert_eq!(json["data"]["createdAt"], ada["createdAt"]);
}

#[tokio::test]
async fn test_non_numeric_ids_are_bad_requests() {
    let (router, _system) = app(Environment::Development);
    for uri in ["/api/users/abc", "/api/products/1.5", "/api/tasks/-1"] {
        let (status, json) = get(&router, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(json["success"], false);
    }
}

#[tokio::test]
async fn test_out_of_range_id_is_not_found() {
    let (router, _system) = app(Environment::Development);
    let (status, json) = send(&router, "DELETE", "/api/tasks/99999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&json), "Task with id 99999999999 not found");
}

#[tokio::test]
async fn test_undecodable_id_gets_an_envelope() {
    let (router, _system) = app(Environment::Development);
    let (status, json) = get(&router, "/api/tasks/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(!error_message(&json).is_empty());
}

// --- Products ---

#[tokio::test]
async fn test_create_fetch_round_trip() {
    let (router, _system) = app(Environment::Development);
    let created = post(
        &router,
        "/api/products",
        json!({ "name": "Lamp", "price": 35.5, "stock": 4, "ignored": true }),
    )
    .await;
    assert_eq!(created["description"], "");
    assert_eq!(created["category"], "general");
    assert_eq!(created["stock"], 4);
    assert!(created.get("ignored").is_none());

    let (status, fetched) = get(&router, "/api/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created);
}

#[tokio::test]
async fn test_price_range_is_inclusive() {
    let (router, _system) = app(Environment::Development);
    for (name, price) in [("a", 50), ("b", 100), ("c", 150), ("d", 200), ("e", 250)] {
        post(&router, "/api/products", json!({ "name": name, "price": price })).await;
    }

    let (status, json) = get(&router, "/api/products?minPrice=100&maxPrice=200").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 3);
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["b", "c", "d"]);

    let (status, json) = get(&router, "/api/products?minPrice=cheap").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&json), "minPrice must be a number");
}

#[tokio::test]
async fn test_product_validation_errors() {
    let (router, _system) = app(Environment::Development);

    let (status, json) = send(&router, "POST", "/api/products", Some(json!({ "name": "Mug" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&json), "price is required");

    let (status, json) = send(
        &router,
        "POST",
        "/api/products",
        Some(json!({ "name": "Mug", "price": 3, "stock": 2.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&json), "stock must be a non-negative integer");

    let (_, listed) = get(&router, "/api/products").await;
    assert_eq!(listed["count"], 0);
    assert_eq!(listed["data"], json!([]));
}

// --- Tasks ---

#[tokio::test]
async fn test_task_patch_scenario() {
    let (router, _system) = app(Environment::Development);
    let created = post(&router, "/api/tasks", json!({ "title": "A", "priority": "high" })).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["priority"], "high");
    assert_eq!(created["dueDate"], Value::Null);

    tokio::time::sleep(Duration::from_millis(5)).await;

    let (status, json) = send(
        &router,
        "PATCH",
        "/api/tasks/1",
        Some(json!({ "status": "completed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = &json["data"];
    assert_eq!(updated["status"], "completed");
    assert_eq!(updated["title"], "A");
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);
}

#[tokio::test]
async fn test_task_create_fetch_round_trip() {
    let (router, _system) = app(Environment::Development);
    let created = post(
        &router,
        "/api/tasks",
        json!({
            "title": "Plan release",
            "description": "Pick the date",
            "status": "In-Progress",
            "priority": "LOW",
            "dueDate": "2024-07-01"
        }),
    )
    .await;
    assert_eq!(created["title"], "Plan release");
    assert_eq!(created["description"], "Pick the date");
    assert_eq!(created["status"], "in-progress");
    assert_eq!(created["priority"], "low");
    assert_eq!(created["dueDate"], "2024-07-01");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let (status, fetched) = get(&router, "/api/tasks/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created);
}

#[tokio::test]
async fn test_patch_without_recognized_fields_is_rejected() {
    let (router, _system) = app(Environment::Development);
    let created = post(&router, "/api/tasks", json!({ "title": "A" })).await;

    let (status, json) = send(&router, "PATCH", "/api/tasks/1", Some(json!({ "colour": "red" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&json).starts_with("At least one field must be provided"));

    let (_, fetched) = get(&router, "/api/tasks/1").await;
    assert_eq!(fetched["data"], created);
}

#[tokio::test]
async fn test_patch_can_clear_due_date() {
    let (router, _system) = app(Environment::Development);
    post(&router, "/api/tasks", json!({ "title": "A", "dueDate": "2024-02-30" })).await;

    let (status, json) = send(&router, "PATCH", "/api/tasks/1", Some(json!({ "dueDate": null }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["dueDate"], Value::Null);
}

#[tokio::test]
async fn test_task_sorting() {
    let (router, _system) = app(Environment::Development);
    for (title, priority, due) in [
        ("w", "medium", Value::Null),
        ("x", "high", json!("2024-06-01")),
        ("y", "low", json!("2023-12-31")),
        ("z", "low", json!("2024-01-15")),
    ] {
        post(&router, "/api/tasks", json!({ "title": title, "priority": priority, "dueDate": due })).await;
    }

    let titles = |json: &Value| -> Vec<String> {
        json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["title"].as_str().unwrap().to_string())
            .collect()
    };

    let (_, json) = get(&router, "/api/tasks?sortBy=priority").await;
    assert_eq!(titles(&json), vec!["y", "z", "w", "x"]);

    let (_, json) = get(&router, "/api/tasks?sortBy=priority&order=DESC").await;
    assert_eq!(titles(&json), vec!["x", "w", "y", "z"]);

    let (_, json) = get(&router, "/api/tasks?sortBy=dueDate").await;
    assert_eq!(titles(&json), vec!["y", "z", "x", "w"]);

    // Unknown sort fields leave insertion order alone.
    let (_, json) = get(&router, "/api/tasks?sortBy=colour").await;
    assert_eq!(titles(&json), vec!["w", "x", "y", "z"]);
}

#[tokio::test]
async fn test_task_filters() {
    let (router, _system) = app(Environment::Development);
    post(&router, "/api/tasks", json!({ "title": "a", "priority": "high" })).await;
    post(&router, "/api/tasks", json!({ "title": "b", "status": "in-progress" })).await;
    post(&router, "/api/tasks", json!({ "title": "c", "priority": "HIGH", "status": "Completed" })).await;

    let (_, json) = get(&router, "/api/tasks?priority=high").await;
    assert_eq!(json["count"], 2);

    let (_, json) = get(&router, "/api/tasks?priority=high&status=completed").await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["data"][0]["title"], "c");
    assert_eq!(json["data"][0]["status"], "completed");

    // Unrecognized values do not filter.
    let (status, json) = get(&router, "/api/tasks?status=someday").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 3);
}

#[tokio::test]
async fn test_replace_checks_existence_before_body() {
    let (router, _system) = app(Environment::Development);

    let (status, json) = send(&router, "PUT", "/api/tasks/5", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&json), "Task with id 5 not found");

    post(&router, "/api/tasks", json!({ "title": "A" })).await;
    let (status, json) = send(&router, "PUT", "/api/tasks/1", Some(json!({ "status": "completed" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&json), "title is required");
}

#[tokio::test]
async fn test_delete_missing_task_is_not_found_and_changes_nothing() {
    let (router, _system) = app(Environment::Development);
    post(&router, "/api/tasks", json!({ "title": "keep" })).await;

    let (status, json) = send(&router, "DELETE", "/api/tasks/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&json), "Task with id 99 not found");

    let (_, listed) = get(&router, "/api/tasks").await;
    assert_eq!(listed["count"], 1);
}

#[tokio::test]
async fn test_delete_returns_the_removed_entity() {
    let (router, _system) = app(Environment::Development);
    let created = post(&router, "/api/tasks", json!({ "title": "gone" })).await;

    let (status, json) = send(&router, "DELETE", "/api/tasks/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Task deleted successfully");
    assert_eq!(json["data"], created);

    let (status, _) = get(&router, "/api/tasks/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let next = post(&router, "/api/tasks", json!({ "title": "next" })).await;
    assert_eq!(next["id"], 2);
}

// --- Boundary ---

#[tokio::test]
async fn test_malformed_json_is_a_bad_request() {
    let (router, _system) = app(Environment::Development);
    let (status, json) = send_raw(&router, "POST", "/api/tasks", Body::from("{\"title\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&json).starts_with("Malformed JSON body"));

    let (status, json) = send(&router, "POST", "/api/tasks", Some(json!(["title"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&json), "Request body must be a JSON object");
}

#[tokio::test]
async fn test_unknown_route_gets_an_envelope() {
    let (router, _system) = app(Environment::Development);
    let (status, json) = get(&router, "/api/orders").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(error_message(&json), "Route GET /api/orders not found");
}

#[tokio::test]
async fn test_unsupported_method_gets_a_not_found_envelope() {
    let (router, _system) = app(Environment::Development);
    post(&router, "/api/users", json!({ "name": "Ada", "email": "ada@example.com" })).await;

    let (status, json) = send(&router, "PATCH", "/api/users/1", Some(json!({ "name": "A" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(error_message(&json), "Route PATCH /api/users/1 not found");

    let (status, json) = send(&router, "DELETE", "/api/products", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&json), "Route DELETE /api/products not found");

    let (_, fetched) = get(&router, "/api/users/1").await;
    assert_eq!(fetched["data"]["name"], "Ada");
}

#[tokio::test]
async fn test_stack_is_hidden_in_production() {
    let (dev, _dev_system) = app(Environment::Development);
    let (_, json) = get(&dev, "/api/tasks/3").await;
    assert!(json["error"]["stack"].is_string());

    let (prod, _prod_system) = app(Environment::Production);
    let (_, json) = get(&prod, "/api/tasks/3").await;
    assert!(json["error"].get("stack").is_none());
    assert_eq!(error_message(&json), "Task with id 3 not found");
}

#[tokio::test]
async fn test_health_reports_seeded_collections() {
    let (router, system) = app(Environment::Production);
    seed_demo_data(&system).await.unwrap();

    let (status, json) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["environment"], "production");
    assert_eq!(
        json["data"]["collections"],
        json!({ "users": 2, "products": 3, "tasks": 3 })
    );
}
