mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_returns_token_pair() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "name": "A",
            "email": "a@x.com",
            "password": "p1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(!body["data"]["accessToken"].as_str().unwrap().is_empty());
    assert!(!body["data"]["refreshToken"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email_is_conflict() {
    let app = TestApp::spawn().await;

    app.register("A", "a@x.com", "p1").await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "name": "B",
            "email": "a@x.com",
            "password": "p2"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    // First registration is unaffected: its credentials still log in
    let response = app
        .post("/auth/login")
        .json(&json!({"email": "a@x.com", "password": "p1"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_register_then_login_round_trip() {
    let app = TestApp::spawn().await;

    app.register("A", "a@x.com", "p1").await;

    let response = app
        .post("/auth/login")
        .json(&json!({"email": "a@x.com", "password": "p1"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(!body["data"]["accessToken"].as_str().unwrap().is_empty());
    assert!(!body["data"]["refreshToken"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.register("A", "a@x.com", "p1").await;

    let wrong_password = app
        .post("/auth/login")
        .json(&json!({"email": "a@x.com", "password": "wrong"}))
        .send()
        .await
        .expect("Failed to execute request");

    let unknown_email = app
        .post("/auth/login")
        .json(&json!({"email": "nobody@x.com", "password": "p1"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Identical error shape: no email enumeration
    let first: serde_json::Value = wrong_password.json().await.unwrap();
    let second: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_refresh_exchanges_refresh_token_for_access_token() {
    let app = TestApp::spawn().await;

    let (_, refresh_token) = app.register("A", "a@x.com", "p1").await;

    let response = app
        .post("/auth/refresh")
        .json(&json!({"refresh_token": refresh_token}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.unwrap();
    let access_token = body["data"]["access_token"].as_str().unwrap();
    assert!(!access_token.is_empty());

    // The minted access token works on a protected route
    let response = app
        .post_authenticated("/coffees", access_token)
        .json(&json!({
            "name": "Espresso",
            "slug": "espresso",
            "description": "Strong Italian coffee",
            "price": 4.99
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::spawn().await;

    let (access_token, _) = app.register("A", "a@x.com", "p1").await;

    let response = app
        .post("/auth/refresh")
        .json(&json!({"refresh_token": access_token}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_lifecycle() {
    let app = TestApp::spawn().await;

    let (access_token, _) = app.register("A", "a@x.com", "p1").await;

    // Create a coffee with the real token
    let response = app
        .post_authenticated("/coffees", &access_token)
        .json(&json!({
            "name": "Espresso",
            "slug": "espresso",
            "description": "Strong Italian coffee",
            "price": 4.99
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    // Delete succeeds with the token
    let response = app
        .delete_authenticated("/coffees/espresso", &access_token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    // Garbage bearer token is rejected before the handler runs
    let response = app
        .delete_authenticated("/coffees/espresso", "garbage")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_requires_header() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/coffees")
        .json(&json!({
            "name": "Espresso",
            "slug": "espresso",
            "description": "Strong Italian coffee",
            "price": 4.99
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_catalog_reads_are_public() {
    let app = TestApp::spawn().await;

    let (access_token, _) = app.register("A", "a@x.com", "p1").await;

    app.post_authenticated("/coffees", &access_token)
        .json(&json!({
            "name": "Flat White",
            "slug": "flat-white",
            "description": "Espresso with microfoam",
            "price": 5.49,
            "image": "flat-white.jpg"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // No Authorization header on either read
    let response = app
        .get("/coffees/flat-white")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["name"], "Flat White");
    assert_eq!(body["data"]["price"], 5.49);

    let response = app.get("/coffees").send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_coffee_partial_fields() {
    let app = TestApp::spawn().await;

    let (access_token, _) = app.register("A", "a@x.com", "p1").await;

    app.post_authenticated("/coffees", &access_token)
        .json(&json!({
            "name": "Espresso",
            "slug": "espresso",
            "description": "Strong Italian coffee",
            "price": 4.99
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .put_authenticated("/coffees/espresso", &access_token)
        .json(&json!({"price": 5.25}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["data"]["price"], 5.25);
    assert_eq!(body["data"]["name"], "Espresso");
}

#[tokio::test]
async fn test_invalid_register_body_is_unprocessable() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "name": "A",
            "email": "not-an-email",
            "password": "p1"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
