mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pet_adoption::routes::build_router;
use serde_json::{Value, json};
use sqlx::PgPool;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(build_router(state, &[], 1024 * 1024)).unwrap()
}

fn registration(username: &str, password: &str) -> Value {
    json!({
        "username": username,
        "password": password,
        "first_name": "Alice",
        "last_name": "Liddell",
        "age": 30,
        "address": "1 Rabbit Hole",
        "contact_number": "555-0100",
        "email": "alice@example.com"
    })
}

// ─── REGISTER ────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_register_success(pool: PgPool) {
    let server = make_server(pool.clone());

    let response = server
        .post("/api/register")
        .json(&registration("alice", "pw1"))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "msg": "User registered successfully" }));

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE username = 'alice'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_ne!(stored, "pw1");
    assert!(stored.starts_with("$2"));
}

#[sqlx::test]
async fn test_register_missing_field(pool: PgPool) {
    let server = make_server(pool);

    let mut body = registration("alice", "pw1");
    body.as_object_mut().unwrap().remove("email");

    let response = server.post("/api/register").json(&body).await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_register_wrongly_typed_age(pool: PgPool) {
    let server = make_server(pool);

    for age in [json!("abc"), json!(1.5)] {
        let mut body = registration("alice", "pw1");
        body["age"] = age;

        let response = server.post("/api/register").json(&body).await;

        response.assert_status_bad_request();
        let json = response.json::<Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }
}

#[sqlx::test]
async fn test_register_malformed_json(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/register")
        .content_type("application/json")
        .bytes("{\"username\": ".into())
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_register_duplicate_username(pool: PgPool) {
    let server = make_server(pool);

    server
        .post("/api/register")
        .json(&registration("alice", "pw1"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/register")
        .json(&registration("alice", "other"))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["message"], "Username already exists");
}

// ─── LOGIN ───────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_register_then_login(pool: PgPool) {
    let server = make_server(pool);

    server
        .post("/api/register")
        .json(&registration("alice", "pw1"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/login")
        .json(&json!({ "username": "alice", "password": "pw1" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["username"], "alice");
    assert!(json["user_id"].as_i64().unwrap() > 0);

    let token = json["token"].as_str().unwrap();
    let identity = common::test_tokens().verify(token).unwrap();
    assert_eq!(identity.username, "alice");
    assert_eq!(identity.user_id, json["user_id"].as_i64().unwrap());
}

#[sqlx::test]
async fn test_login_wrong_password(pool: PgPool) {
    common::create_test_user(&pool, "alice", "pw1").await;
    let server = make_server(pool);

    let response = server
        .post("/api/login")
        .json(&json!({ "username": "alice", "password": "wrong" }))
        .await;

    response.assert_status_unauthorized();
    response.assert_json(&json!({ "msg": "Invalid credentials" }));
}

#[sqlx::test]
async fn test_login_unknown_user(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/login")
        .json(&json!({ "username": "nobody", "password": "pw1" }))
        .await;

    response.assert_status_unauthorized();
    response.assert_json(&json!({ "msg": "Invalid credentials" }));
}

#[sqlx::test]
async fn test_login_missing_password(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/login")
        .json(&json!({ "username": "alice" }))
        .await;

    response.assert_status_bad_request();
}
