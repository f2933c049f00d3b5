mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use base64::{Engine, engine::general_purpose::STANDARD};
use pet_adoption::routes::build_router;
use serde_json::{Value, json};
use sqlx::PgPool;

const UPLOAD_LIMIT: usize = 64 * 1024;

fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    TestServer::new(build_router(state, &[], UPLOAD_LIMIT)).unwrap()
}

fn pet_form() -> MultipartForm {
    MultipartForm::new()
        .add_text("name", "Rex")
        .add_text("breed", "Beagle")
        .add_text("age", "3")
}

// ─── RECENT ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_recent_pets_empty(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/recent_pets").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[sqlx::test]
async fn test_recent_pets_at_most_five_newest(pool: PgPool) {
    for i in 0..7 {
        common::create_test_pet(&pool, &format!("pet{i}"), None, 70 - i * 10).await;
    }
    let server = make_server(pool);

    let response = server.get("/api/recent_pets").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["pet6", "pet5", "pet4", "pet3", "pet2"]);
}

#[sqlx::test]
async fn test_recent_pets_excludes_adopted(pool: PgPool) {
    let user_id = common::create_test_user(&pool, "adopter", "pw").await;
    common::create_test_pet(&pool, "available", None, 5).await;
    common::create_adopted_pet(&pool, "taken", user_id).await;
    let server = make_server(pool);

    let json = server.get("/api/recent_pets").await.json::<Value>();

    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "available");
}

// ─── ADD ─────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_add_pet_with_image(pool: PgPool) {
    let owner_id = common::create_test_user(&pool, "owner", "pw").await;
    let server = make_server(pool.clone());
    let image = vec![0x89, 0x50, 0x4E, 0x47, 0x00, 0x01];

    let form = pet_form().add_text("owner_id", owner_id.to_string()).add_part(
        "image",
        Part::bytes(image.clone())
            .file_name("rex.png")
            .mime_type("image/png"),
    );

    let response = server.post("/api/add_pet").multipart(form).await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "msg": "Pet added successfully" }));

    let pet_id: i64 = sqlx::query_scalar("SELECT id FROM pets WHERE name = 'Rex'")
        .fetch_one(&pool)
        .await
        .unwrap();

    let json = server
        .get(&format!("/api/pets/{pet_id}"))
        .await
        .json::<Value>();
    assert_eq!(json["name"], "Rex");
    assert_eq!(json["breed"], "Beagle");
    assert_eq!(json["age"], 3);
    assert_eq!(STANDARD.decode(json["image"].as_str().unwrap()).unwrap(), image);
}

#[sqlx::test]
async fn test_add_pet_without_owner_or_image(pool: PgPool) {
    let server = make_server(pool.clone());

    let response = server.post("/api/add_pet").multipart(pet_form()).await;

    response.assert_status(StatusCode::CREATED);

    let (owner_id, image): (Option<i64>, Option<Vec<u8>>) =
        sqlx::query_as("SELECT owner_id, image FROM pets WHERE name = 'Rex'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(owner_id.is_none());
    assert!(image.is_none());
}

#[sqlx::test]
async fn test_add_pet_missing_breed(pool: PgPool) {
    let server = make_server(pool);

    let form = MultipartForm::new()
        .add_text("name", "Rex")
        .add_text("age", "3");

    let response = server.post("/api/add_pet").multipart(form).await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_add_pet_non_numeric_age(pool: PgPool) {
    let server = make_server(pool);

    let form = MultipartForm::new()
        .add_text("name", "Rex")
        .add_text("breed", "Beagle")
        .add_text("age", "three");

    let response = server.post("/api/add_pet").multipart(form).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_add_pet_unknown_owner(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/add_pet")
        .multipart(pet_form().add_text("owner_id", "424242"))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_add_pet_image_over_limit(pool: PgPool) {
    let server = make_server(pool.clone());

    let form = pet_form().add_part(
        "image",
        Part::bytes(vec![0u8; UPLOAD_LIMIT * 2]).file_name("huge.bin"),
    );

    let response = server.post("/api/add_pet").multipart(form).await;

    assert!(response.status_code().is_client_error());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pets")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ─── GET BY ID ───────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_pet_by_id(pool: PgPool) {
    let pet_id = common::create_test_pet(&pool, "Rex", None, 0).await;
    let server = make_server(pool);

    let response = server.get(&format!("/api/pets/{pet_id}")).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Rex");
    assert_eq!(json["breed"], "Mixed");
    assert_eq!(json["age"], 2);
    assert!(json["image"].is_null());

    let date_added = json["date_added"].as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(date_added, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[sqlx::test]
async fn test_get_pet_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/pets/999999").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "msg": "Pet not found" }));
}

#[sqlx::test]
async fn test_get_pet_non_numeric_id(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/pets/abc").await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid path parameter");
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_pets_with_owner(pool: PgPool) {
    let owner_id = common::create_test_user(&pool, "owner", "pw").await;
    let owned_id = common::create_test_pet(&pool, "owned", Some(owner_id), 5).await;
    let stray_id = common::create_test_pet(&pool, "stray", None, 10).await;
    common::create_adopted_pet(&pool, "taken", owner_id).await;
    let server = make_server(pool);

    let response = server.get("/api/pets").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);

    assert_eq!(items[0]["id"], owned_id);
    assert_eq!(
        items[0]["owner"],
        json!({
            "first_name": "Test",
            "last_name": "User",
            "address": "1 Test Street"
        })
    );

    assert_eq!(items[1]["id"], stray_id);
    assert_eq!(
        items[1]["owner"],
        json!({ "first_name": null, "last_name": null, "address": null })
    );
}
