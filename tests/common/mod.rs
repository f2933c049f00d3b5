#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use pet_adoption::infrastructure::security::{PasswordHasher, TokenIssuer};
use pet_adoption::prelude::{AppState, Identity};

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

/// Cheapest bcrypt cost; keeps hashing fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(TEST_BCRYPT_COST)
}

pub fn test_tokens() -> TokenIssuer {
    TokenIssuer::new(TEST_JWT_SECRET, 900)
}

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), test_hasher(), test_tokens())
}

/// Inserts a user whose password is `password`, returning its id.
pub async fn create_test_user(pool: &PgPool, username: &str, password: &str) -> i64 {
    let password_hash = test_hasher().hash(password).await.unwrap();

    sqlx::query_scalar(
        r#"
        INSERT INTO users
            (username, password, first_name, last_name, age, address, contact_number, email)
        VALUES ($1, $2, 'Test', 'User', 30, '1 Test Street', '555-0000', $3)
        RETURNING id
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .bind(format!("{username}@example.com"))
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts an available pet added `minutes_ago` minutes in the past.
pub async fn create_test_pet(
    pool: &PgPool,
    name: &str,
    owner_id: Option<i64>,
    minutes_ago: i32,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO pets (name, breed, age, owner_id, date_added)
        VALUES ($1, 'Mixed', 2, $2, NOW() - make_interval(mins => $3))
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(owner_id)
    .bind(minutes_ago)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a pet that is already adopted by `adopter_id`.
pub async fn create_adopted_pet(pool: &PgPool, name: &str, adopter_id: i64) -> i64 {
    let pet_id = create_test_pet(pool, name, None, 0).await;

    sqlx::query("UPDATE pets SET adopted = TRUE WHERE id = $1")
        .bind(pet_id)
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO adoptions (pet_id, adopter_id) VALUES ($1, $2)")
        .bind(pet_id)
        .bind(adopter_id)
        .execute(pool)
        .await
        .unwrap();

    pet_id
}

pub async fn count_adoptions(pool: &PgPool, pet_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM adoptions WHERE pet_id = $1")
        .bind(pet_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Signs a token for an existing user.
pub fn token_for(username: &str, user_id: i64) -> String {
    test_tokens()
        .issue(&Identity::new(username, user_id))
        .unwrap()
}
