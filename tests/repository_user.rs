mod common;

use pet_adoption::domain::entities::{NewUser, ProfileUpdate};
use pet_adoption::domain::repositories::UserRepository;
use pet_adoption::error::AppError;
use pet_adoption::infrastructure::persistence::PgUserRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: "$2b$04$hash".to_string(),
        first_name: "Alice".to_string(),
        last_name: "Liddell".to_string(),
        age: 30,
        address: "1 Rabbit Hole".to_string(),
        contact_number: "555-0100".to_string(),
        email: "alice@example.com".to_string(),
    }
}

#[sqlx::test]
async fn test_create_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let user = repo.create(new_user("alice")).await.unwrap();

    assert!(user.id > 0);
    assert_eq!(user.username, "alice");
    assert_eq!(user.password_hash, "$2b$04$hash");
    assert_eq!(user.age, 30);
}

#[sqlx::test]
async fn test_create_duplicate_username(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("alice")).await.unwrap();
    let result = repo.create(new_user("alice")).await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
async fn test_find_by_username_and_id(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let created = repo.create(new_user("alice")).await.unwrap();

    let by_name = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(by_name.id, created.id);

    let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "alice");

    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    assert!(repo.find_by_id(999_999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_update_profile_overwrites_fields(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));
    repo.create(new_user("alice")).await.unwrap();

    let updated = repo
        .update_profile(
            "alice",
            ProfileUpdate {
                first_name: "Alicia".to_string(),
                last_name: "Smith".to_string(),
                age: 31,
                address: "2 Looking Glass".to_string(),
                contact_number: "555-0199".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(updated);

    let user = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(user.first_name, "Alicia");
    assert_eq!(user.last_name, "Smith");
    assert_eq!(user.age, 31);
    assert_eq!(user.address, "2 Looking Glass");
    assert_eq!(user.contact_number, "555-0199");
    assert_eq!(user.email, "alice@example.com");
}

#[sqlx::test]
async fn test_update_profile_unknown_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let updated = repo
        .update_profile(
            "ghost",
            ProfileUpdate {
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                age: 1,
                address: "C".to_string(),
                contact_number: "D".to_string(),
            },
        )
        .await
        .unwrap();

    assert!(!updated);
}

#[sqlx::test]
async fn test_list_and_count(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("alice")).await.unwrap();
    repo.create(new_user("bob")).await.unwrap();
    repo.create(new_user("carol")).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 3);

    let users = repo.list(2).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "carol");
    assert_eq!(users[1].username, "bob");
}
