//! PostgreSQL implementation of pet repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    Adoption, AdoptionOutcome, NewPet, OwnerSummary, Pet, PetCounts, PetWithOwner,
};
use crate::domain::repositories::PetRepository;
use crate::error::AppError;

/// PostgreSQL repository for pet listings and adoptions.
pub struct PgPetRepository {
    pool: Arc<PgPool>,
}

impl PgPetRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PetRow {
    id: i64,
    name: String,
    breed: String,
    age: i32,
    owner_id: Option<i64>,
    image: Option<Vec<u8>>,
    date_added: DateTime<Utc>,
    adopted: bool,
}

impl From<PetRow> for Pet {
    fn from(row: PetRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            breed: row.breed,
            age: row.age,
            owner_id: row.owner_id,
            image: row.image,
            date_added: row.date_added,
            adopted: row.adopted,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PetOwnerRow {
    #[sqlx(flatten)]
    pet: PetRow,
    owner_first_name: Option<String>,
    owner_last_name: Option<String>,
    owner_address: Option<String>,
}

impl From<PetOwnerRow> for PetWithOwner {
    fn from(row: PetOwnerRow) -> Self {
        let owner = match (row.owner_first_name, row.owner_last_name, row.owner_address) {
            (Some(first_name), Some(last_name), Some(address)) => Some(OwnerSummary {
                first_name,
                last_name,
                address,
            }),
            _ => None,
        };

        Self {
            pet: row.pet.into(),
            owner,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AdoptionRow {
    id: i64,
    pet_id: i64,
    adopter_id: i64,
    adopted_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct CountsRow {
    available: i64,
    adopted: i64,
    adoptions: i64,
}

#[async_trait]
impl PetRepository for PgPetRepository {
    async fn create(&self, new_pet: NewPet) -> Result<Pet, AppError> {
        let row = sqlx::query_as::<_, PetRow>(
            r#"
            INSERT INTO pets (name, breed, age, owner_id, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, breed, age, owner_id, image, date_added, adopted
            "#,
        )
        .bind(&new_pet.name)
        .bind(&new_pet.breed)
        .bind(new_pet.age)
        .bind(new_pet.owner_id)
        .bind(new_pet.image.as_deref())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pet>, AppError> {
        let row = sqlx::query_as::<_, PetRow>(
            r#"
            SELECT id, name, breed, age, owner_id, image, date_added, adopted
            FROM pets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Pet::from))
    }

    async fn list_recent_available(&self, limit: i64) -> Result<Vec<Pet>, AppError> {
        let rows = sqlx::query_as::<_, PetRow>(
            r#"
            SELECT id, name, breed, age, owner_id, image, date_added, adopted
            FROM pets
            WHERE adopted = FALSE
            ORDER BY date_added DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Pet::from).collect())
    }

    async fn list_available_with_owner(&self) -> Result<Vec<PetWithOwner>, AppError> {
        let rows = sqlx::query_as::<_, PetOwnerRow>(
            r#"
            SELECT
                p.id, p.name, p.breed, p.age, p.owner_id, p.image, p.date_added, p.adopted,
                u.first_name AS owner_first_name,
                u.last_name AS owner_last_name,
                u.address AS owner_address
            FROM pets p
            LEFT JOIN users u ON u.id = p.owner_id
            WHERE p.adopted = FALSE
            ORDER BY p.date_added DESC, p.id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(PetWithOwner::from).collect())
    }

    async fn record_adoption(
        &self,
        pet_id: i64,
        adopter_id: i64,
    ) -> Result<AdoptionOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        // Row lock serializes concurrent adopters of the same pet.
        let adopted: Option<bool> =
            sqlx::query_scalar("SELECT adopted FROM pets WHERE id = $1 FOR UPDATE")
                .bind(pet_id)
                .fetch_optional(&mut *tx)
                .await?;

        match adopted {
            None => {
                tx.rollback().await?;
                return Ok(AdoptionOutcome::PetNotFound);
            }
            Some(true) => {
                tx.rollback().await?;
                return Ok(AdoptionOutcome::AlreadyAdopted);
            }
            Some(false) => {}
        }

        let inserted = sqlx::query_as::<_, AdoptionRow>(
            r#"
            INSERT INTO adoptions (pet_id, adopter_id)
            VALUES ($1, $2)
            RETURNING id, pet_id, adopter_id, adopted_at
            "#,
        )
        .bind(pet_id)
        .bind(adopter_id)
        .fetch_one(&mut *tx)
        .await;

        let row = match inserted {
            Ok(row) => row,
            Err(e) if is_unique_violation(&e) => {
                tx.rollback().await?;
                return Ok(AdoptionOutcome::AlreadyAdopted);
            }
            Err(e) => return Err(e.into()),
        };

        sqlx::query("UPDATE pets SET adopted = TRUE WHERE id = $1")
            .bind(pet_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(AdoptionOutcome::Adopted(Adoption {
            id: row.id,
            pet_id: row.pet_id,
            adopter_id: row.adopter_id,
            adopted_at: row.adopted_at,
        }))
    }

    async fn counts(&self) -> Result<PetCounts, AppError> {
        let row = sqlx::query_as::<_, CountsRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM pets WHERE adopted = FALSE) AS available,
                (SELECT COUNT(*) FROM pets WHERE adopted = TRUE) AS adopted,
                (SELECT COUNT(*) FROM adoptions) AS adoptions
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(PetCounts {
            available: row.available,
            adopted: row.adopted,
            adoptions: row.adoptions,
        })
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}
