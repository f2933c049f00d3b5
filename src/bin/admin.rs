//! CLI administration tool for pet-adoption.
//!
//! Provides commands for creating and listing user accounts, viewing
//! adoption statistics, and performing database checks without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a user (prompts for missing fields, password hidden)
//! cargo run --bin admin -- user create --username alice
//!
//! # List users
//! cargo run --bin admin -- user list --limit 20
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string, or the same
//!   `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` parts the server
//!   accepts
//! - `BCRYPT_COST` (optional): cost used when hashing new passwords

use pet_adoption::config::database_url;
use pet_adoption::domain::repositories::{PetRepository, UserRepository};
use pet_adoption::infrastructure::persistence::{PgPetRepository, PgUserRepository};
use pet_adoption::infrastructure::security::PasswordHasher;
use pet_adoption::prelude::{AppError, NewUser};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing pet-adoption.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user account
    Create {
        /// Login name (prompted if omitted)
        #[arg(short, long)]
        username: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List user accounts, newest first
    List {
        /// Maximum number of users to show
        #[arg(short, long, default_value_t = 50)]
        limit: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let url = database_url()?;

    let pool = PgPool::connect(&url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::Create { username, yes } => create_user(&repo, username, yes).await?,
        UserAction::List { limit } => list_users(&repo, limit).await?,
    }

    Ok(())
}

/// Reads the bcrypt cost from `BCRYPT_COST`, falling back to the library default.
fn hasher_from_env() -> Result<PasswordHasher> {
    match std::env::var("BCRYPT_COST") {
        Ok(raw) => {
            let cost = raw
                .parse::<u32>()
                .context("BCRYPT_COST must be an integer")?;
            Ok(PasswordHasher::new(cost))
        }
        Err(_) => Ok(PasswordHasher::default()),
    }
}

/// Creates a user account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for username (or use provided) and profile fields
/// 2. Prompt for password twice, input hidden
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Hash password with bcrypt and store the user
async fn create_user(repo: &PgUserRepository, username: Option<String>, yes: bool) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    if repo
        .find_by_username(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .is_some()
    {
        anyhow::bail!("User '{}' already exists", username);
    }

    let first_name: String = Input::new().with_prompt("First name").interact_text()?;
    let last_name: String = Input::new().with_prompt("Last name").interact_text()?;
    let age: i32 = Input::new().with_prompt("Age").interact_text()?;
    let address: String = Input::new().with_prompt("Address").interact_text()?;
    let contact_number: String = Input::new().with_prompt("Contact number").interact_text()?;
    let email: String = Input::new().with_prompt("Email").interact_text()?;

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Username: {}", username.cyan());
    println!("  Name:     {} {}", first_name, last_name);
    println!("  Email:    {}", email);
    println!();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let password_hash = hasher_from_env()?
        .hash(&password)
        .await
        .context("Failed to hash password")?;

    let user = repo
        .create(NewUser {
            username,
            password_hash,
            first_name,
            last_name,
            age,
            address,
            contact_number,
            email,
        })
        .await
        .map_err(|e| match e {
            AppError::Conflict { .. } => anyhow::anyhow!("Username already exists"),
            other => anyhow::anyhow!("Failed to create user: {}", other),
        })?;

    println!();
    println!(
        "{} (id {})",
        "✅ User created successfully!".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();

    Ok(())
}

/// Lists user accounts.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Username             Name                      Created
///   ───────────────────────────────────────────────────────────────────────────
///   2   bob                  Bob Builder               2024-01-16 14:20
///   1   alice                Alice Liddell             2024-01-15 10:30
/// ```
async fn list_users(repo: &PgUserRepository, limit: i64) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<25} {:<16}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for user in &users {
        println!(
            "  {:<3} {:<20} {:<25} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.full_name(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Shown: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Displays user, pet and adoption counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let users = PgUserRepository::new(pool.clone())
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count users: {}", e))?;
    let pets = PgPetRepository::new(pool)
        .counts()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count pets: {}", e))?;

    println!(
        "  Users:          {}",
        users.to_string().bright_green().bold()
    );
    println!(
        "  Available pets: {}",
        pets.available.to_string().bright_green().bold()
    );
    println!(
        "  Adopted pets:   {}",
        pets.adopted.to_string().bright_green().bold()
    );
    println!(
        "  Adoptions:      {}",
        pets.adoptions.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
                    .fetch_one(pool)
                    .await
                    .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
