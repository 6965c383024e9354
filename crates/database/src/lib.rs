//! SQLite persistence layer for the LeadGen assistant.
//!
//! This crate provides async database operations for leads and their
//! generated email templates using SQLx with SQLite. Both tables are
//! append-only from this system's perspective.
//!
//! # Example
//!
//! ```no_run
//! use database::{lead, models::NewLead, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and create the schema if absent
//!     let db = Database::connect("sqlite:leadgen.db?mode=rwc").await?;
//!     db.init_schema().await?;
//!
//!     let new_lead = NewLead {
//!         company_name: "Acme".to_string(),
//!         contact_name: "Jane Doe".to_string(),
//!         industry: "Retail".to_string(),
//!     };
//!     let lead = lead::create_lead(db.pool(), &new_lead).await?;
//!     println!("Created lead {}", lead.id);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod lead;
pub mod models;
pub mod template;

pub use error::{DatabaseError, Result};
pub use models::{Lead, NewLead, NewTemplate, Template};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    /// Each request acquires its own connection scoped to that operation.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/leadgen.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Create the schema if it does not exist yet.
    ///
    /// This should be called once after connecting. There is no migration
    /// system; the two tables are created as-is when absent.
    pub async fn init_schema(&self) -> Result<()> {
        tracing::info!("Ensuring database schema exists...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS leads (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                company_name TEXT NOT NULL,
                contact_name TEXT NOT NULL,
                industry TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS templates (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                lead_id INTEGER NOT NULL REFERENCES leads(id),
                subject TEXT NOT NULL,
                body TEXT NOT NULL,
                generated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        tracing::info!("Schema ready");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
