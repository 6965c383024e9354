//! Lead operations (append-only).

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Lead, NewLead};

/// Create a new lead.
///
/// The insert runs in its own transaction; the creation timestamp is
/// assigned by the store. Returns the persisted row including its id.
pub async fn create_lead(pool: &SqlitePool, new: &NewLead) -> Result<Lead> {
    let mut tx = pool.begin().await?;

    let lead = sqlx::query_as::<_, Lead>(
        r#"
        INSERT INTO leads (company_name, contact_name, industry, created_at)
        VALUES (?, ?, ?, datetime('now'))
        RETURNING id, company_name, contact_name, industry, created_at
        "#,
    )
    .bind(&new.company_name)
    .bind(&new.contact_name)
    .bind(&new.industry)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(lead)
}

/// Get a lead by ID.
pub async fn get_lead(pool: &SqlitePool, id: i64) -> Result<Lead> {
    sqlx::query_as::<_, Lead>(
        r#"
        SELECT id, company_name, contact_name, industry, created_at
        FROM leads
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DatabaseError::NotFound { entity: "Lead", id })
}

/// Check whether a lead with the given ID exists.
pub async fn lead_exists(pool: &SqlitePool, id: i64) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM leads WHERE id = ?)
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// List all leads, oldest first.
pub async fn list_leads(pool: &SqlitePool) -> Result<Vec<Lead>> {
    let leads = sqlx::query_as::<_, Lead>(
        r#"
        SELECT id, company_name, contact_name, industry, created_at
        FROM leads
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(leads)
}

/// Count total leads.
pub async fn count_leads(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM leads
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.init_schema().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_lead_exists() {
        let db = test_db().await;

        assert!(!lead_exists(db.pool(), 1).await.unwrap());

        let new = NewLead {
            company_name: "Acme".to_string(),
            contact_name: "Jane Doe".to_string(),
            industry: "Retail".to_string(),
        };
        let lead = create_lead(db.pool(), &new).await.unwrap();

        assert!(lead_exists(db.pool(), lead.id).await.unwrap());
        assert!(!lead_exists(db.pool(), 999999).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_leads_ordered_by_id() {
        let db = test_db().await;

        for company in ["Acme", "Globex"] {
            let new = NewLead {
                company_name: company.to_string(),
                contact_name: "Jane Doe".to_string(),
                industry: "Retail".to_string(),
            };
            create_lead(db.pool(), &new).await.unwrap();
        }

        let leads = list_leads(db.pool()).await.unwrap();
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].company_name, "Acme");
        assert_eq!(leads[1].company_name, "Globex");
    }
}
