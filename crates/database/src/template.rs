//! Template operations (append-only).

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{NewTemplate, Template};

/// Create a new template for an existing lead.
///
/// The caller is responsible for verifying the lead exists; the schema's
/// foreign key rejects orphan rows as a backstop. The insert runs in its own
/// transaction; the generation timestamp is assigned by the store.
pub async fn create_template(pool: &SqlitePool, new: &NewTemplate) -> Result<Template> {
    let mut tx = pool.begin().await?;

    let template = sqlx::query_as::<_, Template>(
        r#"
        INSERT INTO templates (lead_id, subject, body, generated_at)
        VALUES (?, ?, ?, datetime('now'))
        RETURNING id, lead_id, subject, body, generated_at
        "#,
    )
    .bind(new.lead_id)
    .bind(&new.subject)
    .bind(&new.body)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(template)
}

/// Get a template by ID.
pub async fn get_template(pool: &SqlitePool, id: i64) -> Result<Template> {
    sqlx::query_as::<_, Template>(
        r#"
        SELECT id, lead_id, subject, body, generated_at
        FROM templates
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DatabaseError::NotFound {
        entity: "Template",
        id,
    })
}

/// List all templates for a lead, oldest first.
pub async fn list_templates_for_lead(pool: &SqlitePool, lead_id: i64) -> Result<Vec<Template>> {
    let templates = sqlx::query_as::<_, Template>(
        r#"
        SELECT id, lead_id, subject, body, generated_at
        FROM templates
        WHERE lead_id = ?
        ORDER BY id
        "#,
    )
    .bind(lead_id)
    .fetch_all(pool)
    .await?;

    Ok(templates)
}

/// Count total templates.
pub async fn count_templates(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM templates
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewLead;
    use crate::{lead, Database};

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.init_schema().await.unwrap();
        db
    }

    async fn seeded_lead(db: &Database) -> i64 {
        let new = NewLead {
            company_name: "Acme".to_string(),
            contact_name: "Jane Doe".to_string(),
            industry: "Retail".to_string(),
        };
        lead::create_lead(db.pool(), &new).await.unwrap().id
    }

    #[tokio::test]
    async fn test_template_roundtrip() {
        let db = test_db().await;
        let lead_id = seeded_lead(&db).await;

        let new = NewTemplate {
            lead_id,
            subject: "Quick question".to_string(),
            body: "Hi Jane,".to_string(),
        };
        let created = create_template(db.pool(), &new).await.unwrap();

        let fetched = get_template(db.pool(), created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.lead_id, lead_id);
    }

    #[tokio::test]
    async fn test_get_missing_template_is_not_found() {
        let db = test_db().await;

        let result = get_template(db.pool(), 42).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_foreign_key_rejects_orphan_template() {
        let db = test_db().await;

        let new = NewTemplate {
            lead_id: 999999,
            subject: "s".to_string(),
            body: "b".to_string(),
        };
        let result = create_template(db.pool(), &new).await;

        assert!(matches!(result, Err(DatabaseError::Sqlx(_))));
        assert_eq!(count_templates(db.pool()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_templates_for_lead_filters() {
        let db = test_db().await;
        let first = seeded_lead(&db).await;
        let second = seeded_lead(&db).await;

        for lead_id in [first, first, second] {
            let new = NewTemplate {
                lead_id,
                subject: "s".to_string(),
                body: "b".to_string(),
            };
            create_template(db.pool(), &new).await.unwrap();
        }

        assert_eq!(
            list_templates_for_lead(db.pool(), first).await.unwrap().len(),
            2
        );
        assert_eq!(
            list_templates_for_lead(db.pool(), second).await.unwrap().len(),
            1
        );
    }
}
