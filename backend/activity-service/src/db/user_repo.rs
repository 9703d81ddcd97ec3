use crate::models::UserSummary;
use sqlx::PgPool;
use uuid::Uuid;

/// Resolve a handle to the owning user row
pub async fn find_by_handle(
    pool: &PgPool,
    handle: &str,
) -> Result<Option<UserSummary>, sqlx::Error> {
    let user = sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT uuid, display_name
        FROM users
        WHERE handle = $1
        LIMIT 1
        "#,
    )
    .bind(handle)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Insert a user row synced from the identity provider
///
/// Attribute values may be absent in the confirmation event; missing values
/// are inserted as NULL and left to the schema constraints.
pub async fn insert_user(
    pool: &PgPool,
    display_name: Option<&str>,
    email: Option<&str>,
    handle: Option<&str>,
    cognito_user_id: Option<&str>,
) -> Result<Uuid, sqlx::Error> {
    let row = sqlx::query_as::<_, (Uuid,)>(
        r#"
        INSERT INTO users (display_name, email, handle, cognito_user_id)
        VALUES ($1, $2, $3, $4)
        RETURNING uuid
        "#,
    )
    .bind(display_name)
    .bind(email)
    .bind(handle)
    .bind(cognito_user_id)
    .fetch_one(pool)
    .await?;

    Ok(row.0)
}
