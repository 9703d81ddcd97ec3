use crate::models::{InsertedActivity, TimelineActivity};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Insert a new activity row
///
/// The store generates the uuid and creation timestamp and echoes back the
/// message and expiry.
pub async fn insert_activity(
    pool: &PgPool,
    user_uuid: Uuid,
    message: &str,
    expires_at: DateTime<Utc>,
) -> Result<InsertedActivity, sqlx::Error> {
    let activity = sqlx::query_as::<_, InsertedActivity>(
        r#"
        INSERT INTO activities (user_uuid, message, expires_at)
        VALUES ($1, $2, $3)
        RETURNING uuid, message, created_at, expires_at
        "#,
    )
    .bind(user_uuid)
    .bind(message)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(activity)
}

/// Home feed: every activity joined with its author, newest first.
///
/// Left join so activities from unresolvable users still appear with null
/// author fields.
pub async fn list_home(pool: &PgPool) -> Result<Vec<TimelineActivity>, sqlx::Error> {
    let activities = sqlx::query_as::<_, TimelineActivity>(
        r#"
        SELECT
            activities.uuid,
            users.display_name,
            users.handle,
            activities.message,
            activities.replies_count,
            activities.reposts_count,
            activities.likes_count,
            activities.reply_to_activity_uuid,
            activities.expires_at,
            activities.created_at
        FROM activities
        LEFT JOIN users ON users.uuid = activities.user_uuid
        ORDER BY activities.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(activities)
}

/// Total number of activity rows
pub async fn count_activities(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM activities")
        .fetch_one(pool)
        .await?;

    Ok(row.0)
}
