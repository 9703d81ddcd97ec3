/// Activity creation service
///
/// Validates input, computes the expiry from the TTL label, resolves the
/// author by handle, and inserts one activity row. Validation outcomes are
/// returned as data; only store failures surface as errors.
use crate::db::{activity_repo, user_repo};
use crate::error::Result;
use crate::models::{
    CreateActivityOutcome, CreatedActivity, Ttl, ValidationCode, MESSAGE_MAX_CHARS,
};
use chrono::Utc;
use sqlx::PgPool;

pub struct CreateActivityService {
    pool: PgPool,
}

impl CreateActivityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a timed activity for the given handle.
    ///
    /// On any validation failure the store is never touched and the raw input
    /// is echoed back alongside the failing code.
    pub async fn run(
        &self,
        message: &str,
        user_handle: &str,
        ttl: &str,
    ) -> Result<CreateActivityOutcome> {
        let ttl = match validate(message, user_handle, ttl) {
            Ok(ttl) => ttl,
            Err(code) => return Ok(CreateActivityOutcome::rejected(code, user_handle, message)),
        };

        let expires_at = Utc::now() + ttl.offset();

        let Some(author) = user_repo::find_by_handle(&self.pool, user_handle).await? else {
            return Ok(CreateActivityOutcome::rejected(
                ValidationCode::UserHandleNotFound,
                user_handle,
                message,
            ));
        };

        let inserted =
            activity_repo::insert_activity(&self.pool, author.uuid, message, expires_at).await?;

        Ok(CreateActivityOutcome::created(CreatedActivity {
            uuid: inserted.uuid,
            display_name: author.display_name,
            // Handle as supplied by the caller, not re-derived from the row
            handle: user_handle.to_string(),
            message: inserted.message,
            created_at: inserted.created_at.to_rfc3339(),
            expires_at: inserted.expires_at.to_rfc3339(),
        }))
    }
}

/// Pure-input validation with a single error slot.
///
/// Every check runs; a later failure overwrites an earlier one, so the last
/// failing check in evaluation order wins.
fn validate(
    message: &str,
    user_handle: &str,
    ttl_label: &str,
) -> std::result::Result<Ttl, ValidationCode> {
    let ttl = Ttl::parse(ttl_label);

    let mut error = None;
    if ttl.is_none() {
        error = Some(ValidationCode::TtlBlank);
    }
    if user_handle.is_empty() {
        error = Some(ValidationCode::UserHandleBlank);
    }
    if message.is_empty() {
        error = Some(ValidationCode::MessageBlank);
    } else if message.chars().count() > MESSAGE_MAX_CHARS {
        error = Some(ValidationCode::MessageExceedMaxChars);
    }

    match (ttl, error) {
        (_, Some(code)) => Err(code),
        (Some(ttl), None) => Ok(ttl),
        // A missing TTL always sets the error slot, so this arm never fires
        (None, None) => Err(ValidationCode::TtlBlank),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Never connects; validation paths must return before any store access.
    fn lazy_pool() -> PgPool {
        PgPool::connect_lazy("postgres://postgres@127.0.0.1:1/unused").unwrap()
    }

    #[test]
    fn test_validate_accepts_known_ttl_and_valid_input() {
        let ttl = validate("hello world", "andrewbrown", "7-days").unwrap();
        assert_eq!(ttl, Ttl::SevenDays);
    }

    #[test]
    fn test_validate_rejects_unknown_ttl() {
        let result = validate("hello world", "andrewbrown", "2-days");
        assert_eq!(result, Err(ValidationCode::TtlBlank));
    }

    #[test]
    fn test_validate_rejects_blank_handle() {
        let result = validate("hello world", "", "7-days");
        assert_eq!(result, Err(ValidationCode::UserHandleBlank));
    }

    #[test]
    fn test_validate_message_boundaries() {
        assert_eq!(
            validate("", "andrewbrown", "7-days"),
            Err(ValidationCode::MessageBlank)
        );
        assert_eq!(
            validate(&"a".repeat(281), "andrewbrown", "7-days"),
            Err(ValidationCode::MessageExceedMaxChars)
        );
        assert!(validate(&"a".repeat(280), "andrewbrown", "7-days").is_ok());
    }

    #[test]
    fn test_validate_last_failing_check_wins() {
        // All three fail: the message check is evaluated last and overwrites
        assert_eq!(validate("", "", "2-days"), Err(ValidationCode::MessageBlank));
        // TTL and handle fail, message fine: handle check overwrites TTL
        assert_eq!(
            validate("hello", "", "2-days"),
            Err(ValidationCode::UserHandleBlank)
        );
        // TTL and length fail: length check overwrites TTL
        assert_eq!(
            validate(&"a".repeat(281), "andrewbrown", "2-days"),
            Err(ValidationCode::MessageExceedMaxChars)
        );
    }

    #[tokio::test]
    async fn test_run_returns_rejection_without_store_access() {
        let service = CreateActivityService::new(lazy_pool());

        let outcome = service.run("hello", "andrewbrown", "2-days").await.unwrap();
        let rendered = serde_json::to_value(&outcome).unwrap();

        assert_eq!(rendered["errors"], json!(["ttl_blank"]));
        assert_eq!(rendered["data"]["handle"], "andrewbrown");
        assert_eq!(rendered["data"]["message"], "hello");
    }

    #[tokio::test]
    async fn test_run_echoes_overlong_message_unchanged() {
        let service = CreateActivityService::new(lazy_pool());
        let message = "b".repeat(281);

        let outcome = service.run(&message, "andrewbrown", "1-hour").await.unwrap();
        let rendered = serde_json::to_value(&outcome).unwrap();

        assert_eq!(rendered["errors"], json!(["message_exceed_max_chars"]));
        assert_eq!(rendered["data"]["message"], message.as_str());
    }
}
