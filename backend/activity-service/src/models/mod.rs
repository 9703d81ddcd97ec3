/// Data models for activity-service
///
/// This module defines structures for:
/// - User: account rows synced from the identity provider
/// - Activity: user-authored posts with an expiry timestamp
/// - Service outcomes: validation codes and response payloads
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Maximum message length accepted for an activity
pub const MESSAGE_MAX_CHARS: usize = 280;

/// Time-to-live labels accepted when creating an activity.
///
/// The set is closed: anything outside it is a validation error, never a
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    ThirtyDays,
    SevenDays,
    ThreeDays,
    OneDay,
    TwelveHours,
    ThreeHours,
    OneHour,
}

impl Ttl {
    /// Parse a TTL label as supplied by the caller
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "30-days" => Some(Ttl::ThirtyDays),
            "7-days" => Some(Ttl::SevenDays),
            "3-days" => Some(Ttl::ThreeDays),
            "1-day" => Some(Ttl::OneDay),
            "12-hours" => Some(Ttl::TwelveHours),
            "3-hours" => Some(Ttl::ThreeHours),
            "1-hour" => Some(Ttl::OneHour),
            _ => None,
        }
    }

    /// Offset added to the creation time to obtain the expiry
    pub fn offset(self) -> Duration {
        match self {
            Ttl::ThirtyDays => Duration::days(30),
            Ttl::SevenDays => Duration::days(7),
            Ttl::ThreeDays => Duration::days(3),
            Ttl::OneDay => Duration::days(1),
            Ttl::TwelveHours => Duration::hours(12),
            Ttl::ThreeHours => Duration::hours(3),
            Ttl::OneHour => Duration::hours(1),
        }
    }
}

/// User-facing validation outcomes, returned as data rather than faults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationCode {
    TtlBlank,
    UserHandleBlank,
    MessageBlank,
    MessageExceedMaxChars,
    UserHandleNotFound,
}

/// User row fields needed to attribute an activity
#[derive(Debug, Clone, FromRow)]
pub struct UserSummary {
    pub uuid: Uuid,
    pub display_name: String,
}

/// Activity row fields returned by the insert
#[derive(Debug, Clone, FromRow)]
pub struct InsertedActivity {
    pub uuid: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Home-feed entry joined with its author.
///
/// The join is a left join: activities from unresolvable users still appear,
/// with null author fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TimelineActivity {
    pub uuid: Uuid,
    pub display_name: Option<String>,
    pub handle: Option<String>,
    pub message: String,
    pub replies_count: i32,
    pub reposts_count: i32,
    pub likes_count: i32,
    pub reply_to_activity_uuid: Option<Uuid>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Outcome of the activity-creation service
///
/// Validation codes travel as data; `data` echoes either the created row or
/// the rejected draft.
#[derive(Debug, Serialize)]
pub struct CreateActivityOutcome {
    pub errors: Option<Vec<ValidationCode>>,
    pub data: Option<ActivityPayload>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ActivityPayload {
    Created(CreatedActivity),
    Draft(ActivityDraft),
}

/// Raw input echo returned alongside validation errors
#[derive(Debug, Serialize)]
pub struct ActivityDraft {
    pub handle: String,
    pub message: String,
}

/// Response model for a successfully created activity.
///
/// Timestamps are rendered as ISO-8601 strings with timezone offset.
#[derive(Debug, Serialize)]
pub struct CreatedActivity {
    pub uuid: Uuid,
    pub display_name: String,
    pub handle: String,
    pub message: String,
    pub created_at: String,
    pub expires_at: String,
}

impl CreateActivityOutcome {
    pub fn created(activity: CreatedActivity) -> Self {
        Self {
            errors: None,
            data: Some(ActivityPayload::Created(activity)),
        }
    }

    pub fn rejected(code: ValidationCode, handle: &str, message: &str) -> Self {
        Self {
            errors: Some(vec![code]),
            data: Some(ActivityPayload::Draft(ActivityDraft {
                handle: handle.to_string(),
                message: message.to_string(),
            })),
        }
    }
}
