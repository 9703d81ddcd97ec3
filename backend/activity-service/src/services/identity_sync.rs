/// Identity-provider confirmation sync
///
/// On sign-up confirmation the identity provider delivers a confirmation
/// event; the confirmed account is mirrored into the users table. The
/// provider only requires the event echoed back, so a failed insert is
/// logged and swallowed, never surfaced.
use crate::db::user_repo;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::PgPool;
use tracing::{error, info};

/// Confirmation event as delivered by the identity provider.
///
/// Fields we do not consume are carried through untouched so the
/// acknowledgment echoes the event exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationEvent {
    pub request: ConfirmationRequest,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationRequest {
    #[serde(rename = "userAttributes")]
    pub user_attributes: UserAttributes,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Attributes of the confirmed account, keyed by the provider's names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub struct IdentitySyncService {
    pool: PgPool,
}

impl IdentitySyncService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the confirmed user, then acknowledge with the original event.
    ///
    /// The caller-visible outcome is unconditionally success; insert failures
    /// (duplicate handle, constraint violations, connectivity) are logged and
    /// ignored.
    pub async fn run(&self, event: ConfirmationEvent) -> ConfirmationEvent {
        let attributes = &event.request.user_attributes;

        match user_repo::insert_user(
            &self.pool,
            attributes.name.as_deref(),
            attributes.email.as_deref(),
            attributes.preferred_username.as_deref(),
            attributes.sub.as_deref(),
        )
        .await
        {
            Ok(uuid) => info!(
                user_uuid = %uuid,
                handle = attributes.preferred_username.as_deref().unwrap_or(""),
                "user synced from identity provider"
            ),
            Err(err) => error!(
                error = %err,
                "identity sync insert failed; acknowledging event anyway"
            ),
        }

        event
    }
}
