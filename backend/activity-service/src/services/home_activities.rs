/// Home feed listing service
///
/// One read query joining activities to their authors. Fault hooks for
/// caller-side timeout and error testing are materialized from configuration
/// at startup and passed in explicitly; the service never reads the
/// environment itself.
use crate::db::activity_repo;
use crate::error::{AppError, Result};
use crate::models::TimelineActivity;
use sqlx::PgPool;
use std::time::Duration;
use tracing::{debug, warn};

/// Test-only fault hooks for the feed listing
#[derive(Debug, Clone, Copy, Default)]
pub struct FaultInjection {
    /// Artificial delay applied before the query
    pub delay: Option<Duration>,
    /// Force the listing to fail before any store access
    pub fail: bool,
}

impl FaultInjection {
    pub const fn disabled() -> Self {
        Self {
            delay: None,
            fail: false,
        }
    }
}

pub struct HomeActivitiesService {
    pool: PgPool,
    faults: FaultInjection,
}

impl HomeActivitiesService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            faults: FaultInjection::disabled(),
        }
    }

    pub fn with_faults(pool: PgPool, faults: FaultInjection) -> Self {
        Self { pool, faults }
    }

    /// List every activity joined with its author, newest first.
    ///
    /// An empty store yields an empty vector, never an absent value.
    pub async fn run(&self, cognito_user_id: Option<&str>) -> Result<Vec<TimelineActivity>> {
        debug!(
            viewer = cognito_user_id.unwrap_or("anonymous"),
            "listing home activities"
        );

        if let Some(delay) = self.faults.delay {
            warn!(delay_ms = delay.as_millis() as u64, "injected feed latency");
            tokio::time::sleep(delay).await;
        }
        if self.faults.fail {
            warn!("injected feed failure");
            return Err(AppError::Internal("injected feed failure".to_string()));
        }

        let activities = activity_repo::list_home(&self.pool).await?;
        Ok(activities)
    }
}
