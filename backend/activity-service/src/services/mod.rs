/// Business logic layer for activity-service
///
/// - Activity creation: validation, expiry computation, lookup-then-insert
/// - Home activities: the feed listing query with injectable fault hooks
/// - Identity sync: mirrors identity-provider confirmations into the users table
pub mod create_activity;
pub mod home_activities;
pub mod identity_sync;

// Re-export commonly used services
pub use create_activity::CreateActivityService;
pub use home_activities::{FaultInjection, HomeActivitiesService};
pub use identity_sync::{ConfirmationEvent, IdentitySyncService};
