/// HTTP handlers for activity-service endpoints
///
/// This module contains handlers for:
/// - Activities: create a timed post, list the home feed
/// - Identity: the post-confirmation sync hook called by the identity provider
pub mod activities;
pub mod identity;

// Re-export handler functions at module level
pub use activities::{create_activity, home_activities, FeedHandlerState};
pub use identity::post_confirmation;
