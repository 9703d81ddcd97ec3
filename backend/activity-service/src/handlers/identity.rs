/// Identity-provider webhook handlers
use crate::error::Result;
use crate::services::{ConfirmationEvent, IdentitySyncService};
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// Post-confirmation hook
///
/// Syncs the confirmed user into the users table and acknowledges with the
/// original event regardless of insert outcome - the identity provider is
/// never told sync failed.
pub async fn post_confirmation(
    pool: web::Data<PgPool>,
    event: web::Json<ConfirmationEvent>,
) -> Result<HttpResponse> {
    let service = IdentitySyncService::new((**pool).clone());
    let acknowledged = service.run(event.into_inner()).await;

    Ok(HttpResponse::Ok().json(acknowledged))
}
