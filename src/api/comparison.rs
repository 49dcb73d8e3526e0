use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::comparison::{ComparisonView, ComparisonViewArgs};
use crate::usecases::comparison;
use axum::Json;
use axum::extract::Query;

/// Server-side render model for the comparison card, resolved from a stored
/// session id.
pub async fn view(
    ctx: RequestContext,
    Query(args): Query<ComparisonViewArgs>,
) -> ServiceResponse<ComparisonView> {
    let view = comparison::fetch_view(&ctx, &args.id).await?;
    Ok(Json(view))
}
