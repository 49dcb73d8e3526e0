use crate::api::RequestContext;
use crate::common::error::AppError;
use crate::models::sessions::{
    CreateSessionResponse, InvalidPayloadResponse, RetrieveSessionArgs, SessionActionArgs,
};
use crate::usecases::sessions;
use crate::usecases::sessions::CreateOutcome;
use axum::Json;
use axum::extract::Query;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

/// One POST route serves both halves of the share flow, told apart by the
/// `action=get` query flag. This mirrors the contract the share page was
/// built against.
pub async fn controller(
    ctx: RequestContext,
    Query(args): Query<SessionActionArgs>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    match args.action.as_deref() {
        Some("get") => retrieve(ctx, body).await,
        _ => create(ctx, body).await,
    }
}

async fn create(ctx: RequestContext, body: Value) -> Result<Response, AppError> {
    match sessions::create(&ctx, body).await? {
        CreateOutcome::Created(id) => {
            Ok(Json(CreateSessionResponse { code: 0, id }).into_response())
        }
        // a rejected payload is a normal outcome, returned on a 200
        CreateOutcome::Invalid(errors) => {
            Ok(Json(InvalidPayloadResponse::new(errors)).into_response())
        }
    }
}

async fn retrieve(ctx: RequestContext, body: Value) -> Result<Response, AppError> {
    let args: RetrieveSessionArgs =
        serde_json::from_value(body).map_err(|_| AppError::DecodingRequestFailed)?;
    let id = match args.id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(AppError::SessionsNotFound),
    };
    let payload = sessions::fetch_one(&ctx, &id).await?;
    Ok(Json(payload).into_response())
}
