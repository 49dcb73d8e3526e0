use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult};
use crate::entities::sessions::SessionLookup;
use crate::models::sessions::{ComparisonPayload, FieldError};
use crate::validation;
use serde_json::Value;

pub enum CreateOutcome {
    Created(String),
    /// Client-correctable; reported with every violation, never escalated.
    Invalid(Vec<FieldError>),
}

pub async fn create<C: Context>(ctx: &C, raw: Value) -> ServiceResult<CreateOutcome> {
    match validation::validate(raw) {
        Ok(payload) => {
            let id = ctx.sessions().put(payload).await?;
            Ok(CreateOutcome::Created(id))
        }
        Err(errors) => Ok(CreateOutcome::Invalid(errors)),
    }
}

/// Returns the payload exactly as stored; it was validated at write time and
/// is not re-validated here.
pub async fn fetch_one<C: Context>(ctx: &C, id: &str) -> ServiceResult<ComparisonPayload> {
    match ctx.sessions().get(id).await? {
        SessionLookup::Hit(payload) => Ok(payload),
        SessionLookup::NotFound => Err(AppError::SessionsNotFound),
        SessionLookup::Expired => Err(AppError::SessionsExpired),
    }
}
