use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use tracing::warn;

use crate::database::activity_store::ActivityStore;
use crate::models::ActivityDirectoryView;
use crate::services::activity_service::{self, Confirmation};
use crate::web::error::ApiError;

/// Query schema shared by signup and unregister. `email` is required but
/// bound as optional so a missing value becomes a 422 instead of the
/// extractor's default 400.
#[derive(Debug, Default)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    /// A repeated `email` parameter is not an error; the last value wins.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Self { email }
    }

    fn require_email(self) -> Result<String, ApiError> {
        self.email.ok_or_else(|| {
            ApiError::Validation("Missing required query parameter: email".to_string())
        })
    }
}

fn bind_email(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<String, ApiError> {
    match query {
        Ok(Query(pairs)) => EmailQuery::from_pairs(pairs).require_email(),
        Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
    }
}

pub async fn list_activities_handler(
    State(store): State<Arc<ActivityStore>>,
) -> Json<ActivityDirectoryView> {
    Json(activity_service::list_activities(&store).await)
}

pub async fn signup_handler(
    State(store): State<Arc<ActivityStore>>,
    Path(activity_name): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let email = bind_email(query)?;
    match activity_service::signup(&store, &activity_name, &email).await {
        Ok(ok) => Ok(Json(ok)),
        Err(e) => {
            warn!("Signup of {} for {} failed: {}", email, activity_name, e);
            Err(e.into())
        }
    }
}

pub async fn unregister_handler(
    State(store): State<Arc<ActivityStore>>,
    Path(activity_name): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Confirmation>, ApiError> {
    let email = bind_email(query)?;
    match activity_service::unregister(&store, &activity_name, &email).await {
        Ok(ok) => Ok(Json(ok)),
        Err(e) => {
            warn!("Unregister of {} from {} failed: {}", email, activity_name, e);
            Err(e.into())
        }
    }
}
