//! Backend API Client
//!
//! Thin JSON-over-HTTP wrappers, organized by domain.

mod users;
mod studies;
mod assay_types;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

// Re-export all public items
pub use users::*;
pub use studies::*;
pub use assay_types::*;

/// Turn a non-2xx response into `ApiError::Status`
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status: status.as_u16(), body })
}

async fn get_json<T: DeserializeOwned>(url: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
    let response = reqwest::Client::new().get(url).query(query).send().await?;
    let response = check_status(response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

async fn post_json<B: Serialize + ?Sized>(url: &str, body: &B) -> Result<(), ApiError> {
    let response = reqwest::Client::new().post(url).json(body).send().await?;
    check_status(response).await?;
    Ok(())
}
