//! Assay Type Submission

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::store::AssayTypeDraft;
use super::post_json;

/// Hand the assay type and its field definitions to the backend
pub async fn save_assay_type(config: &AppConfig, draft: &AssayTypeDraft) -> Result<(), ApiError> {
    let url = config.endpoint(&config.assay_types_path);
    log::info!("[API] Saving assay type {:?} with {} field(s)", draft.name, draft.fields.len());
    post_json(&url, draft).await
}
