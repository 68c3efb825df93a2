//! Study Submission

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::store::StudyDraft;
use super::post_json;

/// Hand the study and its full task list to the backend
pub async fn save_study(config: &AppConfig, draft: &StudyDraft) -> Result<(), ApiError> {
    let url = config.endpoint(&config.studies_path);
    log::info!("[API] Saving study {:?} with {} task(s)", draft.name, draft.tasks.len());
    post_json(&url, draft).await
}
