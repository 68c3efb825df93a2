//! User Lookup
//!
//! Remote search backing the task assignment autocomplete.

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::UserRef;
use super::get_json;

/// Users whose name or email matches `query`
pub async fn search_users(config: &AppConfig, query: &str) -> Result<Vec<UserRef>, ApiError> {
    let url = config.endpoint(&config.user_search_path);
    get_json(&url, &[("q", query)]).await
}
