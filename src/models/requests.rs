use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::UserPreferences;

/// Request to search and rank neighborhoods.
///
/// The wire shape is the flattened preference object the form submits.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub preferences: UserPreferences,
}
