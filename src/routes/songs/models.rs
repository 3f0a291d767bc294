use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, Validate, ToSchema, Debug, Clone)]
pub struct SubmitSong {
    #[validate(custom = "crate::validation::validate_not_blank")]
    pub song_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_by: Option<String>,
}
