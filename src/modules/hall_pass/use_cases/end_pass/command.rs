// Command data type for returning the pass.
//
// Carries the identifier presented at return and an optional location token, normalized
// the same way as `StartPass`.

use crate::modules::hall_pass::use_cases::start_pass::command::normalize_token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndPass {
    pub id: String,
    pub location_token: Option<String>,
}

impl EndPass {
    pub fn new(id: impl AsRef<str>, location_token: Option<impl AsRef<str>>) -> Self {
        Self {
            id: id.as_ref().trim().to_string(),
            location_token: normalize_token(location_token),
        }
    }
}
