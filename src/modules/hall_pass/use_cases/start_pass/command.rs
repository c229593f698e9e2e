// Command data type for taking the pass.
//
// Purpose
// - Express the intent to start a pass with an identifier and an optional scanned location token.
//
// Responsibilities
// - Normalize raw capture input: surrounding whitespace is dropped and a blank token counts as absent.
// - Stay independent of the transport (HTTP, GraphQL, scan events).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartPass {
    pub id: String,
    pub location_token: Option<String>,
}

impl StartPass {
    pub fn new(id: impl AsRef<str>, location_token: Option<impl AsRef<str>>) -> Self {
        Self {
            id: id.as_ref().trim().to_string(),
            location_token: normalize_token(location_token),
        }
    }
}

pub(crate) fn normalize_token(token: Option<impl AsRef<str>>) -> Option<String> {
    token
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
}
