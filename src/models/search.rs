use serde::{Deserialize, Serialize};

/// One candidate novel from the search page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub text: String,
    pub url: String,
}
