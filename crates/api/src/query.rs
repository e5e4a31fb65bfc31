//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /Search` (`?SearchTerm=`).
///
/// The camel- and lower-case spellings are accepted as well.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(
        default,
        rename = "SearchTerm",
        alias = "searchTerm",
        alias = "searchterm"
    )]
    pub search_term: Option<String>,
}
