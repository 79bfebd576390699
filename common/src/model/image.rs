use serde::{Deserialize, Serialize};

/// A media record attached to a parent entity (section, hero, product).
///
/// `file_path` is server-relative; it becomes loadable only after being
/// joined with the API origin (see [`crate::paths::clean_file_path`]). The
/// record carries no parent reference, ownership is implied by the endpoint
/// it was fetched from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub original_name: String,
    pub file_path: String,
    pub created_at: String,
}
