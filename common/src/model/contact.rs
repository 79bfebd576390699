use serde::{Deserialize, Serialize};

/// A stored contact-form message, as returned by the API after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// The contact-form submission payload. `phone` is optional and omitted
/// entirely when blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessageInput {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}
