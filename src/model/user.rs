use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Profile of a rental API user
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier of the user
    pub id: u64,
    /// Login name
    pub username: String,
    /// Email address, when the backend exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}
