use serde::{Deserialize, Serialize};

/// Base identity record. The id is numeric in the database but opaque
/// string in the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub username: String,
}
