use serde::{Deserialize, Serialize};

/// Subset of the profile's backing store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserData {
    pub user_id: String,
    pub school: String,
}
