use serde::{Deserialize, Serialize};

/// Denormalized read across `user`, `user_profile` and `user_data`.
/// Also serves as the create payload for `POST /profile/create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub user_id: i64,
    pub username: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub school: String,
}
