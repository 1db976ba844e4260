use serde::{Deserialize, Serialize};

/// Credential record. No foreign key ties it to a user and the service
/// never checks incoming API keys against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Auth {
    pub id: String,
    pub api_key: String,
}
