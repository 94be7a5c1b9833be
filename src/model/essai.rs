use serde::{Deserialize, Serialize};

/// A trial session a team presents at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Essai {
    pub id: u64,
    pub titre: String,
    /// Scheduled date, when the session has been planned.
    #[serde(default)]
    pub date: Option<String>,
}

/// Payload for scheduling a new trial.
#[derive(Debug, Clone, Serialize)]
pub struct EssaiCreate {
    pub titre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Partial payload for updating an existing trial.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EssaiUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
