use serde::{Deserialize, Serialize};

/// A team competing under a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipe {
    pub id: u64,
    pub nom: String,
    /// Domain the team registered under, once chosen.
    #[serde(default)]
    pub domaine_id: Option<u64>,
}

/// Payload for creating a new team.
#[derive(Debug, Clone, Serialize)]
pub struct EquipeCreate {
    pub nom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domaine_id: Option<u64>,
}

/// Partial payload for updating an existing team.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EquipeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domaine_id: Option<u64>,
}
