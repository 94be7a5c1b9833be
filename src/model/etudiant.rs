use serde::{Deserialize, Serialize};

/// The role a student holds inside their team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Founded the team.
    Createur,
    /// Joined an existing team.
    Membre,
}

/// A registered student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Etudiant {
    pub id: u64,
    pub nom: String,
    pub email: String,
    pub role: Role,
}

/// Payload for registering a new student.
#[derive(Debug, Clone, Serialize)]
pub struct EtudiantCreate {
    pub nom: String,
    pub email: String,
    pub role: Role,
}

/// Partial payload for updating an existing student.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EtudiantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}
