use serde::{Deserialize, Serialize};

/// A thematic domain that teams register under.
///
/// Managed by a [`ResourceStore<Domaine>`](crate::store::ResourceStore); see
/// the [`Resource`](crate::resource::Resource) impl for its route bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domaine {
    pub id: u64,
    pub titre: String,
}

/// Payload for creating a new domain.
///
/// Required-field validation (non-empty `titre`) happens at the caller
/// level; the store submits the payload as given.
#[derive(Debug, Clone, Serialize)]
pub struct DomaineCreate {
    pub titre: String,
}

/// Partial payload for updating an existing domain.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DomaineUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titre: Option<String>,
}
