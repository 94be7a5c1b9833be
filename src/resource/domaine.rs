//! Store bindings for [`Domaine`].
//!
//! Domains are the only entity with a server-side count endpoint
//! (`GET /api/NombreDomaine`), hence the extra [`Countable`] impl.

use super::{CollectionShape, Countable, Resource};
use crate::model::{Domaine, DomaineCreate, DomaineUpdate};

impl Resource for Domaine {
    type Id = u64;
    type CreatePayload = DomaineCreate;
    type UpdatePayload = DomaineUpdate;

    const NAME: &'static str = "Domaine";
    const PLURAL: &'static str = "domaines";
    // The endpoint has answered both bare and wrapped; accept either.
    const SHAPE: CollectionShape = CollectionShape::BareOrData;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Countable for Domaine {
    const COUNT_FIELD: &'static str = "nombre";
}
