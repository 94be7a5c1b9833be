//! Store bindings for [`Equipe`].

use super::{CollectionShape, Resource};
use crate::model::{Equipe, EquipeCreate, EquipeUpdate};

impl Resource for Equipe {
    type Id = u64;
    type CreatePayload = EquipeCreate;
    type UpdatePayload = EquipeUpdate;

    const NAME: &'static str = "Equipe";
    const PLURAL: &'static str = "equipes";
    // The team list is buried one level deeper than everyone else's.
    const SHAPE: CollectionShape = CollectionShape::NestedData("Liste_equipe");

    fn id(&self) -> u64 {
        self.id
    }
}
