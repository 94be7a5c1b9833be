//! Store bindings for [`Etudiant`].

use super::{CollectionShape, Resource};
use crate::model::{Etudiant, EtudiantCreate, EtudiantUpdate};

impl Resource for Etudiant {
    type Id = u64;
    type CreatePayload = EtudiantCreate;
    type UpdatePayload = EtudiantUpdate;

    const NAME: &'static str = "Etudiant";
    const PLURAL: &'static str = "etudiants";
    const SHAPE: CollectionShape = CollectionShape::Data;

    fn id(&self) -> u64 {
        self.id
    }
}
