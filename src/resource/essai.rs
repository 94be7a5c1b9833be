//! Store bindings for [`Essai`].

use super::{CollectionShape, Resource};
use crate::model::{Essai, EssaiCreate, EssaiUpdate};

impl Resource for Essai {
    type Id = u64;
    type CreatePayload = EssaiCreate;
    type UpdatePayload = EssaiUpdate;

    const NAME: &'static str = "Essai";
    const PLURAL: &'static str = "essais";
    const SHAPE: CollectionShape = CollectionShape::Bare;

    fn id(&self) -> u64 {
        self.id
    }
}
