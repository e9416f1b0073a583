//! Id-or-populated record references.
//!
//! Depending on an endpoint's projection the server returns related records
//! either as a bare id string or as a populated document. Every access site
//! goes through [`EntityRef`] instead of re-checking the shape inline.

use serde::{Deserialize, Serialize};

/// Implemented by documents that carry their own id.
pub trait HasId {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EntityRef<T> {
    Id(String),
    Populated(T),
}

impl<T: HasId> EntityRef<T> {
    /// The referenced id, whichever shape the server sent.
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Id(id) => id,
            EntityRef::Populated(entity) => entity.id(),
        }
    }

    /// The populated document, when the server sent one.
    pub fn entity(&self) -> Option<&T> {
        match self {
            EntityRef::Id(_) => None,
            EntityRef::Populated(entity) => Some(entity),
        }
    }
}
