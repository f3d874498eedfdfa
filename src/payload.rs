//! Boundary to externally owned attribute payloads.
//!
//! The graph stores one payload per node and per edge and never looks inside
//! it. The only coupling is the identifier mirror: serializers that key
//! payloads by [`Uid`] keep a copy of it inside the payload, and the owner
//! asks the graph to refresh that copy after identifiers are assigned
//! (see [`Graph::refresh_node_id`](crate::Graph::refresh_node_id)).

use serde_json::{Map, Value};

use crate::handle::Uid;

/// Attribute key under which JSON payloads mirror their identifier.
pub const ID_ATTRIBUTE: &str = "id";

/// Payloads that mirror their record's identifier.
pub trait ExternalId {
    /// Stores `uid` as the payload's externally visible id.
    fn refresh_id(&mut self, uid: Uid);
}

impl ExternalId for () {
    #[inline]
    fn refresh_id(&mut self, _uid: Uid) {}
}

impl ExternalId for Map<String, Value> {
    fn refresh_id(&mut self, uid: Uid) {
        self.insert(ID_ATTRIBUTE.to_owned(), Value::from(uid.get()));
    }
}

/// Only objects carry attributes; other JSON values are left untouched.
impl ExternalId for Value {
    fn refresh_id(&mut self, uid: Uid) {
        if let Value::Object(map) = self {
            map.refresh_id(uid);
        }
    }
}

impl<T: ExternalId> ExternalId for Option<T> {
    fn refresh_id(&mut self, uid: Uid) {
        if let Some(inner) = self {
            inner.refresh_id(uid);
        }
    }
}

impl<T: ExternalId + ?Sized> ExternalId for Box<T> {
    fn refresh_id(&mut self, uid: Uid) {
        (**self).refresh_id(uid);
    }
}
