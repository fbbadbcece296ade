//! Typed storage for request-scoped data.
//!
//! Handlers earlier in a pipeline can leave typed values here for handlers
//! later in the same pipeline, without agreeing on string keys.
//!
//! # Examples
//!
//! ```
//! use switchyard::http_helpers::Extensions;
//!
//! struct UserId(String);
//!
//! let mut ext = Extensions::new();
//! ext.insert(UserId("alice".to_string()));
//!
//! let user_id = ext.get::<UserId>().unwrap();
//! assert_eq!(user_id.0, "alice");
//! ```

use std::any::{Any, TypeId};
use std::fmt;

use rustc_hash::FxHashMap;

/// A type map keyed by `TypeId`. One value per type.
#[derive(Default)]
pub struct Extensions {
    map: FxHashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value of the same type.
    ///
    /// ```
    /// use switchyard::http_helpers::Extensions;
    ///
    /// struct Attempt(u8);
    ///
    /// let mut ext = Extensions::new();
    /// assert!(ext.insert(Attempt(1)).is_none());
    /// assert_eq!(ext.insert(Attempt(2)).unwrap().0, 1);
    /// ```
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok())
            .map(|boxed| *boxed)
    }

    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok())
            .map(|boxed| *boxed)
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extensions")
            .field("len", &self.map.len())
            .finish()
    }
}
