//! convert
//!
//! Registry of pure argument converters.
//!
//! # Design
//!
//! Some argument types are host domain objects (a world handle, a player
//! reference) that commands receive as plain strings from chat. A
//! [`ConverterRegistry`] maps a target type to a stateless conversion
//! function. The registry is populated during single-threaded startup,
//! wrapped in an `Arc`, and shared read-only by every binding; there is
//! no ambient global and no locking.
//!
//! At most one converter exists per type; registering again replaces the
//! previous one.
//!
//! # Example
//!
//! ```
//! use chatbind::convert::{ConversionError, ConverterRegistry};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct WorldHandle(u32);
//!
//! let mut registry = ConverterRegistry::new();
//! registry.register_lookup(vec![
//!     ("overworld".to_string(), WorldHandle(0)),
//!     ("nether".to_string(), WorldHandle(1)),
//! ]);
//!
//! assert_eq!(registry.convert::<WorldHandle>("nether").unwrap(), WorldHandle(1));
//! let err = registry.convert::<WorldHandle>("bogus").unwrap_err();
//! assert_eq!(err.to_string(), "Available options: overworld, nether");
//! ```

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use thiserror::Error;

/// A per-invocation conversion failure.
///
/// The message is user-facing and is delivered to the requester's chat;
/// it should name valid alternatives where they are enumerable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ConversionError {
    message: String,
}

impl ConversionError {
    /// Conversion failure with a user-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

type BoxedConverter =
    Box<dyn Fn(&str) -> Result<Box<dyn Any + Send + Sync>, ConversionError> + Send + Sync>;

/// Type-keyed map of stateless string-to-value converters.
///
/// Lookup converters additionally retain their name table so completion
/// can enumerate valid inputs at call time.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: HashMap<TypeId, BoxedConverter>,
    lookups: HashMap<TypeId, Vec<String>>,
}

impl ConverterRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a converter for `T`. A previous converter for the same
    /// type is replaced.
    pub fn register<T, F>(&mut self, convert: F)
    where
        T: Any + Send + Sync,
        F: Fn(&str) -> Result<T, ConversionError> + Send + Sync + 'static,
    {
        let boxed: BoxedConverter = Box::new(move |raw| {
            convert(raw).map(|value| Box::new(value) as Box<dyn Any + Send + Sync>)
        });
        // A plain converter has no name table; drop any stale one.
        self.lookups.remove(&TypeId::of::<T>());
        if self.converters.insert(TypeId::of::<T>(), boxed).is_some() {
            tracing::debug!(converter = type_name::<T>(), "replacing registered converter");
        }
    }

    /// Register a converter backed by an enumerable name table. An input
    /// that matches no name fails with a message listing the valid names
    /// in table order.
    pub fn register_lookup<T>(&mut self, entries: Vec<(String, T)>)
    where
        T: Any + Send + Sync + Clone,
    {
        let names: Vec<String> = entries.iter().map(|(name, _)| name.clone()).collect();
        self.register(move |raw| {
            entries
                .iter()
                .find(|(name, _)| name == raw)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| {
                    let names: Vec<&str> =
                        entries.iter().map(|(name, _)| name.as_str()).collect();
                    ConversionError::new(format!("Available options: {}", names.join(", ")))
                })
        });
        self.lookups.insert(TypeId::of::<T>(), names);
    }

    /// The name table behind the lookup converter for `T`, if `T` was
    /// registered via [`register_lookup`](Self::register_lookup). Lets
    /// completion enumerate valid inputs at call time.
    pub fn lookup_names<T: Any>(&self) -> Option<&[String]> {
        self.lookups.get(&TypeId::of::<T>()).map(Vec::as_slice)
    }

    /// Convert `raw` into a `T` using the registered converter.
    ///
    /// # Errors
    ///
    /// Fails with the converter's own error. A missing converter is a
    /// binding mistake: it is logged with the full type path and the
    /// requester only sees a neutral message.
    pub fn convert<T: Any>(&self, raw: &str) -> Result<T, ConversionError> {
        let Some(converter) = self.converters.get(&TypeId::of::<T>()) else {
            tracing::error!(target_type = type_name::<T>(), "no converter registered");
            return Err(ConversionError::new(format!("Cannot interpret '{raw}'")));
        };

        converter(raw)?
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| {
                tracing::error!(
                    target_type = type_name::<T>(),
                    "converter produced an unexpected type"
                );
                ConversionError::new(format!("Cannot interpret '{raw}'"))
            })
    }

    /// Whether a converter for `T` is registered.
    pub fn contains<T: Any>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered converters.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}
