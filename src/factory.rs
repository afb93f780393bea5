//! factory
//!
//! Per-invocation construction of command objects.
//!
//! # Design
//!
//! Every call to a binding builds a fresh command object, so state never
//! leaks between invocations. An [`InstanceFactory`] describes how one
//! command type is built, as up to three explicit slots:
//!
//! - `with_source`: a constructor that accepts the requester handle
//! - `no_args`: a plain constructor (typically `K::default`)
//! - `inject`: a post-construction setter that stores the handle into the
//!   instance, overwriting whatever the constructor put there
//!
//! `create` prefers `with_source`, falls back to `no_args`, and fails with
//! [`ConfigurationError::NoUsableConstructor`] when neither is present. The
//! injector always runs last. A command type can therefore take its
//! requester purely through construction, purely through injection, or not
//! at all.
//!
//! The slots are plain `fn` pointers: which shapes a type supports is
//! decided where the binding is declared, not discovered at runtime.

use crate::errors::ConfigurationError;
use crate::source::SourceHandle;

/// Recipe for constructing one command type with its requester.
pub struct InstanceFactory<K> {
    with_source: Option<fn(SourceHandle) -> K>,
    no_args: Option<fn() -> K>,
    inject: Option<fn(&mut K, SourceHandle)>,
}

impl<K> InstanceFactory<K> {
    /// Empty factory with no constructor slots.
    ///
    /// A binding built from this fails registration until at least one
    /// constructor is supplied.
    pub fn new() -> Self {
        Self {
            with_source: None,
            no_args: None,
            inject: None,
        }
    }

    /// Use a constructor that accepts the requester handle. Preferred over
    /// `no_args` when both are present.
    pub fn with_source(mut self, ctor: fn(SourceHandle) -> K) -> Self {
        self.with_source = Some(ctor);
        self
    }

    /// Use a plain constructor, tried when no source-accepting constructor
    /// is present.
    pub fn no_args(mut self, ctor: fn() -> K) -> Self {
        self.no_args = Some(ctor);
        self
    }

    /// Store the requester handle into the instance after construction,
    /// overwriting any existing value.
    pub fn inject(mut self, setter: fn(&mut K, SourceHandle)) -> Self {
        self.inject = Some(setter);
        self
    }

    /// Whether `create` can succeed at all. Bindings check this at
    /// registration so a missing constructor never surfaces mid-dispatch.
    pub fn has_constructor(&self) -> bool {
        self.with_source.is_some() || self.no_args.is_some()
    }

    /// Build a fresh instance for one invocation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NoUsableConstructor`] when no
    /// constructor slot is set.
    pub fn create(&self, source: &SourceHandle) -> Result<K, ConfigurationError> {
        let mut instance = if let Some(ctor) = self.with_source {
            ctor(source.clone())
        } else if let Some(ctor) = self.no_args {
            ctor()
        } else {
            return Err(ConfigurationError::NoUsableConstructor {
                type_name: std::any::type_name::<K>(),
            });
        };

        if let Some(setter) = self.inject {
            setter(&mut instance, source.clone());
        }

        Ok(instance)
    }
}

impl<K: Default> InstanceFactory<K> {
    /// Factory for types constructed via `Default`.
    pub fn default_constructed() -> Self {
        Self::new().no_args(K::default)
    }
}

impl<K> Default for InstanceFactory<K> {
    fn default() -> Self {
        Self::new()
    }
}
