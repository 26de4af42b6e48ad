//! The prefix → kind registry.
//!
//! Kinds are registered while the application is being wired up. The
//! registry is then shared read-only (`&Registry` or `Arc<Registry>`) with
//! everything that parses IDs. Registration needs `&mut self`, so late
//! registration while readers exist requires the caller's own lock.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, DeserializeSeed, Visitor};

use crate::error::{IdError, RegistryError};
use crate::format;
use crate::id::TypedId;
use crate::kind::{self, IdKind};

/// Mapping from prefix to registered [`IdKind`].
#[derive(Debug, Default, Clone)]
pub struct Registry {
    kinds: BTreeMap<String, IdKind>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a kind and returns its descriptor.
    ///
    /// Never fails. Registering a prefix that is already taken replaces the
    /// previous kind; IDs minted from the old descriptor keep rendering but
    /// parse as the new kind. The prefix is not validated, so a prefix
    /// containing `_` yields a kind whose IDs never parse.
    pub fn register(&mut self, name: &str, prefix: &str) -> IdKind {
        let kind = IdKind::build_lenient(name, prefix);

        if let Some(previous) = self.kinds.insert(prefix.to_owned(), kind.clone()) {
            tracing::warn!(
                prefix,
                previous = previous.name(),
                name,
                "ID prefix re-registered, replacing previous kind"
            );
        } else {
            tracing::debug!(name, prefix, "registered ID kind");
        }

        kind
    }

    /// Registers a kind, rejecting unusable prefixes and duplicates.
    pub fn try_register(&mut self, name: &str, prefix: &str) -> Result<IdKind, RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if prefix.is_empty() {
            return Err(RegistryError::EmptyPrefix);
        }
        if let Some(reason) = format::prefix_problem(prefix) {
            return Err(RegistryError::InvalidPrefix {
                prefix: prefix.to_owned(),
                reason,
            });
        }
        if let Some(existing) = self.kinds.get(prefix) {
            return Err(RegistryError::DuplicatePrefix {
                prefix: prefix.to_owned(),
                existing: existing.name().to_owned(),
            });
        }

        let kind = IdKind::build(name, prefix)?;
        self.kinds.insert(prefix.to_owned(), kind.clone());
        tracing::debug!(name, prefix, "registered ID kind");

        Ok(kind)
    }

    /// Returns the kind registered for `prefix`.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<IdKind> {
        self.kinds.get(prefix).cloned()
    }

    /// Returns true if a kind is registered for `prefix`.
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.kinds.contains_key(prefix)
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns true if no kinds are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Registered kinds, sorted by prefix.
    pub fn kinds(&self) -> impl Iterator<Item = &IdKind> {
        self.kinds.values()
    }

    /// Looks up the kind of an ID string.
    ///
    /// The string must split into exactly two non-empty parts on `_`. Only
    /// the prefix is consulted; the KSUID part is not validated.
    #[must_use]
    pub fn get_type(&self, id: &str) -> Option<IdKind> {
        let (prefix, _) = format::split_id(id).ok()?;
        self.get(prefix)
    }

    /// Parses an ID string into a [`TypedId`] of whichever kind owns its
    /// prefix.
    pub fn parse(&self, id: &str) -> Result<TypedId, IdError> {
        let (prefix, ksuid) = format::split_id(id)?;

        let kind = self
            .kinds
            .get(prefix)
            .ok_or_else(|| IdError::UnknownPrefix(prefix.to_owned()))?;

        let ksuid = kind::decode_ksuid(ksuid)?;
        Ok(kind.from_ksuid(ksuid))
    }

    /// Returns a [`DeserializeSeed`] that parses IDs against this registry.
    ///
    /// ```ignore
    /// use serde::de::DeserializeSeed;
    ///
    /// let mut de = serde_json::Deserializer::from_str(&json);
    /// let id = registry.seed().deserialize(&mut de)?;
    /// ```
    #[must_use]
    pub fn seed(&self) -> IdSeed<'_> {
        IdSeed { registry: self }
    }
}

/// Deserializes a [`TypedId`] from its string form using a [`Registry`].
#[derive(Debug, Clone, Copy)]
pub struct IdSeed<'a> {
    registry: &'a Registry,
}

impl<'de> DeserializeSeed<'de> for IdSeed<'_> {
    type Value = TypedId;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }
}

impl Visitor<'_> for IdSeed<'_> {
    type Value = TypedId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a typed ID string like `dog_<ksuid>`")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.registry.parse(v).map_err(E::custom)
    }
}
