//! Identifier kinds.
//!
//! An [`IdKind`] is the descriptor a [`Registry`](crate::Registry) hands out
//! when a kind is registered. It is a cheap, shareable handle: every
//! [`TypedId`] minted or parsed for the kind points back at the same
//! descriptor.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use regex::Regex;
use serde::ser::SerializeStruct;
use svix_ksuid::{Ksuid, KsuidLike};

use crate::error::{IdError, RegistryError};
use crate::format::{self, KSUID_LEN, MAX_KSUID};
use crate::id::TypedId;

struct KindInner {
    name: String,
    prefix: String,
    check: Option<Regex>,
}

/// A registered identifier kind, e.g. `dog` with prefix `dog`.
#[derive(Clone)]
pub struct IdKind(Arc<KindInner>);

impl IdKind {
    /// Builds a kind, compiling its validator.
    pub(crate) fn build(name: &str, prefix: &str) -> Result<Self, RegistryError> {
        let check = format::validator(prefix)?;
        Ok(Self::from_parts(name, prefix, Some(check)))
    }

    /// Builds a kind, falling back to a structural check if the validator
    /// pattern can't be compiled.
    pub(crate) fn build_lenient(name: &str, prefix: &str) -> Self {
        match format::validator(prefix) {
            Ok(check) => Self::from_parts(name, prefix, Some(check)),
            Err(error) => {
                tracing::warn!(
                    name,
                    prefix,
                    error = %error,
                    "validator pattern rejected, using structural check"
                );
                Self::from_parts(name, prefix, None)
            }
        }
    }

    fn from_parts(name: &str, prefix: &str, check: Option<Regex>) -> Self {
        Self(Arc::new(KindInner {
            name: name.to_owned(),
            prefix: prefix.to_owned(),
            check,
        }))
    }

    /// Human-readable name of the kind.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Prefix written before the separator in every ID of this kind.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.0.prefix
    }

    /// Length of every rendered ID of this kind.
    #[must_use]
    pub fn rendered_len(&self) -> usize {
        self.0.prefix.len() + 1 + KSUID_LEN
    }

    /// Mints a new ID of this kind with a fresh KSUID.
    #[must_use]
    pub fn new_id(&self) -> TypedId {
        TypedId::from_parts(self.clone(), Ksuid::new(None, None))
    }

    /// Pairs an existing KSUID with this kind.
    #[must_use]
    pub fn from_ksuid(&self, ksuid: Ksuid) -> TypedId {
        TypedId::from_parts(self.clone(), ksuid)
    }

    /// Checks whether `candidate` has the shape of an ID of this kind.
    ///
    /// Only the shape is checked (prefix, separator, 27 alphanumeric
    /// characters); the KSUID is not decoded.
    pub fn is(&self, candidate: &str) -> bool {
        match &self.0.check {
            Some(check) => check.is_match(candidate),
            None => format::matches_shape(&self.0.prefix, candidate),
        }
    }

    /// Parses an ID that must belong to this kind.
    pub fn parse(&self, s: &str) -> Result<TypedId, IdError> {
        let (prefix, ksuid) = format::split_id(s)?;

        if prefix != self.prefix() {
            return Err(IdError::InvalidPrefix {
                expected: self.prefix().to_owned(),
                actual: prefix.to_owned(),
            });
        }

        Ok(self.from_ksuid(decode_ksuid(ksuid)?))
    }
}

/// Decodes the KSUID segment of an ID.
pub(crate) fn decode_ksuid(s: &str) -> Result<Ksuid, IdError> {
    if s.len() != KSUID_LEN {
        return Err(IdError::InvalidKsuid(format!(
            "expected {KSUID_LEN} characters, got {}",
            s.len()
        )));
    }

    if s > MAX_KSUID {
        return Err(IdError::InvalidKsuid(format!(
            "value exceeds maximum {MAX_KSUID}"
        )));
    }

    s.parse::<Ksuid>()
        .map_err(|e| IdError::InvalidKsuid(e.to_string()))
}

impl PartialEq for IdKind {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.prefix == other.0.prefix && self.0.name == other.0.name)
    }
}

impl Eq for IdKind {}

impl Hash for IdKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.prefix.hash(state);
        self.0.name.hash(state);
    }
}

impl fmt::Debug for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdKind")
            .field("name", &self.0.name)
            .field("prefix", &self.0.prefix)
            .finish()
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

impl serde::Serialize for IdKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("IdKind", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("prefix", self.prefix())?;
        state.end()
    }
}
