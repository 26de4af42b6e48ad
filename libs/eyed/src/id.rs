//! Typed ID values.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use svix_ksuid::{Ksuid, KsuidLike};
use time::OffsetDateTime;

use crate::format::SEPARATOR;
use crate::kind::IdKind;

/// One identifier: a kind plus a KSUID, rendered as `{prefix}_{ksuid}`.
///
/// Values are only created by [`IdKind::new_id`], [`IdKind::from_ksuid`]
/// or by parsing, so every `TypedId` renders to a well-formed string.
#[derive(Clone)]
pub struct TypedId {
    kind: IdKind,
    ksuid: Ksuid,
}

impl TypedId {
    pub(crate) fn from_parts(kind: IdKind, ksuid: Ksuid) -> Self {
        Self { kind, ksuid }
    }

    /// Returns the kind this ID belongs to.
    #[must_use]
    pub fn kind(&self) -> &IdKind {
        &self.kind
    }

    /// Returns the underlying KSUID.
    #[must_use]
    pub fn ksuid(&self) -> Ksuid {
        self.ksuid
    }

    /// Returns the creation time encoded in the KSUID (second precision).
    #[must_use]
    pub fn timestamp(&self) -> OffsetDateTime {
        self.ksuid.timestamp()
    }

    /// Returns the creation time as seconds since the Unix epoch.
    #[must_use]
    pub fn timestamp_seconds(&self) -> i64 {
        self.timestamp().unix_timestamp()
    }
}

impl fmt::Display for TypedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.kind.prefix(), SEPARATOR, self.ksuid)
    }
}

impl fmt::Debug for TypedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedId").field(&self.to_string()).finish()
    }
}

impl PartialEq for TypedId {
    fn eq(&self, other: &Self) -> bool {
        self.ksuid == other.ksuid && self.kind == other.kind
    }
}

impl Eq for TypedId {}

impl Hash for TypedId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.ksuid.hash(state);
    }
}

impl PartialOrd for TypedId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by prefix, then by KSUID; within a kind this is creation order.
impl Ord for TypedId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .prefix()
            .cmp(other.kind.prefix())
            .then_with(|| self.ksuid.cmp(&other.ksuid))
            .then_with(|| self.kind.name().cmp(other.kind.name()))
    }
}

impl AsRef<Ksuid> for TypedId {
    fn as_ref(&self) -> &Ksuid {
        &self.ksuid
    }
}

impl serde::Serialize for TypedId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
