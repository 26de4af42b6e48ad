//! # eyed
//!
//! Sortable, type-tagged identifiers whose kinds are registered at run time.
//!
//! ## ID Format
//!
//! Every ID is `{prefix}_{ksuid}`: a registered prefix, an underscore, and a
//! 27-character base-62 [KSUID](https://github.com/segmentio/ksuid).
//!
//! Examples:
//! - `dog_2ZkqXPWOtKid1EUt8mi7zfxvhJV`
//! - `fi_2ZkqY1bFpcLrXaqxnPCAS9MNtGz`
//!
//! This format provides:
//! - Type tagging (prefix names the kind)
//! - Sortability (KSUIDs begin with a big-endian timestamp)
//! - Uniqueness (KSUIDs carry 128 random bits)
//! - Fixed length (`len(prefix) + 28`)
//!
//! ## Usage
//!
//! ```ignore
//! let mut registry = eyed::Registry::new();
//! let dog = registry.register("dog", "dog");
//!
//! let id = dog.new_id();
//! let parsed = registry.parse(&id.to_string())?;
//! assert_eq!(parsed, id);
//! assert!(dog.is(&id.to_string()));
//! ```
//!
//! Kinds are open-ended: applications register whatever they need while
//! wiring up, then share the registry read-only.

mod error;
pub mod format;
mod id;
mod kind;
mod registry;

pub use error::{IdError, RegistryError};
pub use id::TypedId;
pub use kind::IdKind;
pub use registry::{IdSeed, Registry};

/// Re-export the KSUID type for consumers that need raw KSUID operations
pub use svix_ksuid::Ksuid;
