//! Shared registry vocabulary: keys, normalization, collisions, errors.

pub mod alloc;
pub mod collision;
pub mod error;
pub mod id;
pub mod index;
pub mod key;
pub mod normalize;

pub use alloc::SyntheticKeyAllocator;
pub use collision::{Collision, DuplicatePolicy, KeyKind, Party, Resolution};
pub use error::{ConfigError, DatasetError, InitError, ProbeError, RecordIssue};
pub use id::TaxonomyId;
pub use index::ShortNameIndex;
pub use key::{CanonicalEntry, CharsetKey, SYNTHETIC_BASE};
pub use normalize::normalize;
