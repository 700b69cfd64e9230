//! Core logic for logrepo join configurations.
//!
//! This crate converts between the two shapes a join configuration takes:
//! - Occurrence: backend hour windows to and from the editor's
//!   `(direction, magnitude, unit)` triple
//! - Tree: nesting a flat, name-linked working list under a root logrepo
//! - Convert: nested read-API records into the editor tree, and the tree
//!   into flat write-API records
//!
//! All functions are pure and return new values.

mod convert;
mod guard;
mod join;
pub mod occurrence;
mod tree;
pub mod types;
pub mod wire;

pub use convert::{
    flatten_joins, parse_from_api, parse_from_api_guarded, parse_to_api, parse_to_api_guarded,
};
pub use guard::{DEFAULT_MAX_DEPTH, TraversalError, TraversalLimits};
pub use join::{JoinNode, JoinSpec};
pub use occurrence::{EventOccurrence, TimeWindow, WindowEncoding, encode_window};
pub use tree::{build_tree, build_tree_guarded, check_tree, flatten_tree};
pub use types::{Direction, JoinId, Quantity, Relationship, TimeScale, ValidationError};
pub use wire::{ApiJoin, ApiJoinRecord};
