//! Collections - named groups of node paths.
//!
//! Collections group nodes by name without modifying the scene hierarchy.
//! They are useful for selection sets, render passes, and collection-based
//! material bindings, where one binding covers every member of a set.
//!
//! ## Key Concepts
//!
//! - **Collection**: Named set-membership predicate over node paths
//! - **Expansion**: Whether listed paths cover their descendants
//!
//! ## Example
//!
//! ```ignore
//! use shadebind::collection::{Collection, Expansion};
//!
//! let mut shafts = Collection::new("Shafts");
//! shafts.include("/Office_set/Desk_Assembly/Cup_grp/Pencil_1/Geom/Shaft");
//!
//! assert!(shafts.is_path_included(
//!     &"/Office_set/Desk_Assembly/Cup_grp/Pencil_1/Geom/Shaft".into()
//! ));
//! ```

mod membership;

pub use membership::*;
