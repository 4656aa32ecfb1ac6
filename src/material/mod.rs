//! Material binding module.
//!
//! This module provides material assignment types and the resolver that
//! computes the bound material for a node.
//!
//! ## Key Concepts
//!
//! - **Direct binding**: names a single target material on one node
//! - **Collection binding**: applies to every member of a named collection
//! - **Purpose**: rendering-context filter (`full`, `preview`, all-purpose)
//! - **Strength**: whether a binding overrides bindings found closer to the
//!   queried node
//!
//! ## Example
//!
//! ```ignore
//! use shadebind::material::{MaterialResolver, Purpose};
//!
//! let resolver = MaterialResolver::new(&scene);
//! if let Some(material) = resolver.resolve_bound_material(&node, Purpose::Full)? {
//!     println!("bound to {}", material.path());
//! }
//! ```

mod binding;
mod cache;
mod resolver;

pub use binding::*;
pub use cache::{CollectionLevelCache, CollectionLevelKey};
pub use resolver::{MaterialResolver, ResolvedBinding};

/// Token for the full rendering purpose.
pub const FULL_PURPOSE_TOKEN: &str = "full";

/// Token for the preview rendering purpose.
pub const PREVIEW_PURPOSE_TOKEN: &str = "preview";

/// Token for the all-purpose lane. Empty, as in the source format.
pub const ALL_PURPOSE_TOKEN: &str = "";
