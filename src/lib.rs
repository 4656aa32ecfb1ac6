//! # Shadebind
//!
//! Material binding resolution for hierarchical scene graphs.
//!
//! Given a node in a tree-shaped scene and a rendering purpose, the
//! [`MaterialResolver`] walks the node's ancestor chain and returns the
//! strongest applicable material assignment, considering both direct
//! bindings and collection-based bindings and honoring per-binding
//! strength overrides.
//!
//! ## Modules
//!
//! - [`util`] - Basic types (paths, errors)
//! - [`core`] - Abstract traits and node headers
//! - [`arena`] - In-memory scene-graph backend
//! - [`scene`] - High-level API (Scene, Node)
//! - [`collection`] - Collection/grouping support
//! - [`material`] - Binding types and the resolver
//!
//! ## Example
//!
//! ```ignore
//! use shadebind::prelude::*;
//!
//! let mut graph = SceneGraph::new("office_set");
//! let set = graph.add_group(graph.root_id(), "Office_set")?;
//! let desk = graph.add_group(set, "Desk_Assembly")?;
//! let cup = graph.add_group(desk, "Cup_grp")?;
//! let mats = graph.add_group(set, "Materials")?;
//! graph.add_material(mats, "Default")?;
//! graph.bind_direct(
//!     desk,
//!     Purpose::AllPurpose,
//!     BindingStrength::WeakerThanDescendants,
//!     "/Office_set/Materials/Default",
//! )?;
//!
//! let scene = Scene::from(graph);
//! let resolver = MaterialResolver::new(&scene);
//! let bound = resolver.resolve_bound_material(&scene.node(cup), Purpose::AllPurpose)?;
//! ```

pub mod util;
pub mod core;
pub mod arena;
pub mod scene;
pub mod collection;
pub mod material;

// Re-export commonly used types
pub use util::{Error, NodePath, Result};
pub use scene::{Node, Scene};
pub use material::{Material, MaterialResolver, Purpose};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::arena::SceneGraph;
    pub use crate::collection::{Collection, Expansion};
    pub use crate::core::{NodeId, NodeKind, SceneReader};
    pub use crate::material::{
        BindingKind, BindingStrength, CollectionBinding, DirectBinding, Material,
        MaterialResolver, Purpose, ResolvedBinding,
    };
    pub use crate::scene::{Node, Scene};
    pub use crate::util::{Error, NodePath, Result};
}
