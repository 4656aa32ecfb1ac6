//! Abstract traits for scene-graph access.
//!
//! These traits define the interface between a scene-graph backend and the
//! high-level Scene / resolver API.

use crate::collection::Collection;
use crate::core::{NodeHeader, NodeId};
use crate::material::{CollectionBinding, DirectBinding, Material, Purpose};
use crate::util::NodePath;

/// Read interface for a scene graph.
///
/// The resolver performs only read operations through this trait and adds
/// no locking of its own; implementations must provide a consistent view
/// for the duration of one resolution call.
pub trait SceneReader: Send + Sync {
    /// Scene name.
    fn name(&self) -> &str;

    /// Pseudo-root id.
    fn root(&self) -> NodeId;

    /// Check whether an id refers to a live node.
    fn is_alive(&self, id: NodeId) -> bool;

    /// Header for a node.
    ///
    /// Removed nodes keep their header so stale handles can still report
    /// a path; None only for ids the backend never handed out.
    fn header(&self, id: NodeId) -> Option<&NodeHeader>;

    /// Live children of a live node, in creation order.
    fn children(&self, id: NodeId) -> &[NodeId];

    /// Find a live node by full path.
    fn find(&self, path: &str) -> Option<NodeId>;

    /// Direct material binding declared on a node for a purpose.
    fn direct_binding(&self, id: NodeId, purpose: Purpose) -> Option<&DirectBinding>;

    /// All collection bindings declared on a node, in declaration order.
    fn collection_bindings(&self, id: NodeId) -> &[CollectionBinding];

    /// Look up a collection by name.
    fn collection(&self, name: &str) -> Option<&Collection>;

    /// Resolve a path to a material handle.
    ///
    /// None when the path does not refer to a live material node, which
    /// makes dangling binding targets a data outcome rather than an error.
    fn material_at(&self, path: &NodePath) -> Option<Material>;

    /// Parent id (convenience).
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.header(id).and_then(|h| h.parent)
    }

    /// Full path (convenience).
    fn path(&self, id: NodeId) -> Option<&NodePath> {
        self.header(id).map(|h| &h.path)
    }
}
