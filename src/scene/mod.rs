//! High-level scene access.
//!
//! This module provides the main entry points for querying a scene:
//! - [`Scene`] - Owns a scene-graph backend
//! - [`Node`] - Lightweight handle to one node in the hierarchy
//!
//! ## Example
//!
//! ```ignore
//! use shadebind::prelude::*;
//!
//! let scene = Scene::from(graph);
//! let cup = scene.find("/Office_set/Desk_Assembly/Cup_grp").unwrap();
//! println!("{} under {:?}", cup.name(), cup.parent().map(|p| p.path()));
//! ```

use crate::arena::SceneGraph;
use crate::core::{NodeHeader, NodeId, NodeKind, SceneReader};
use crate::material::{CollectionBinding, DirectBinding, Purpose};
use crate::util::NodePath;

/// A scene assembled by a backend, ready for querying.
pub struct Scene {
    reader: Box<dyn SceneReader>,
}

impl Scene {
    /// Wrap a backend reader.
    pub fn new(reader: Box<dyn SceneReader>) -> Self {
        Self { reader }
    }

    /// Scene name.
    pub fn name(&self) -> &str {
        self.reader.name()
    }

    /// Handle to the pseudo-root.
    pub fn root(&self) -> Node<'_> {
        Node::new(self.reader.as_ref(), self.reader.root())
    }

    /// Find a live node by full path.
    pub fn find(&self, path: &str) -> Option<Node<'_>> {
        self.reader
            .find(path)
            .map(|id| Node::new(self.reader.as_ref(), id))
    }

    /// Handle for an id previously obtained from this scene.
    ///
    /// The handle may be invalid if the node was removed; check
    /// [`Node::valid`].
    pub fn node(&self, id: NodeId) -> Node<'_> {
        Node::new(self.reader.as_ref(), id)
    }

    /// Backend reader access.
    pub fn reader(&self) -> &dyn SceneReader {
        self.reader.as_ref()
    }
}

impl From<SceneGraph> for Scene {
    fn from(graph: SceneGraph) -> Self {
        Self::new(Box::new(graph))
    }
}

/// Lightweight handle to one node in a scene.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    reader: &'a dyn SceneReader,
    id: NodeId,
}

impl<'a> Node<'a> {
    pub(crate) fn new(reader: &'a dyn SceneReader, id: NodeId) -> Self {
        Self { reader, id }
    }

    /// Backend id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Check whether this handle refers to a live node.
    pub fn valid(&self) -> bool {
        self.reader.is_alive(self.id)
    }

    /// Check if this is the pseudo-root.
    pub fn is_pseudo_root(&self) -> bool {
        self.id == self.reader.root()
    }

    /// Node name, empty for the pseudo-root.
    pub fn name(&self) -> &str {
        self.header().map_or("", |h| h.name.as_str())
    }

    /// Full path from the root.
    ///
    /// Removed nodes keep reporting their last path.
    pub fn path(&self) -> NodePath {
        self.header().map_or_else(NodePath::root, |h| h.path.clone())
    }

    /// Node kind.
    pub fn kind(&self) -> NodeKind {
        self.header().map_or(NodeKind::Group, |h| h.kind)
    }

    /// Check if this node is a material definition.
    pub fn is_material(&self) -> bool {
        self.kind() == NodeKind::Material
    }

    /// Parent handle, None for the pseudo-root.
    pub fn parent(&self) -> Option<Node<'a>> {
        self.header()
            .and_then(|h| h.parent)
            .map(|id| Node::new(self.reader, id))
    }

    /// Iterate over live children.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let reader = self.reader;
        reader
            .children(self.id)
            .iter()
            .map(move |&id| Node::new(reader, id))
    }

    /// Number of live children.
    pub fn num_children(&self) -> usize {
        self.reader.children(self.id).len()
    }

    /// Find a live child by name.
    pub fn child_by_name(&self, name: &str) -> Option<Node<'a>> {
        self.children().find(|c| c.name() == name)
    }

    /// Direct material binding declared on this node for a purpose.
    pub fn direct_binding(&self, purpose: Purpose) -> Option<&'a DirectBinding> {
        self.reader.direct_binding(self.id, purpose)
    }

    /// Collection bindings declared on this node, in declaration order.
    pub fn collection_bindings(&self) -> &'a [CollectionBinding] {
        self.reader.collection_bindings(self.id)
    }

    fn header(&self) -> Option<&'a NodeHeader> {
        self.reader.header(self.id)
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("path", &self.path())
            .field("valid", &self.valid())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::SceneGraph;

    fn office_scene() -> Scene {
        let mut g = SceneGraph::new("office_set");
        let root = g.root_id();
        let set = g.add_group(root, "Office_set").expect("add Office_set");
        let desk = g.add_group(set, "Desk_Assembly").expect("add Desk_Assembly");
        g.add_group(desk, "Cup_grp").expect("add Cup_grp");
        let mats = g.add_group(set, "Materials").expect("add Materials");
        g.add_material(mats, "Default").expect("add Default");
        Scene::from(g)
    }

    #[test]
    fn test_navigation() {
        let scene = office_scene();
        assert_eq!(scene.name(), "office_set");

        let root = scene.root();
        assert!(root.is_pseudo_root());
        assert!(root.valid());
        assert_eq!(root.name(), "");
        assert_eq!(root.path(), NodePath::root());
        assert!(root.parent().is_none());

        let cup = scene
            .find("/Office_set/Desk_Assembly/Cup_grp")
            .expect("find Cup_grp");
        assert_eq!(cup.name(), "Cup_grp");
        assert!(!cup.is_pseudo_root());

        let desk = cup.parent().expect("Cup_grp has a parent");
        assert_eq!(desk.path().as_str(), "/Office_set/Desk_Assembly");
        assert_eq!(desk.num_children(), 1);
        assert!(desk.child_by_name("Cup_grp").is_some());
        assert!(desk.child_by_name("Missing").is_none());

        let names: Vec<String> = scene
            .root()
            .children()
            .flat_map(|c| c.children())
            .map(|c| c.name().to_string())
            .collect();
        assert!(names.contains(&"Desk_Assembly".to_string()));
        assert!(names.contains(&"Materials".to_string()));
    }

    #[test]
    fn test_material_kind() {
        let scene = office_scene();
        let default = scene
            .find("/Office_set/Materials/Default")
            .expect("find Default");
        assert!(default.is_material());
        assert_eq!(default.kind(), NodeKind::Material);

        let desk = scene
            .find("/Office_set/Desk_Assembly")
            .expect("find Desk_Assembly");
        assert!(!desk.is_material());
    }
}
