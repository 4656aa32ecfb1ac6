//! Scene graph arena implementation.

use std::collections::HashMap;

use smallvec::SmallVec;
use tracing::debug;

use crate::collection::Collection;
use crate::core::{NodeHeader, NodeId, NodeKind, SceneReader};
use crate::material::{
    BindingStrength, CollectionBinding, DirectBinding, Material, Purpose,
};
use crate::util::{Error, NodePath, Result};

struct NodeEntry {
    header: NodeHeader,
    children: Vec<NodeId>,
    direct: SmallVec<[DirectBinding; 2]>,
    collections: SmallVec<[CollectionBinding; 2]>,
    alive: bool,
}

impl NodeEntry {
    fn new(header: NodeHeader) -> Self {
        Self {
            header,
            children: Vec::new(),
            direct: SmallVec::new(),
            collections: SmallVec::new(),
            alive: true,
        }
    }
}

/// Mutable in-memory scene graph.
///
/// Nodes live in a flat arena; removal tombstones slots instead of reusing
/// them, so previously handed-out [`NodeId`]s stay stable and resolve as
/// dead. The pseudo-root exists from construction and cannot be removed.
pub struct SceneGraph {
    name: String,
    nodes: Vec<NodeEntry>,
    paths: HashMap<NodePath, NodeId>,
    collections: HashMap<String, Collection>,
}

impl SceneGraph {
    /// Create a graph containing only the pseudo-root.
    pub fn new(name: &str) -> Self {
        let root = NodeEntry::new(NodeHeader {
            name: String::new(),
            path: NodePath::root(),
            parent: None,
            kind: NodeKind::Group,
        });
        let mut paths = HashMap::new();
        paths.insert(NodePath::root(), NodeId(0));
        Self {
            name: name.to_string(),
            nodes: vec![root],
            paths,
            collections: HashMap::new(),
        }
    }

    /// Pseudo-root id.
    pub fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of live nodes, pseudo-root included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.iter().filter(|e| e.alive).count()
    }

    /// Add a grouping node under a parent.
    pub fn add_group(&mut self, parent: NodeId, name: &str) -> Result<NodeId> {
        self.add_node(parent, name, NodeKind::Group)
    }

    /// Add a material definition node under a parent.
    pub fn add_material(&mut self, parent: NodeId, name: &str) -> Result<NodeId> {
        self.add_node(parent, name, NodeKind::Material)
    }

    fn add_node(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> Result<NodeId> {
        if name.is_empty() || name.contains(NodePath::SEPARATOR) {
            return Err(Error::InvalidName(name.to_string()));
        }
        let path = self.live_entry(parent)?.header.path.join(name);
        if self.paths.contains_key(&path) {
            return Err(Error::DuplicateObject(path.to_string()));
        }

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeEntry::new(NodeHeader {
            name: name.to_string(),
            path: path.clone(),
            parent: Some(parent),
            kind,
        }));
        self.nodes[parent.index()].children.push(id);
        self.paths.insert(path, id);
        Ok(id)
    }

    /// Declare the direct binding on a node for a purpose.
    ///
    /// At most one direct binding per node and purpose; re-binding
    /// replaces. The target path is not validated here; an unresolvable
    /// target reads as "no material" at query time.
    pub fn bind_direct(
        &mut self,
        node: NodeId,
        purpose: Purpose,
        strength: BindingStrength,
        target: &str,
    ) -> Result<()> {
        let binding = DirectBinding::new(purpose, strength, target);
        let entry = self.live_entry_mut(node)?;
        if let Some(existing) = entry.direct.iter_mut().find(|b| b.purpose == purpose) {
            *existing = binding;
        } else {
            entry.direct.push(binding);
        }
        Ok(())
    }

    /// Append a collection binding on a node.
    ///
    /// Declaration order is preserved and observable during resolution.
    /// Neither the collection name nor the target path is validated here.
    pub fn bind_collection(
        &mut self,
        node: NodeId,
        purpose: Purpose,
        strength: BindingStrength,
        collection: &str,
        target: &str,
    ) -> Result<()> {
        let binding = CollectionBinding::new(purpose, strength, collection, target);
        self.live_entry_mut(node)?.collections.push(binding);
        Ok(())
    }

    /// Register a collection, replacing any existing one with the same name.
    pub fn define_collection(&mut self, collection: Collection) {
        self.collections.insert(collection.name().to_string(), collection);
    }

    /// Remove a node and all of its descendants.
    ///
    /// Slots are tombstoned, so stale ids resolve as dead instead of
    /// aliasing new nodes. The pseudo-root cannot be removed.
    pub fn remove_subtree(&mut self, node: NodeId) -> Result<()> {
        if node == self.root_id() {
            return Err(Error::PseudoRoot);
        }
        let parent = self.live_entry(node)?.header.parent;

        if let Some(parent) = parent {
            self.nodes[parent.index()].children.retain(|&c| c != node);
        }

        let mut stack: Vec<NodeId> = vec![node];
        let mut removed = 0usize;
        while let Some(id) = stack.pop() {
            let entry = &mut self.nodes[id.index()];
            if !entry.alive {
                continue;
            }
            entry.alive = false;
            self.paths.remove(&entry.header.path);
            stack.extend(entry.children.iter().copied());
            removed += 1;
        }
        debug!(root = %self.nodes[node.index()].header.path, removed, "removed subtree");
        Ok(())
    }

    fn entry(&self, id: NodeId) -> Option<&NodeEntry> {
        self.nodes.get(id.index())
    }

    fn live_entry(&self, id: NodeId) -> Result<&NodeEntry> {
        match self.entry(id) {
            Some(e) if e.alive => Ok(e),
            Some(e) => Err(Error::invalid_node(e.header.path.as_str())),
            None => Err(Error::invalid_node(id.to_string())),
        }
    }

    fn live_entry_mut(&mut self, id: NodeId) -> Result<&mut NodeEntry> {
        match self.nodes.get_mut(id.index()) {
            Some(e) if e.alive => Ok(e),
            Some(e) => Err(Error::invalid_node(e.header.path.as_str())),
            None => Err(Error::invalid_node(id.to_string())),
        }
    }
}

impl SceneReader for SceneGraph {
    fn name(&self) -> &str {
        &self.name
    }

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn is_alive(&self, id: NodeId) -> bool {
        self.entry(id).is_some_and(|e| e.alive)
    }

    fn header(&self, id: NodeId) -> Option<&NodeHeader> {
        self.entry(id).map(|e| &e.header)
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        match self.entry(id) {
            Some(e) if e.alive => &e.children,
            _ => &[],
        }
    }

    fn find(&self, path: &str) -> Option<NodeId> {
        self.paths.get(&NodePath::new(path)).copied()
    }

    fn direct_binding(&self, id: NodeId, purpose: Purpose) -> Option<&DirectBinding> {
        self.entry(id)
            .filter(|e| e.alive)
            .and_then(|e| e.direct.iter().find(|b| b.purpose == purpose))
    }

    fn collection_bindings(&self, id: NodeId) -> &[CollectionBinding] {
        match self.entry(id) {
            Some(e) if e.alive => &e.collections,
            _ => &[],
        }
    }

    fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.get(name)
    }

    fn material_at(&self, path: &NodePath) -> Option<Material> {
        let id = self.paths.get(path)?;
        let entry = self.entry(*id)?;
        (entry.alive && entry.header.kind == NodeKind::Material)
            .then(|| Material::new(entry.header.path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_find() {
        let mut g = SceneGraph::new("test");
        let root = g.root_id();
        let set = g.add_group(root, "Set").expect("add Set");
        let grp = g.add_group(set, "Grp").expect("add Grp");

        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.find("/Set/Grp"), Some(grp));
        assert_eq!(g.find("Set/Grp"), Some(grp), "paths normalize on lookup");
        assert_eq!(g.find("/Set/Missing"), None);
        assert_eq!(g.parent(grp), Some(set));
        assert_eq!(g.children(set), &[grp]);
    }

    #[test]
    fn test_name_validation() {
        let mut g = SceneGraph::new("test");
        let root = g.root_id();

        let err = g.add_group(root, "").expect_err("empty name");
        assert!(matches!(err, Error::InvalidName(_)));

        let err = g.add_group(root, "a/b").expect_err("separator in name");
        assert!(matches!(err, Error::InvalidName(_)));
    }

    #[test]
    fn test_duplicate_paths_rejected() {
        let mut g = SceneGraph::new("test");
        let root = g.root_id();
        g.add_group(root, "Set").expect("add Set");

        let err = g.add_group(root, "Set").expect_err("duplicate");
        assert!(matches!(err, Error::DuplicateObject(p) if p == "/Set"));
    }

    #[test]
    fn test_direct_binding_replaces_per_purpose() {
        let mut g = SceneGraph::new("test");
        let root = g.root_id();
        let set = g.add_group(root, "Set").expect("add Set");

        g.bind_direct(set, Purpose::Full, BindingStrength::default(), "/Materials/A")
            .expect("bind A");
        g.bind_direct(set, Purpose::Full, BindingStrength::default(), "/Materials/B")
            .expect("rebind B");
        g.bind_direct(set, Purpose::Preview, BindingStrength::default(), "/Materials/C")
            .expect("bind C");

        let full = g.direct_binding(set, Purpose::Full).expect("full binding");
        assert_eq!(full.target.as_str(), "/Materials/B");
        let preview = g.direct_binding(set, Purpose::Preview).expect("preview binding");
        assert_eq!(preview.target.as_str(), "/Materials/C");
        assert!(g.direct_binding(set, Purpose::AllPurpose).is_none());
    }

    #[test]
    fn test_remove_subtree_tombstones() {
        let mut g = SceneGraph::new("test");
        let root = g.root_id();
        let set = g.add_group(root, "Set").expect("add Set");
        let grp = g.add_group(set, "Grp").expect("add Grp");
        let leaf = g.add_group(grp, "Leaf").expect("add Leaf");

        g.remove_subtree(grp).expect("remove Grp");

        assert!(!g.is_alive(grp));
        assert!(!g.is_alive(leaf));
        assert!(g.is_alive(set));
        assert_eq!(g.find("/Set/Grp"), None);
        assert_eq!(g.find("/Set/Grp/Leaf"), None);
        assert_eq!(g.children(set), &[] as &[NodeId]);
        assert_eq!(g.num_nodes(), 2);

        // Stale headers remain readable for diagnostics.
        let header = g.header(leaf).expect("header survives removal");
        assert_eq!(header.path.as_str(), "/Set/Grp/Leaf");

        let err = g.add_group(grp, "Child").expect_err("dead parent");
        assert!(matches!(err, Error::InvalidNode(_)));

        let err = g.remove_subtree(g.root_id()).expect_err("root not removable");
        assert!(matches!(err, Error::PseudoRoot));
    }

    #[test]
    fn test_material_lookup_requires_live_material_node() {
        let mut g = SceneGraph::new("test");
        let root = g.root_id();
        let mats = g.add_group(root, "Materials").expect("add Materials");
        let default = g.add_material(mats, "Default").expect("add Default");

        let found = g
            .material_at(&NodePath::new("/Materials/Default"))
            .expect("material resolves");
        assert_eq!(found.path().as_str(), "/Materials/Default");

        // Group nodes and missing paths are not materials.
        assert!(g.material_at(&NodePath::new("/Materials")).is_none());
        assert!(g.material_at(&NodePath::new("/Materials/Missing")).is_none());

        g.remove_subtree(default).expect("remove material");
        assert!(g.material_at(&NodePath::new("/Materials/Default")).is_none());
    }
}
