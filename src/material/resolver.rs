//! Material binding resolution.
//!
//! Walks a node's ancestor chain to find the strongest applicable material
//! assignment, considering both direct and collection bindings and honoring
//! per-binding strength overrides.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{NodeId, SceneReader};
use crate::scene::{Node, Scene};
use crate::util::{Error, NodePath, Result};

use super::cache::{CollectionLevelCache, CollectionLevelKey};
use super::{BindingKind, BindingStrength, Material, Purpose};

/// Where a resolved material came from.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedBinding {
    /// The resolved material.
    pub material: Material,
    /// Path of the node that declared the winning binding.
    pub source: NodePath,
    /// Binding kind that won.
    pub kind: BindingKind,
    /// Collection name, for collection bindings.
    pub collection: Option<String>,
    /// Declared strength of the winning binding.
    pub strength: BindingStrength,
    /// Purpose lane the binding matched in.
    pub purpose: Purpose,
}

/// Resolves bound materials over a scene.
///
/// The resolver is a pure read-side query engine: it never mutates the
/// scene, and its only internal state is a memo table for collection
/// binding levels, so one resolver can serve concurrent lookups against
/// the borrowed scene.
///
/// Nodes passed to the resolve methods must belong to the scene the
/// resolver was constructed over.
pub struct MaterialResolver<'a> {
    scene: &'a Scene,
    levels: CollectionLevelCache,
}

impl<'a> MaterialResolver<'a> {
    /// Create a resolver over a scene.
    pub fn new(scene: &'a Scene) -> Self {
        Self {
            scene,
            levels: CollectionLevelCache::new(),
        }
    }

    /// Find the strongest material bound to a node for a purpose.
    ///
    /// The requested purpose is checked first, then the all-purpose lane;
    /// the first lane that yields a material wins. Within a lane the
    /// node's ancestor chain is walked from the node upward, stopping
    /// before the pseudo-root. `Ok(None)` means no binding applies.
    ///
    /// Fails with [`Error::InvalidNode`] if the node is not alive.
    pub fn resolve_bound_material(
        &self,
        node: &Node<'_>,
        purpose: Purpose,
    ) -> Result<Option<Material>> {
        Ok(self.resolve(node, purpose, None)?.map(|r| r.material))
    }

    /// Like [`resolve_bound_material`](Self::resolve_bound_material), but
    /// only collection bindings whose collection has the given name are
    /// considered. Direct bindings are unaffected by the filter.
    pub fn resolve_bound_material_in_collection(
        &self,
        node: &Node<'_>,
        purpose: Purpose,
        collection: &str,
    ) -> Result<Option<Material>> {
        Ok(self.resolve(node, purpose, Some(collection))?.map(|r| r.material))
    }

    /// Resolve and report where the material came from: the declaring
    /// node, the binding kind, the collection name if any, the declared
    /// strength, and the purpose lane that matched.
    pub fn resolve_bound_material_info(
        &self,
        node: &Node<'_>,
        purpose: Purpose,
    ) -> Result<Option<ResolvedBinding>> {
        self.resolve(node, purpose, None)
    }

    /// Drop all memoized collection-binding levels.
    pub fn clear_cache(&self) {
        self.levels.clear();
    }

    /// Number of memoized collection-binding levels.
    pub fn cached_levels(&self) -> usize {
        self.levels.len()
    }

    fn resolve(
        &self,
        node: &Node<'_>,
        purpose: Purpose,
        collection_filter: Option<&str>,
    ) -> Result<Option<ResolvedBinding>> {
        let reader = self.scene.reader();
        let start = node.id();

        if !reader.is_alive(start) {
            let label = reader
                .header(start)
                .map(|h| h.path.to_string())
                .unwrap_or_else(|| start.to_string());
            return Err(Error::invalid_node(label));
        }

        let root = reader.root();

        for lane in purpose.resolution_lanes() {
            let mut held: Option<ResolvedBinding> = None;
            let mut current = start;

            while current != root {
                let Some(current_path) = reader.path(current) else {
                    break;
                };

                // Direct binding check. The strength consulted is that of
                // the binding declared at the currently visited node, so a
                // stronger binding with an unresolvable target clears a
                // previously held result.
                let direct = reader.direct_binding(current, lane);
                if held.is_none() || direct.is_some_and(|b| b.strength.is_stronger()) {
                    let had = held.is_some();
                    held = direct.and_then(|b| {
                        reader.material_at(&b.target).map(|material| ResolvedBinding {
                            material,
                            source: current_path.clone(),
                            kind: BindingKind::Direct,
                            collection: None,
                            strength: b.strength,
                            purpose: lane,
                        })
                    });
                    match &held {
                        Some(r) => trace!(
                            node = %r.source,
                            material = %r.material,
                            "adopted direct binding"
                        ),
                        None if had => trace!(
                            node = %current_path,
                            "direct binding with unresolvable target cleared held result"
                        ),
                        None => {}
                    }
                }

                // Collection binding check. The first ancestor-or-self
                // level declaring any collection bindings for this lane
                // supplies all candidates; levels are never merged.
                // Membership is tested against the walk's current path.
                if let Some(level) = self.nearest_collection_level(reader, current, lane) {
                    for binding in reader.collection_bindings(level) {
                        if binding.purpose != lane {
                            continue;
                        }
                        if collection_filter.is_some_and(|name| name != binding.collection) {
                            continue;
                        }
                        let Some(collection) = reader.collection(&binding.collection) else {
                            continue;
                        };
                        if !collection.is_path_included(current_path) {
                            continue;
                        }
                        if held.is_none() || binding.strength.is_stronger() {
                            held = reader.material_at(&binding.target).map(|material| {
                                ResolvedBinding {
                                    material,
                                    source: reader
                                        .path(level)
                                        .cloned()
                                        .unwrap_or_else(NodePath::root),
                                    kind: BindingKind::Collection,
                                    collection: Some(binding.collection.clone()),
                                    strength: binding.strength,
                                    purpose: lane,
                                }
                            });
                            if let Some(r) = &held {
                                trace!(
                                    node = %r.source,
                                    collection = binding.collection.as_str(),
                                    material = %r.material,
                                    "adopted collection binding"
                                );
                            }
                        }
                    }
                }

                let Some(parent) = reader.parent(current) else {
                    break;
                };
                current = parent;
            }

            if held.is_some() {
                return Ok(held);
            }
        }

        Ok(None)
    }

    /// Nearest ancestor-or-self level with collection bindings for a
    /// purpose, memoized. Every node visited on the way up shares the
    /// answer, so repeated outer-walk positions resolve in one lookup.
    fn nearest_collection_level(
        &self,
        reader: &dyn SceneReader,
        from: NodeId,
        purpose: Purpose,
    ) -> Option<NodeId> {
        if let Some(cached) = self.levels.get(&CollectionLevelKey::new(from, purpose)) {
            return cached;
        }

        let root = reader.root();
        let mut visited: SmallVec<[NodeId; 8]> = SmallVec::new();
        let mut level = None;
        let mut current = Some(from);

        while let Some(id) = current {
            if id == root {
                break;
            }
            if let Some(cached) = self.levels.get(&CollectionLevelKey::new(id, purpose)) {
                level = cached;
                break;
            }
            visited.push(id);
            if reader
                .collection_bindings(id)
                .iter()
                .any(|b| b.purpose == purpose)
            {
                level = Some(id);
                break;
            }
            current = reader.parent(id);
        }

        for id in visited {
            self.levels.insert(CollectionLevelKey::new(id, purpose), level);
        }
        level
    }
}
