//! Collection membership queries.

use crate::util::NodePath;

/// How listed paths expand to members.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Expansion {
    /// Only the listed paths themselves are members.
    ExplicitOnly,
    /// Listed paths and all of their descendants are members.
    #[default]
    ExpandPrims,
}

/// A named set-membership predicate over node paths.
///
/// Membership is decided by the include list, the exclude list, and the
/// expansion rule. Excludes win over includes at any depth.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    name: String,
    includes: Vec<NodePath>,
    excludes: Vec<NodePath>,
    expansion: Expansion,
}

impl Collection {
    /// Create an empty collection with the default expansion rule.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Create an empty collection with an explicit expansion rule.
    pub fn with_expansion(name: &str, expansion: Expansion) -> Self {
        Self {
            name: name.to_string(),
            expansion,
            ..Self::default()
        }
    }

    /// Collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Expansion rule.
    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    /// Add a path to the include list.
    pub fn include(&mut self, path: impl Into<NodePath>) {
        self.includes.push(path.into());
    }

    /// Add a path to the exclude list.
    pub fn exclude(&mut self, path: impl Into<NodePath>) {
        self.excludes.push(path.into());
    }

    /// Number of included paths.
    pub fn len(&self) -> usize {
        self.includes.len()
    }

    /// Check if nothing is included.
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty()
    }

    /// Iterate over included paths.
    pub fn iter(&self) -> impl Iterator<Item = &NodePath> {
        self.includes.iter()
    }

    /// Check if a path is a member of this collection.
    pub fn is_path_included(&self, path: &NodePath) -> bool {
        self.covered_by(&self.includes, path) && !self.covered_by(&self.excludes, path)
    }

    fn covered_by(&self, list: &[NodePath], path: &NodePath) -> bool {
        match self.expansion {
            Expansion::ExplicitOnly => list.iter().any(|p| p == path),
            Expansion::ExpandPrims => list.iter().any(|p| p.includes(path)),
        }
    }
}
