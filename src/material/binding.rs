//! Binding types: purposes, strengths, and material assignments.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::util::{Error, NodePath, Result};

use super::{ALL_PURPOSE_TOKEN, FULL_PURPOSE_TOKEN, PREVIEW_PURPOSE_TOKEN};

/// Rendering-context filter for material bindings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Purpose {
    /// Final-quality rendering.
    Full,
    /// Interactive/preview rendering.
    Preview,
    /// Applies in every context; always consulted as a fallback.
    #[default]
    AllPurpose,
}

impl Purpose {
    /// Parse a purpose token.
    ///
    /// Accepts `"full"`, `"preview"`, `""`, and the `"allPurpose"` alias.
    /// This is the validation boundary for free-form purpose strings.
    pub fn parse(token: &str) -> Result<Self> {
        match token {
            FULL_PURPOSE_TOKEN => Ok(Self::Full),
            PREVIEW_PURPOSE_TOKEN => Ok(Self::Preview),
            ALL_PURPOSE_TOKEN | "allPurpose" => Ok(Self::AllPurpose),
            other => Err(Error::invalid_purpose(other)),
        }
    }

    /// Token spelling.
    pub fn token(self) -> &'static str {
        match self {
            Self::Full => FULL_PURPOSE_TOKEN,
            Self::Preview => PREVIEW_PURPOSE_TOKEN,
            Self::AllPurpose => ALL_PURPOSE_TOKEN,
        }
    }

    /// The purpose lanes checked during resolution: this purpose first,
    /// then the all-purpose fallback. A single lane when they coincide.
    pub fn resolution_lanes(self) -> SmallVec<[Purpose; 2]> {
        let mut lanes = SmallVec::new();
        lanes.push(self);
        if self != Self::AllPurpose {
            lanes.push(Self::AllPurpose);
        }
        lanes
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllPurpose => f.write_str("allPurpose"),
            other => f.write_str(other.token()),
        }
    }
}

impl FromStr for Purpose {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Whether a binding overrides bindings found closer to the queried node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum BindingStrength {
    /// Nearest wins; the normal rule.
    #[default]
    WeakerThanDescendants,
    /// Overrides conflicting bindings found closer to the queried node.
    StrongerThanDescendants,
}

impl BindingStrength {
    /// Token spelling.
    pub fn token(self) -> &'static str {
        match self {
            Self::WeakerThanDescendants => "weakerThanDescendants",
            Self::StrongerThanDescendants => "strongerThanDescendants",
        }
    }

    /// Check for the overriding strength.
    pub fn is_stronger(self) -> bool {
        self == Self::StrongerThanDescendants
    }
}

impl fmt::Display for BindingStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Discriminates the two binding kinds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BindingKind {
    /// Binding naming a single target material on one node.
    Direct,
    /// Binding applying to every member of a named collection.
    Collection,
}

/// A direct material assignment declared on one node.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectBinding {
    /// Purpose this binding applies to.
    pub purpose: Purpose,
    /// Override strength.
    pub strength: BindingStrength,
    /// Path of the target material node.
    pub target: NodePath,
}

impl DirectBinding {
    /// Create a direct binding.
    pub fn new(purpose: Purpose, strength: BindingStrength, target: impl Into<NodePath>) -> Self {
        Self {
            purpose,
            strength,
            target: target.into(),
        }
    }

    /// Binding kind.
    pub fn kind(&self) -> BindingKind {
        BindingKind::Direct
    }
}

/// A material assignment covering every member of a named collection.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionBinding {
    /// Purpose this binding applies to.
    pub purpose: Purpose,
    /// Override strength.
    pub strength: BindingStrength,
    /// Name of the collection whose members this binding covers.
    pub collection: String,
    /// Path of the target material node.
    pub target: NodePath,
}

impl CollectionBinding {
    /// Create a collection binding.
    pub fn new(
        purpose: Purpose,
        strength: BindingStrength,
        collection: &str,
        target: impl Into<NodePath>,
    ) -> Self {
        Self {
            purpose,
            strength,
            collection: collection.to_string(),
            target: target.into(),
        }
    }

    /// Binding kind.
    pub fn kind(&self) -> BindingKind {
        BindingKind::Collection
    }
}

/// Opaque handle to a resolved material.
///
/// Identity is the material node's path; the resolver never inspects the
/// material's contents.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Material {
    path: NodePath,
}

impl Material {
    pub(crate) fn new(path: NodePath) -> Self {
        Self { path }
    }

    /// Path of the material node.
    pub fn path(&self) -> &NodePath {
        &self.path
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path, f)
    }
}
