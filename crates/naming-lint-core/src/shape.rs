//! Structural classification of declared types.
//!
//! A rule names the kind of type it cares about by metadata name. At the
//! start of a compilation those names are looked up in the compilation's
//! type universe; the names that resolve form a [`ResolvedShape`]. Matching
//! then compares type identities only, never short names.

use crate::model::{Compilation, TypeId, TypeRef};

/// How a declared type relates to a shape's target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// The declared type's original definition is the target type.
    Exact,
    /// The declared type is the target type or implements it.
    Implements,
}

/// A shape target as written in a rule definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeSpec {
    /// Relation to the target.
    pub kind: ShapeKind,
    /// Metadata name of the target type.
    pub metadata_name: &'static str,
}

impl ShapeSpec {
    /// Matches types whose definition is `metadata_name`.
    #[must_use]
    pub const fn exact(metadata_name: &'static str) -> Self {
        Self {
            kind: ShapeKind::Exact,
            metadata_name,
        }
    }

    /// Matches types that are or implement `metadata_name`.
    #[must_use]
    pub const fn implements(metadata_name: &'static str) -> Self {
        Self {
            kind: ShapeKind::Implements,
            metadata_name,
        }
    }

    fn resolve(&self, compilation: &Compilation) -> Option<TargetShape> {
        let id = compilation.resolve_type(self.metadata_name)?.clone();
        Some(match self.kind {
            ShapeKind::Exact => TargetShape::ExactType(id),
            ShapeKind::Implements => TargetShape::ImplementsInterface(id),
        })
    }
}

/// A shape target bound to a type identity of one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetShape {
    /// Unparameterized definition equals the type.
    ExactType(TypeId),
    /// Exact match, or the type appears in the full interface set.
    ImplementsInterface(TypeId),
}

/// Returns whether `declared` has the given shape.
#[must_use]
pub fn matches(declared: &TypeRef, shape: &TargetShape) -> bool {
    match shape {
        TargetShape::ExactType(id) => declared.definition == *id,
        TargetShape::ImplementsInterface(id) => {
            declared.definition == *id || declared.interfaces.iter().any(|i| i == id)
        }
    }
}

/// The targets of a shape that exist in one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedShape {
    targets: Vec<TargetShape>,
}

impl ResolvedShape {
    /// Resolves `specs` against `compilation`.
    ///
    /// Returns `None` when none of the target types is present, which
    /// leaves the owning rule inactive for that compilation.
    #[must_use]
    pub fn resolve(specs: &[ShapeSpec], compilation: &Compilation) -> Option<Self> {
        let targets: Vec<TargetShape> = specs
            .iter()
            .filter_map(|spec| spec.resolve(compilation))
            .collect();

        if targets.is_empty() {
            None
        } else {
            Some(Self { targets })
        }
    }

    /// Returns the resolved targets.
    #[must_use]
    pub fn targets(&self) -> &[TargetShape] {
        &self.targets
    }

    /// Returns whether `declared` matches any resolved target.
    #[must_use]
    pub fn matches(&self, declared: &TypeRef) -> bool {
        self.targets.iter().any(|target| matches(declared, target))
    }
}
