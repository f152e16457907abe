//! Semantic model supplied by the host.
//!
//! A [`Compilation`] is a read-only snapshot of the declarations the host
//! found in one compilation unit: symbols, local declaration statements and
//! call sites, each already bound to type identities. The core never parses
//! source text; it only inspects this model.

use crate::types::Location;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a compilation model.
#[derive(Debug, Error, miette::Diagnostic)]
pub enum ModelError {
    /// IO error reading a model file.
    #[error("Failed to read compilation model {path}: {source}")]
    #[diagnostic(code(naming_lint::model::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The model is not valid JSON or does not match the schema.
    #[error("Failed to parse compilation model: {message}")]
    #[diagnostic(
        code(naming_lint::model::parse),
        help("the host must emit the JSON layout of `naming_lint_core::Compilation`")
    )]
    Parse {
        /// Parse error message.
        message: String,
    },
}

/// Fully-qualified metadata name of a type (e.g. ``System.Collections.Generic.ISet`1``).
///
/// Two types are the same type exactly when their metadata names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(String);

impl TypeId {
    /// Creates a type identity from a metadata name.
    #[must_use]
    pub fn new(metadata_name: impl Into<String>) -> Self {
        Self(metadata_name.into())
    }

    /// Returns the metadata name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A (possibly constructed) type as it appears on a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// The unparameterized original definition.
    pub definition: TypeId,
    /// Type arguments of a constructed generic type.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<TypeRef>,
    /// Original definitions of every interface the type implements, transitively.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeId>,
}

impl TypeRef {
    /// Creates a non-generic type reference with no interfaces.
    #[must_use]
    pub fn named(definition: impl Into<String>) -> Self {
        Self {
            definition: TypeId::new(definition),
            type_arguments: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    /// Adds type arguments.
    #[must_use]
    pub fn with_type_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
        self.type_arguments = arguments;
        self
    }

    /// Adds implemented interfaces.
    #[must_use]
    pub fn with_interfaces<I, S>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces
            .extend(interfaces.into_iter().map(TypeId::new));
        self
    }
}

/// A declared field, property or parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSymbol {
    /// Declared name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Location of the identifier.
    pub location: Location,
}

/// The role a method plays in its containing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    /// A regular user-declared method.
    #[default]
    Ordinary,
    /// Instance or static constructor.
    Constructor,
    /// Property or indexer accessor.
    PropertyAccessor,
    /// Event add/remove accessor.
    EventAccessor,
    /// User-defined operator or conversion.
    Operator,
    /// Explicit interface implementation.
    ExplicitInterfaceImplementation,
    /// Local function declared inside another member.
    LocalFunction,
    /// Lambda or anonymous function.
    Lambda,
}

/// A declared method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSymbol {
    /// Declared name.
    pub name: String,
    /// Declared return type.
    pub return_type: TypeRef,
    /// Method role.
    #[serde(default)]
    pub method_kind: MethodKind,
    /// Whether the method overrides a base member.
    #[serde(default)]
    pub is_override: bool,
    /// Attribute classes applied to the method.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<TypeId>,
    /// Location of the identifier.
    pub location: Location,
}

/// A symbol declaration event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Symbol {
    /// Field declaration.
    Field(ValueSymbol),
    /// Property declaration.
    Property(ValueSymbol),
    /// Parameter declaration.
    Parameter(ValueSymbol),
    /// Method declaration.
    Method(MethodSymbol),
}

impl Symbol {
    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(v) | Self::Property(v) | Self::Parameter(v) => &v.name,
            Self::Method(m) => &m.name,
        }
    }

    /// Returns the declaration location.
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::Field(v) | Self::Property(v) | Self::Parameter(v) => &v.location,
            Self::Method(m) => &m.location,
        }
    }

    /// Returns the event category used for rule registration.
    #[must_use]
    pub fn event_kind(&self) -> EventKind {
        match self {
            Self::Field(_) => EventKind::Field,
            Self::Property(_) => EventKind::Property,
            Self::Parameter(_) => EventKind::Parameter,
            Self::Method(_) => EventKind::Method,
        }
    }
}

/// Event categories a rule session can register interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Field symbols.
    Field,
    /// Property symbols.
    Property,
    /// Parameter symbols.
    Parameter,
    /// Method symbols.
    Method,
    /// Local variable declaration statements.
    LocalDeclarations,
    /// Object creations and invocations.
    CallSite,
}

/// One variable introduced by a local declaration statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDeclarator {
    /// Declared name.
    pub name: String,
    /// Declared (or inferred) type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Location of the identifier.
    pub location: Location,
}

/// A local declaration statement, possibly declaring several variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalDeclarationGroup {
    /// Declarators in source order.
    pub declarators: Vec<LocalDeclarator>,
}

/// What a call site does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallKind {
    /// `new T(...)`.
    ObjectCreation {
        /// The created type.
        #[serde(rename = "type")]
        ty: TypeRef,
    },
    /// `Type.Method(...)`.
    Invocation {
        /// Type declaring the invoked method.
        containing_type: TypeId,
        /// Invoked method name.
        method: String,
    },
}

/// Whether a declarator introduces a local variable or a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaratorKind {
    /// Local variable inside a member body.
    Local,
    /// Field of a type.
    Field,
}

/// Syntax enclosing a call expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ancestor {
    /// `= <expr>` initializer clause.
    EqualsValueClause,
    /// The declarator an initializer belongs to.
    VariableDeclarator {
        /// Declared name.
        name: String,
        /// Local or field declarator.
        declarator: DeclaratorKind,
        /// Location of the identifier.
        location: Location,
    },
    /// Argument of another call.
    Argument,
    /// Right-hand side of an assignment.
    Assignment,
    /// Expression statement whose value is discarded.
    ExpressionStatement,
    /// Receiver of a member access (e.g. `.Object`).
    MemberAccess,
    /// Any other syntax.
    Other,
}

/// The member whose body contains a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    /// A method, constructor or accessor body.
    #[default]
    Method,
    /// Field initializers and other non-method code blocks.
    Other,
}

/// An object creation or invocation found in a code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// What is called.
    pub call: CallKind,
    /// Kind of member that owns the code block.
    #[serde(default)]
    pub owner: OwnerKind,
    /// Enclosing syntax, nearest first.
    #[serde(default)]
    pub ancestors: Vec<Ancestor>,
    /// Location of the call expression.
    pub location: Location,
}

/// One syntax tree of a compilation together with its configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxTree {
    /// File path of the tree.
    pub path: PathBuf,
    /// Whether the tree is generated code.
    #[serde(default)]
    pub generated: bool,
    /// Key/value options applicable to this tree.
    #[serde(default)]
    pub options: HashMap<String, String>,
}

/// Semantic snapshot of one compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compilation {
    /// Assembly name.
    #[serde(default)]
    pub assembly: String,
    /// Syntax trees; the first is the primary tree used for configuration.
    #[serde(default)]
    pub syntax_trees: Vec<SyntaxTree>,
    /// Every type identity visible to the compilation.
    #[serde(default)]
    pub types: HashSet<TypeId>,
    /// Field, property, parameter and method declarations.
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    /// Local declaration statements.
    #[serde(default)]
    pub local_declarations: Vec<LocalDeclarationGroup>,
    /// Object creations and invocations inside code blocks.
    #[serde(default)]
    pub call_sites: Vec<CallSite>,
}

impl Compilation {
    /// Creates an empty compilation.
    #[must_use]
    pub fn new(assembly: impl Into<String>) -> Self {
        Self {
            assembly: assembly.into(),
            ..Self::default()
        }
    }

    /// Loads a compilation model from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parses a compilation model from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(content: &str) -> Result<Self, ModelError> {
        serde_json::from_str(content).map_err(|e| ModelError::Parse {
            message: e.to_string(),
        })
    }

    /// Looks up a type by metadata name in this compilation's type universe.
    #[must_use]
    pub fn resolve_type(&self, metadata_name: &str) -> Option<&TypeId> {
        self.types.get(&TypeId::new(metadata_name))
    }

    /// Returns the primary syntax tree, whose options configure the rules.
    #[must_use]
    pub fn primary_tree(&self) -> Option<&SyntaxTree> {
        self.syntax_trees.first()
    }

    /// Finds the syntax tree for a file path.
    #[must_use]
    pub fn tree(&self, path: &Path) -> Option<&SyntaxTree> {
        self.syntax_trees.iter().find(|t| t.path == path)
    }

    /// Adds types to the type universe.
    #[must_use]
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.extend(types.into_iter().map(TypeId::new));
        self
    }

    /// Adds a syntax tree.
    #[must_use]
    pub fn with_tree(mut self, tree: SyntaxTree) -> Self {
        self.syntax_trees.push(tree);
        self
    }
}
