//! Builders for small compilations used by the rule tests.

use naming_lint_core::model::{
    LocalDeclarationGroup, LocalDeclarator, MethodKind, MethodSymbol, SyntaxTree, Symbol,
    ValueSymbol,
};
use naming_lint_core::{Analyzer, Compilation, Location, Rule, TypeId, TypeRef, Violation};
use std::path::PathBuf;

pub(crate) const FILE: &str = "src/Example.cs";

pub(crate) fn location(line: usize) -> Location {
    Location::new(FILE, line, 9)
}

pub(crate) fn compilation(types: &[&str]) -> Compilation {
    Compilation::new("Sample")
        .with_types(types.iter().copied())
        .with_tree(SyntaxTree {
            path: PathBuf::from(FILE),
            ..SyntaxTree::default()
        })
}

pub(crate) fn with_option(mut compilation: Compilation, key: &str, value: &str) -> Compilation {
    if let Some(tree) = compilation.syntax_trees.first_mut() {
        tree.options.insert(key.to_string(), value.to_string());
    }
    compilation
}

pub(crate) fn field(name: &str, ty: TypeRef) -> Symbol {
    Symbol::Field(ValueSymbol {
        name: name.to_string(),
        ty,
        location: location(1),
    })
}

pub(crate) fn property(name: &str, ty: TypeRef) -> Symbol {
    Symbol::Property(ValueSymbol {
        name: name.to_string(),
        ty,
        location: location(2),
    })
}

pub(crate) fn parameter(name: &str, ty: TypeRef) -> Symbol {
    Symbol::Parameter(ValueSymbol {
        name: name.to_string(),
        ty,
        location: location(3),
    })
}

pub(crate) fn method(name: &str, return_type: TypeRef) -> MethodSymbol {
    MethodSymbol {
        name: name.to_string(),
        return_type,
        method_kind: MethodKind::Ordinary,
        is_override: false,
        attributes: Vec::new(),
        location: location(4),
    }
}

pub(crate) fn with_attribute(mut method: MethodSymbol, attribute: &str) -> MethodSymbol {
    method.attributes.push(TypeId::new(attribute));
    method
}

pub(crate) fn locals(declarators: &[(&str, TypeRef)]) -> LocalDeclarationGroup {
    LocalDeclarationGroup {
        declarators: declarators
            .iter()
            .enumerate()
            .map(|(i, (name, ty))| LocalDeclarator {
                name: (*name).to_string(),
                ty: ty.clone(),
                location: Location::new(FILE, 5, 13 + i * 8),
            })
            .collect(),
    }
}

pub(crate) fn run<R: Rule + 'static>(rule: R, compilation: &Compilation) -> Vec<Violation> {
    Analyzer::builder()
        .rule(rule)
        .build()
        .expect("analyzer should build")
        .analyze(compilation)
        .violations
}

pub(crate) fn targets(violations: &[Violation]) -> Vec<&str> {
    violations
        .iter()
        .filter_map(|v| v.target.as_deref())
        .collect()
}
