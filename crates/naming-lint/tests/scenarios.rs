//! End-to-end checks: compilations run through the analyzer with every
//! built-in rule registered.

use naming_lint::model::{
    LocalDeclarationGroup, LocalDeclarator, MethodKind, MethodSymbol, SyntaxTree, ValueSymbol,
};
use naming_lint::{
    analyzer_with_all_rules, Analyzer, Compilation, Config, LintResult, Location, Severity,
    Symbol, TypeId, TypeRef,
};
use std::path::PathBuf;

const FILE: &str = "src/Widget.cs";
const BOOLEAN: &str = "System.Boolean";
const IDICTIONARY: &str = "System.Collections.Generic.IDictionary`2";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn compilation(types: &[&str], options: &[(&str, &str)]) -> Compilation {
    let tree = SyntaxTree {
        path: PathBuf::from(FILE),
        options: options
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
        ..SyntaxTree::default()
    };
    Compilation::new("Widgets")
        .with_types(types.iter().copied())
        .with_tree(tree)
}

fn field(name: &str, ty: TypeRef, line: usize) -> Symbol {
    Symbol::Field(ValueSymbol {
        name: name.to_string(),
        ty,
        location: Location::new(FILE, line, 18),
    })
}

fn test_method(name: &str, attribute: &str, line: usize) -> Symbol {
    Symbol::Method(MethodSymbol {
        name: name.to_string(),
        return_type: TypeRef::named("System.Void"),
        method_kind: MethodKind::Ordinary,
        is_override: false,
        attributes: vec![TypeId::new(attribute)],
        location: Location::new(FILE, line, 17),
    })
}

fn dictionary() -> TypeRef {
    TypeRef::named("System.Collections.Generic.Dictionary`2")
        .with_type_arguments(vec![
            TypeRef::named("System.Int32"),
            TypeRef::named("System.String"),
        ])
        .with_interfaces([IDICTIONARY, "System.Collections.IDictionary"])
}

fn analyzer() -> Analyzer {
    analyzer_with_all_rules(Config::default()).expect("analyzer should build")
}

fn messages(result: &LintResult) -> Vec<&str> {
    result.violations.iter().map(|v| v.message.as_str()).collect()
}

#[test]
fn boolean_field_without_configuration() {
    let mut c = compilation(&[BOOLEAN], &[]);
    c.symbols = vec![field("_myBoolean", TypeRef::named(BOOLEAN), 5)];

    let result = analyzer().analyze(&c);

    assert_eq!(
        messages(&result),
        vec!["Boolean '_myBoolean' does not follow the 'can|has|is' naming convention"]
    );
    let violation = &result.violations[0];
    assert_eq!(violation.code, "NL0004");
    assert_eq!(violation.severity, Severity::Warning);
    assert_eq!(violation.target.as_deref(), Some("_myBoolean"));
    assert_eq!(violation.location, Some(Location::new(FILE, 5, 18)));
}

#[test]
fn boolean_field_with_custom_pattern() {
    let mut c = compilation(
        &[BOOLEAN],
        &[("dotnet_diagnostic.NL0004.pattern", "^.*Boolean$")],
    );
    c.symbols = vec![
        field("_myBoolean", TypeRef::named(BOOLEAN), 5),
        field("_isVisible", TypeRef::named(BOOLEAN), 6),
    ];

    let result = analyzer().analyze(&c);

    // The custom pattern replaces the default: `_myBoolean` ends in
    // "Boolean" and is accepted, `_isVisible` is not.
    assert_eq!(
        messages(&result),
        vec!["Boolean '_isVisible' does not match the '^.*Boolean$' regex pattern"]
    );
}

#[test]
fn dictionary_type_name_is_forbidden_in_names() {
    let mut c = compilation(&[IDICTIONARY], &[]);
    c.symbols = vec![field("itemsByIdDictionary", dictionary(), 7)];

    let result = analyzer().analyze(&c);

    assert_eq!(
        messages(&result),
        vec!["Dictionary 'itemsByIdDictionary' does not follow the 'xsByY' naming convention"]
    );
}

#[test]
fn malformed_pattern_reports_one_error_and_falls_back() {
    let mut c = compilation(&[BOOLEAN], &[("dotnet_diagnostic.NL0004.pattern", "[")]);
    // Valid under the default pattern; would be rejected by any custom
    // pattern if one had been applied.
    c.symbols = vec![
        field("_isVisible", TypeRef::named(BOOLEAN), 5),
        field("hasChildren", TypeRef::named(BOOLEAN), 6),
    ];
    c.local_declarations = vec![LocalDeclarationGroup {
        declarators: vec![LocalDeclarator {
            name: "canEdit".to_string(),
            ty: TypeRef::named(BOOLEAN),
            location: Location::new(FILE, 9, 18),
        }],
    }];

    let result = analyzer().analyze(&c);

    let (errors, warnings, infos) = result.count_by_severity();
    assert_eq!((errors, warnings, infos), (1, 0, 0));
    let error = &result.violations[0];
    assert_eq!(error.message, "'[' is an invalid regex pattern");
    assert_eq!(error.code, "NL0004");
    assert!(error.location.is_none());
}

#[test]
fn malformed_pattern_still_checks_with_default() {
    let mut c = compilation(&[BOOLEAN], &[("dotnet_diagnostic.NL0004.pattern", "[")]);
    c.symbols = vec![
        field("visible", TypeRef::named(BOOLEAN), 5),
        field("enabled", TypeRef::named(BOOLEAN), 6),
    ];

    let result = analyzer().analyze(&c);

    assert_eq!(
        messages(&result),
        vec![
            "Boolean 'visible' does not follow the 'can|has|is' naming convention",
            "Boolean 'enabled' does not follow the 'can|has|is' naming convention",
            "'[' is an invalid regex pattern",
        ]
    );
}

#[test]
fn pattern_that_breaks_when_anchored_falls_back_to_default() {
    let pattern = "(?x)^on[A-Z].* # trailing comment";
    let mut c = compilation(&[BOOLEAN], &[("dotnet_diagnostic.NL0004.pattern", pattern)]);
    c.symbols = vec![
        field("visible", TypeRef::named(BOOLEAN), 5),
        field("isEnabled", TypeRef::named(BOOLEAN), 6),
    ];

    let result = analyzer().analyze(&c);

    assert_eq!(result.count_by_severity(), (1, 1, 0));
    assert_eq!(
        messages(&result),
        vec![
            "Boolean 'visible' does not follow the 'can|has|is' naming convention",
            "'(?x)^on[A-Z].* # trailing comment' is an invalid regex pattern",
        ]
    );
}

#[test]
fn xunit_fact_method_names() {
    let mut c = compilation(&["Xunit.FactAttribute"], &[]);
    c.symbols = vec![
        test_method("PassingTest", "Xunit.FactAttribute", 10),
        test_method(
            "GetValues_WhenInputIsInvalid_ShouldThrowInvalidOperationException",
            "Xunit.FactAttribute",
            16,
        ),
    ];

    let result = analyzer().analyze(&c);

    assert_eq!(
        messages(&result),
        vec![
            "Test method 'PassingTest' does not follow the 'MethodUnderTest_When_Should' naming convention"
        ]
    );
}

#[test]
fn every_invalid_declarator_is_reported() {
    let mut c = compilation(&[BOOLEAN], &[]);
    c.local_declarations = vec![LocalDeclarationGroup {
        declarators: vec![
            LocalDeclarator {
                name: "first".to_string(),
                ty: TypeRef::named(BOOLEAN),
                location: Location::new(FILE, 12, 18),
            },
            LocalDeclarator {
                name: "second".to_string(),
                ty: TypeRef::named(BOOLEAN),
                location: Location::new(FILE, 12, 25),
            },
        ],
    }];

    let result = analyzer().analyze(&c);

    let targets: Vec<_> = result
        .violations
        .iter()
        .filter_map(|v| v.target.as_deref())
        .collect();
    assert_eq!(targets, vec!["first", "second"]);
}

#[test]
fn rules_are_inactive_without_their_types() {
    let mut c = compilation(&[], &[("dotnet_diagnostic.NL0004.pattern", "[")]);
    c.symbols = vec![
        field("visible", TypeRef::named(BOOLEAN), 5),
        field("cache", dictionary(), 6),
    ];

    let result = analyzer().analyze(&c);

    // No target types, so no rule reads its pattern either.
    assert!(result.violations.is_empty());
}

#[test]
fn custom_pattern_decides_alone() {
    let pattern = "^flag[0-9]+$";
    let mut c = compilation(&[BOOLEAN], &[("dotnet_diagnostic.NL0004.pattern", pattern)]);
    c.symbols = vec![
        field("flag1", TypeRef::named(BOOLEAN), 1),
        field("isVisible", TypeRef::named(BOOLEAN), 2),
        field("flag", TypeRef::named(BOOLEAN), 3),
        field("flag42", TypeRef::named(BOOLEAN), 4),
    ];

    let result = analyzer().analyze(&c);

    let targets: Vec<_> = result
        .violations
        .iter()
        .filter_map(|v| v.target.as_deref())
        .collect();
    assert_eq!(targets, vec!["isVisible", "flag"]);
}

#[test]
fn compilations_do_not_share_patterns() {
    let mut custom = compilation(&[BOOLEAN], &[("dotnet_diagnostic.NL0004.pattern", "^on[A-Z].*$")]);
    custom.assembly = "Custom".to_string();
    custom.symbols = vec![field("onReady", TypeRef::named(BOOLEAN), 1)];

    let mut plain = compilation(&[BOOLEAN], &[]);
    plain.symbols = vec![field("onReady", TypeRef::named(BOOLEAN), 1)];

    let result = analyzer().analyze_all(&[custom, plain]);

    assert_eq!(result.compilations_checked, 2);
    assert_eq!(
        messages(&result),
        vec!["Boolean 'onReady' does not follow the 'can|has|is' naming convention"]
    );
}

#[test]
fn configured_pattern_is_overridden_by_tree_options() {
    let config = Config::parse("[rules.boolean-member-name]\npattern = \"^enabled$\"\n")
        .expect("config should parse");
    let analyzer = analyzer_with_all_rules(config).expect("analyzer should build");

    let mut from_config = compilation(&[BOOLEAN], &[]);
    from_config.symbols = vec![field("enabled", TypeRef::named(BOOLEAN), 1)];
    assert!(analyzer.analyze(&from_config).violations.is_empty());

    let mut from_tree = compilation(&[BOOLEAN], &[("dotnet_diagnostic.NL0004.pattern", "^on.*$")]);
    from_tree.symbols = vec![field("enabled", TypeRef::named(BOOLEAN), 1)];
    assert_eq!(
        messages(&analyzer.analyze(&from_tree)),
        vec!["Boolean 'enabled' does not match the '^on.*$' regex pattern"]
    );
}

#[test]
fn severity_override_and_disabled_rules() {
    let config = Config::parse(
        "[rules.NL0004]\nseverity = \"error\"\n\n[rules.dictionary-member-name]\nenabled = false\n",
    )
    .expect("config should parse");
    let analyzer = analyzer_with_all_rules(config).expect("analyzer should build");

    let mut c = compilation(&[BOOLEAN, IDICTIONARY], &[]);
    c.symbols = vec![
        field("visible", TypeRef::named(BOOLEAN), 1),
        field("cache", dictionary(), 2),
    ];

    let result = analyzer.analyze(&c);

    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].code, "NL0004");
    assert_eq!(result.violations[0].severity, Severity::Error);
}

#[test]
fn fixture_model_end_to_end() {
    let result = analyzer()
        .analyze_file(&fixture("widgets.json"))
        .expect("fixture should load");

    let report: Vec<String> = result
        .violations
        .iter()
        .map(|v| {
            let line = v.location.as_ref().map_or(0, |l| l.line);
            format!("{line} {} {}", v.code, v.message)
        })
        .collect();

    assert_eq!(
        report,
        vec![
            "8 NL0004 Boolean '_visible' does not follow the 'can|has|is' naming convention",
            "14 NL0004 Boolean 'ready' does not follow the 'can|has|is' naming convention",
            "15 NL0005 Mocked member 'renderer' does not follow the 'mocked' naming convention",
            "20 NL0101 Test method 'rendersNothing' does not match the '^[A-Z][a-zA-Z0-9]*_[A-Z][a-zA-Z0-9_]*$' regex pattern",
        ]
    );
}

#[test]
fn model_round_trips_through_json() {
    let model = std::fs::read_to_string(fixture("widgets.json")).expect("fixture should exist");
    let compilation = Compilation::from_json(&model).expect("fixture should parse");

    let json = serde_json::to_string(&compilation).expect("model should serialize");
    let reparsed = Compilation::from_json(&json).expect("serialized model should parse");

    assert_eq!(reparsed, compilation);
    assert_eq!(reparsed.symbols.len(), 5);
    assert!(reparsed.syntax_trees[1].generated);
}
