//! # naming-lint-rules
//!
//! Built-in naming rules for naming-lint.
//!
//! Each rule looks for declarations of one kind of type and checks their
//! names against a regex. Every default pattern can be replaced through the
//! `<namespace>.<code>.pattern` option.
//!
//! ## Available Rules
//!
//! | Code | Name | Checks | Default convention |
//! |------|------|--------|--------------------|
//! | NL0001 | `dictionary-member-name` | dictionary members and locals | `xsByY` |
//! | NL0002 | `set-member-name` | set members and locals | `uniqueXs` |
//! | NL0003 | `key-value-pair-member-name` | key/value pair members and locals | `xByY` |
//! | NL0004 | `boolean-member-name` | boolean members and locals | `can\|has\|is` |
//! | NL0005 | `mocked-member-name` | locals initialized with a mock | `mocked` |
//! | NL0101 | `test-method-name` | methods marked as tests | `MethodUnderTest_When_Should` |
//! | NL0102 | `key-value-pair-method-name` | methods returning a key/value pair | `GetXByY` |
//! | NL0103 | `dictionary-method-name` | methods returning a dictionary | `GetXsByY` |
//! | NL0104 | `set-method-name` | methods returning a set | `GetUniqueXs` |
//! | NL0105 | `boolean-method-name` | methods returning a boolean | `Can\|Has\|Is` |
//!
//! ## Usage
//!
//! ```ignore
//! use naming_lint_core::Analyzer;
//! use naming_lint_rules::{BooleanMemberName, DictionaryMemberName};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(BooleanMemberName::new())
//!     .rule(DictionaryMemberName::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod boolean_member_name;
pub mod boolean_method_name;
pub mod dictionary_member_name;
pub mod dictionary_method_name;
pub mod key_value_pair_member_name;
pub mod key_value_pair_method_name;
pub mod mocked_member_name;
pub mod set_member_name;
pub mod set_method_name;
pub mod test_method_name;

mod member_rule;
mod method_rule;
mod presets;
mod session;

#[cfg(test)]
mod test_support;

pub use boolean_member_name::{is_boolean_member_name_valid, BooleanMemberName};
pub use boolean_method_name::{is_boolean_method_name_valid, BooleanMethodName};
pub use dictionary_member_name::{is_dictionary_member_name_valid, DictionaryMemberName};
pub use dictionary_method_name::{is_dictionary_method_name_valid, DictionaryMethodName};
pub use key_value_pair_member_name::{
    is_key_value_pair_member_name_valid, KeyValuePairMemberName,
};
pub use key_value_pair_method_name::{
    is_key_value_pair_method_name_valid, KeyValuePairMethodName,
};
pub use mocked_member_name::{is_mocked_member_name_valid, MockLibrary, MockedMemberName};
pub use presets::{all_descriptors, all_rules, member_rules, method_rules, Preset};
pub use set_member_name::{is_set_member_name_valid, SetMemberName};
pub use set_method_name::{is_set_method_name_valid, SetMethodName};
pub use test_method_name::{is_test_method_name_valid, TestFramework, TestMethodName};

/// Re-export core types for convenience.
pub use naming_lint_core::{Rule, Severity, Violation};
