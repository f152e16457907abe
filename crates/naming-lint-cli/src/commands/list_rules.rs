//! List rules command implementation.

use naming_lint_rules::all_descriptors;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<28} Description", "Code", "Name");
    println!("{}", "-".repeat(90));

    for descriptor in all_descriptors() {
        println!(
            "{:<8} {:<28} {}",
            descriptor.code, descriptor.name, descriptor.description
        );
    }

    println!("\nPresets:");
    println!("  all      - NL0001-NL0005, NL0101-NL0105 (default)");
    println!("  members  - NL0001-NL0005");
    println!("  methods  - NL0101-NL0105");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  naming-lint check --rules boolean-member-name,test-method-name");
    println!("  naming-lint check --rules NL0004,NL0101");
}
