//! List rules command implementation.

use indent_lint_rules::descriptions;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<22} {:<22} Description", "Identifier", "Name");
    println!("{}", "-".repeat(80));

    for description in descriptions() {
        let opt_in = if description.opt_in { " (opt-in)" } else { "" };
        println!(
            "{:<22} {:<22} {}{}",
            description.identifier, description.name, description.description, opt_in
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  indent-lint check --rules mixed_indentation");
}
