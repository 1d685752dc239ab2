//! Catalog command - list descriptor rules in matching order

use typecode_core::debug::{FormatRule, STANDARD_RULES};

/// Execute the catalog command
pub fn execute() {
    for line in listing(&STANDARD_RULES) {
        println!("{}", line);
    }
}

/// One line per rule: position, descriptor, kind and width
fn listing(rules: &[FormatRule]) -> Vec<String> {
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| {
            let width = match rule {
                FormatRule::Literal { kind, .. } => kind.byte_size().to_string(),
                FormatRule::CharArray => "N".to_string(),
            };
            format!(
                "{:>2}  {:<36} {:<24} {}",
                index + 1,
                rule.pattern(),
                rule.kind_name(),
                width
            )
        })
        .collect()
}
