use crate::error::{Result, ValidatorError};
use crate::validator::rules;
use std::io::{self, Write};

/// Print the supported resource types.
pub fn handle_kinds() -> Result<i32> {
    let stdout = io::stdout();
    write_kinds(&mut stdout.lock()).map_err(ValidatorError::Output)?;
    Ok(0)
}

/// Write one row per rule set: kind, alias, field rule counts and structural
/// checks.
///
/// The counts cover plain field rules only; container, port and backend
/// requirements live in the structural checks listed last.
pub fn write_kinds(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{:<24} {:<8} {:>15} {:>18}  STRUCTURAL CHECKS",
        "KIND", "ALIAS", "REQUIRED FIELDS", "RECOMMENDED FIELDS"
    )?;

    for rule_set in rules::registry() {
        let checks: Vec<&str> = rule_set
            .structural_checks
            .iter()
            .map(|c| c.name())
            .collect();
        writeln!(
            out,
            "{:<24} {:<8} {:>15} {:>18}  {}",
            rule_set.kind.as_str(),
            rule_set.kind.alias(),
            rule_set.required.len(),
            rule_set.recommended.len(),
            if checks.is_empty() {
                "-".to_string()
            } else {
                checks.join(", ")
            }
        )?;
    }

    writeln!(
        out,
        "\nSelect with --type <kind|alias|all>; without --type only apiVersion, kind and metadata.name are checked."
    )
}
