use std::path::Path;

use colored::Colorize;
use cris_mechanics::validate_sheet;

pub fn run(file: &Path) -> Result<(), String> {
    let sheet = super::load_sheet(file)?;
    let issues = validate_sheet(&sheet);

    for issue in &issues {
        let level = if issue.is_error {
            "error".red().bold()
        } else {
            "warning".yellow().bold()
        };
        println!("  {level}: {}: {}", issue.subject, issue.message);
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    if warnings > 0 {
        println!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    } else {
        println!("  All checks passed for '{}'.", sheet.profile.name);
    }
    println!(
        "  {} skills, {} attacks",
        sheet.skills.len(),
        sheet.attacks.len()
    );

    Ok(())
}
