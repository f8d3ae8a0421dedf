use std::path::Path;

use cris_mechanics::CharacterSheet;

pub fn run(file: &Path, name: Option<&str>, force: bool) -> Result<(), String> {
    if file.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            file.display()
        ));
    }

    let name = name.map(str::to_string).unwrap_or_else(|| {
        file.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let sheet = CharacterSheet::new(name);
    super::save_sheet(file, &sheet)?;

    println!(
        "  Created sheet '{}' with {} skills at {}",
        sheet.profile.name,
        sheet.skills.len(),
        file.display()
    );

    Ok(())
}
