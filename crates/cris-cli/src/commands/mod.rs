pub mod add_attack;
pub mod check;
pub mod dice;
pub mod new;
pub mod patch;
pub mod roll;
pub mod show;

use std::fs;
use std::path::Path;

use cris_mechanics::CharacterSheet;

/// Read and parse a sheet file.
fn load_sheet(path: &Path) -> Result<CharacterSheet, String> {
    let json =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let sheet = CharacterSheet::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), attacks = sheet.attacks.len(), "sheet loaded");
    Ok(sheet)
}

/// Write a sheet as pretty JSON with a trailing newline.
fn save_sheet(path: &Path, sheet: &CharacterSheet) -> Result<(), String> {
    let mut json = sheet.to_json_pretty().map_err(|e| e.to_string())?;
    json.push('\n');
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), "sheet saved");
    Ok(())
}
