use std::path::Path;

use cris_mechanics::AttackPatch;
use cris_mechanics::sheet::new_attack_id;

pub fn run(file: &Path, patch: &AttackPatch) -> Result<(), String> {
    let mut sheet = super::load_sheet(file)?;

    let id = new_attack_id();
    sheet.add_attack(id);
    let index = sheet.attacks.len() - 1;
    sheet
        .update_attack(index, patch)
        .map_err(|e| e.to_string())?;

    super::save_sheet(file, &sheet)?;

    let attack = &sheet.attacks[index];
    println!(
        "  Added attack '{}' (id {}) to {}",
        attack.name,
        attack.id,
        file.display()
    );

    Ok(())
}
