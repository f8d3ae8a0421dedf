use std::fs;
use std::io::Read;
use std::path::Path;

pub fn run(file: &Path, patch: &str, output: Option<&Path>) -> Result<(), String> {
    let mut sheet = super::load_sheet(file)?;

    let text = if patch == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("cannot read patch from stdin: {e}"))?;
        buf
    } else {
        fs::read_to_string(patch).map_err(|e| format!("cannot read {patch}: {e}"))?
    };

    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|e| format!("patch is not valid JSON: {e}"))?;
    sheet.apply_patch(&value).map_err(|e| e.to_string())?;

    let target = output.unwrap_or(file);
    super::save_sheet(target, &sheet)?;

    println!("  Patched '{}' into {}", sheet.profile.name, target.display());

    Ok(())
}
