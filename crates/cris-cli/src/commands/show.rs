use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use cris_mechanics::dice::{PoolMode, pool_size};
use cris_mechanics::{CharacterSheet, MAX_POOL_DICE, StatusBar};

pub fn run(file: &Path) -> Result<(), String> {
    let sheet = super::load_sheet(file)?;

    print_profile(&sheet);
    print_attributes(&sheet);
    print_status(&sheet);
    print_skills(&sheet);
    print_attacks(&sheet);

    Ok(())
}

fn print_profile(sheet: &CharacterSheet) {
    let profile = &sheet.profile;
    let name = if profile.name.is_empty() {
        "(unnamed)"
    } else {
        profile.name.as_str()
    };
    println!("  {}", name.bold());
    if !profile.class.is_empty() {
        println!("  class:   {}", profile.class);
    }
    if !profile.origin.is_empty() {
        println!("  origin:  {}", profile.origin);
    }
    if !profile.player.is_empty() {
        println!("  player:  {}", profile.player);
    }
    println!();
}

/// Describe the pool an attribute value rolls, e.g. `3d20 best`.
fn pool_description(value: i32) -> String {
    let size = pool_size(value).min(MAX_POOL_DICE as u64);
    format!("{size}d20 {}", PoolMode::for_value(value))
}

fn print_attributes(sheet: &CharacterSheet) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attr", "Name", "Value", "Pool"]);
    for (attr, value) in sheet.attributes.iter() {
        table.add_row(vec![
            attr.code().to_string(),
            attr.label().to_string(),
            value.to_string(),
            pool_description(value),
        ]);
    }
    println!("{table}");
    println!();
}

fn bar_line(label: &str, bar: &StatusBar) {
    let text = bar.to_string();
    let text = if bar.is_empty() {
        text.red().to_string()
    } else if bar.is_overfull() {
        text.yellow().to_string()
    } else {
        text
    };
    println!("  {label:<5} {text}");
}

fn print_status(sheet: &CharacterSheet) {
    bar_line("PV", &sheet.hp);
    bar_line("SAN", &sheet.san);
    bar_line("PE", &sheet.esf);
    println!(
        "  DEF   {} (block {}, dodge {})",
        sheet.defense.def, sheet.defense.block, sheet.defense.dodge
    );
    println!();
}

fn print_skills(sheet: &CharacterSheet) {
    if sheet.skills.is_empty() {
        println!("  {} (none)", "Skills:".dimmed());
        println!();
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Skill", "Attr", "Training", "Other", "Bonus"]);
    for skill in &sheet.skills {
        table.add_row(vec![
            skill.name.clone(),
            skill.attr.to_string(),
            skill.training.to_string(),
            skill.other.to_string(),
            format!("{:+}", skill.bonus()),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_attacks(sheet: &CharacterSheet) {
    if sheet.attacks.is_empty() {
        println!("  {} (none)", "Attacks:".dimmed());
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Attack", "Attr", "Skill", "Damage", "Crit", "Type"]);
    for attack in &sheet.attacks {
        let attr = attack
            .attr
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            attack.id.to_string(),
            attack.name.clone(),
            attr,
            attack.skill.clone(),
            attack.damage.clone(),
            attack.crit_rule().to_string(),
            attack.damage_type.clone(),
        ]);
    }
    println!("{table}");
}
