use std::path::Path;

use colored::Colorize;
use cris_mechanics::{PoolRoll, RollConfig, RollRequest, RollResult, roll};

pub fn run(file: &Path, request: &RollRequest, seed: Option<u64>, json: bool) -> Result<(), String> {
    let sheet = super::load_sheet(file)?;
    let mut source = RollConfig { seed }.source();
    let result = roll(&sheet, request, &mut source).map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    print_result(&result);
    Ok(())
}

fn print_result(result: &RollResult) {
    match result {
        RollResult::Attribute(r) => {
            println!("  {} {}", r.attribute.to_string().bold(), r.attribute.label().dimmed());
            print_pool(&r.pool);
            println!("  {} {}", "Total:".bold(), r.total.to_string().bold());
        }
        RollResult::Skill(r) => {
            println!("  {} {}", r.skill.bold(), format!("({})", r.attribute).dimmed());
            print_pool(&r.pool);
            println!("  bonus:  {:+}", r.modifier);
            println!("  {} {}", "Total:".bold(), r.total.to_string().bold());
        }
        RollResult::Attack(r) => {
            let attr = r
                .attribute
                .map(|a| format!("({a})"))
                .unwrap_or_else(|| "(no attribute)".to_string());
            println!("  {} {}", r.attack.bold(), attr.dimmed());
            print_pool(&r.pool);
            println!("  bonus:  {:+}", r.modifier);
            println!("  {} {}", "To hit:".bold(), r.to_hit.to_string().bold());
            if r.critical {
                println!("  {} {}", "CRITICAL".red().bold(), format!("({})", r.crit).dimmed());
            }
            let kind = if r.damage_type.is_empty() {
                String::new()
            } else {
                format!(" {}", r.damage_type)
            };
            println!("  {} {}{kind}", "Damage:".bold(), r.damage);
        }
        RollResult::Dice(r) => {
            println!("  {r}");
            println!("  {} {}", "Total:".bold(), r.roll.total.to_string().bold());
        }
    }
}

fn print_pool(pool: &PoolRoll) {
    let line = format!("  pool:   {pool}");
    if pool.is_penalty() {
        println!("{} {}", line, "(penalty)".yellow());
    } else {
        println!("{line}");
    }
}
