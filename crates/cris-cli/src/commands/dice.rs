use colored::Colorize;
use cris_mechanics::{RollConfig, RollResult, roll_expression};

pub fn run(expr: &str, seed: Option<u64>, json: bool) -> Result<(), String> {
    let mut source = RollConfig { seed }.source();
    let roll = roll_expression(expr, &mut source).map_err(|e| e.to_string())?;

    if json {
        let result = RollResult::Dice(roll);
        let out = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("  {roll}");
    println!("  {} {}", "Total:".bold(), roll.roll.total.to_string().bold());

    Ok(())
}
