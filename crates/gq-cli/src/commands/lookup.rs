use colored::Colorize;

use gq_core::division_of;

pub fn run(name: &str) -> Result<(), String> {
    match division_of(name) {
        Some(division) => println!("  {} plays in the {}", name.bold(), division),
        None => {
            tracing::debug!(team = name, "lookup miss");
            println!("  unknown team: \"{name}\" (use the full name, e.g. \"Buffalo Bills\")");
        }
    }
    Ok(())
}
