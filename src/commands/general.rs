//! General REPL commands (help, quit)

use crate::commands::{CommandContext, CommandResult};
use colored::*;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Print help information
fn print_help() {
    println!("{}", "Stepping Help".bold());
    println!("{}", "=============".bold());
    println!();
    println!("  {}     - Choose a listed voicing for the next chord", "<n>".cyan());
    println!("  {}    - Return to the previous chord", "back".cyan());
    println!("  {}    - Show the voice leading so far", "show".cyan());
    println!("  {}    - Show this help", "help".bright_green());
    println!("  {}    - Exit", "quit".bright_red());
}
