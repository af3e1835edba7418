//! Decision-tree navigation (choose, back, show)

use crate::commands::{CommandContext, CommandResult};
use crate::render::render_sequence;
use colored::*;

/// Handle a bare number: move forward to that option
pub fn cmd_choose(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let Ok(choice) = args.parse::<usize>() else {
        return CommandResult::Error(format!("Unknown command: {}", args));
    };
    match ctx.stepper.choose(choice) {
        Ok(_) => CommandResult::Moved,
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `back` command
pub fn cmd_back(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    if ctx.stepper.back() {
        CommandResult::Moved
    } else {
        CommandResult::Error("Already at the first chord".to_string())
    }
}

/// Handle `show` command
pub fn cmd_show(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let sequence = ctx.stepper.sequence();
    CommandResult::Message(format!(
        "{}{}",
        render_sequence(&sequence),
        format!("cost so far: {}", sequence.cost()).yellow()
    ))
}
