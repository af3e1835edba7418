//! REPL for stepping through a progression one chord at a time

use crate::commands::step::cmd_choose;
use crate::commands::{create_registry, CommandContext, CommandResult};
use crate::render::{render_options, render_sequence};
use crate::stepper::Stepper;
use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Interactive stepper session
pub struct Repl {
    editor: DefaultEditor,
    ctx: CommandContext,
}

impl Repl {
    pub fn new(stepper: Stepper) -> Result<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
        Ok(Repl {
            editor,
            ctx: CommandContext::new(stepper),
        })
    }

    /// Print where we are and what comes next
    fn print_position(&mut self) {
        let stepper = &mut self.ctx.stepper;
        let symbols: Vec<String> = stepper.chords().iter().map(|c| c.to_string()).collect();
        println!(
            "\n{} {}",
            format!("Chord {}/{}:", stepper.position() + 1, symbols.len()).bold(),
            stepper.current().to_string().bright_cyan()
        );

        if stepper.is_complete() {
            let sequence = stepper.sequence();
            println!("{}", "Progression complete".bright_green().bold());
            print!("{}", render_sequence(&sequence));
            println!("{}", format!("total cost: {}", sequence.cost()).yellow());
            println!(
                "Type '{}' to revise or '{}' to exit.",
                "back".cyan(),
                "quit".bright_red()
            );
            return;
        }

        match stepper.options() {
            Ok(options) => {
                if let Some(next) = stepper.next_chord() {
                    print!("{}", render_options(next, &options));
                }
            }
            Err(e) => {
                println!("{} {}", "Dead end:".bright_red().bold(), e.to_string().red());
                println!("Type '{}' to try another voicing.", "back".cyan());
            }
        }
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{}",
            "SATB voice-leading stepper".bright_cyan().bold()
        );
        println!(
            "Type a number to choose, '{}' for more information, '{}' or {} to exit.",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        let registry = create_registry();
        self.print_position();

        loop {
            let prompt = format!("{} ", "satb>".bright_magenta().bold());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line.to_owned())?;

                    let result = match registry.execute(line, &mut self.ctx) {
                        CommandResult::NotACommand => cmd_choose(line, &mut self.ctx),
                        other => other,
                    };
                    match result {
                        CommandResult::Success | CommandResult::NotACommand => {}
                        CommandResult::Message(msg) => println!("{}", msg),
                        CommandResult::Moved => self.print_position(),
                        CommandResult::Exit => {
                            println!("{}", "Goodbye!".bright_cyan());
                            break;
                        }
                        CommandResult::Error(e) => {
                            println!("{} {}", "Error:".bright_red().bold(), e.red());
                        }
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }
                Err(err) => {
                    println!(
                        "{} {}",
                        "Error reading input:".bright_red().bold(),
                        err.to_string().red()
                    );
                }
            }
        }

        Ok(())
    }
}

/// Convenience function to start stepping
pub fn start(stepper: Stepper) -> Result<()> {
    Repl::new(stepper)?.run()
}
