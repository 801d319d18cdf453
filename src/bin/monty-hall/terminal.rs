//! Terminal front end for interactive play.

use anyhow::{Context, Result};
use colored::Colorize;
use monty_hall::game::{GameEngine, Message, Outcome, Presenter, PrizeKind, Selection, Strategy};
use std::io::{self, BufRead, Write};

/// Draws the doors as a row of boxes and prints status lines.
pub struct TerminalPresenter<W: Write> {
    out: W,
    cells: Vec<String>,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            cells: Vec::new(),
        }
    }
}

impl<W: Write> TerminalPresenter<W> {
    fn cell(&mut self, index: usize) -> &mut String {
        if self.cells.len() <= index {
            self.cells.resize(index + 1, String::new());
        }
        &mut self.cells[index]
    }

    fn draw(&mut self) {
        let row: Vec<String> = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let face = if cell.is_empty() { (i + 1).to_string() } else { cell.clone() };
                format!("[ {face} ]")
            })
            .collect();
        let _ = writeln!(self.out, "{}", row.join(" "));
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render_door_locked(&mut self, index: usize) {
        *self.cell(index) = "🔒".to_string();
    }

    fn render_door_prize(&mut self, index: usize, prize: PrizeKind) {
        *self.cell(index) = prize.glyph().to_string();
    }

    fn render_all_doors(&mut self, prizes: &[PrizeKind]) {
        for (index, prize) in prizes.iter().enumerate() {
            *self.cell(index) = prize.glyph().to_string();
        }
    }

    fn clear_door_display(&mut self, index: usize) {
        self.cell(index).clear();
    }

    fn display_message(&mut self, message: Message) {
        self.draw();
        let text = match message {
            Message::Win => message.text().green().bold(),
            Message::Lose => message.text().yellow(),
            _ => message.text().normal(),
        };
        let _ = writeln!(self.out, "{text}");
    }

    fn report_progress(&mut self, strategy: Strategy, win_percent: u32, lose_percent: u32) {
        let _ = writeln!(
            self.out,
            "{strategy}: {win_percent}% win, {lose_percent}% lose"
        );
    }
}

/// Printed before the engine is built, so it precedes the first prompt.
pub fn print_intro(door_count: usize) {
    println!(
        "{}",
        format!("Doors are numbered 1 to {door_count}. Type q to quit.").dimmed()
    );
}

/// Read door numbers from stdin until `q` or end of input.
pub fn run<W: Write>(mut engine: GameEngine<TerminalPresenter<W>>) -> Result<()> {
    let door_count = engine.door_count();
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let Some(index) = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|&i| i < door_count)
        else {
            println!("Enter a door number between 1 and {door_count}");
            continue;
        };

        match engine.select_door(index)? {
            Selection::Ignored => println!("That door can't be chosen right now"),
            Selection::Finished { outcome, .. } => {
                let results = engine.results();
                let tally = format!("{} won, {} lost", results.wins, results.losses);
                match outcome {
                    Outcome::Win => println!("{}", tally.green()),
                    Outcome::Lose => println!("{}", tally.yellow()),
                }
            }
            Selection::Locked { .. } | Selection::Restarted => {}
        }
    }
    Ok(())
}
