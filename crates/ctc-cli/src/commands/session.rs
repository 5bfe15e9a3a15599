//! Interactive session over stdin.

use std::io::{self, BufRead, Write};

use ctc_core::Config;

use crate::view::{Outcome, SessionCommand, ViewState};

pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let view = ViewState::from_config(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    drive(view, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Feed `input` lines to the view, rendering after each command.
pub fn drive<R: BufRead, W: Write>(mut view: ViewState, input: R, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", view.render())?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command: SessionCommand = match line.parse() {
            Ok(command) => command,
            Err(hint) => {
                writeln!(out, "{hint}")?;
                continue;
            }
        };
        match view.apply(command) {
            Outcome::Render => writeln!(out, "{}", view.render())?,
            Outcome::Help => writeln!(out, "{}", crate::view::HELP)?,
            Outcome::Quit => break,
        }
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(script: &str) -> String {
        let mut out = Vec::new();
        drive(ViewState::from_config(&Config::default()), script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn initial_render_is_today() {
        let out = transcript("");
        assert!(out.contains("Goal: 100 points"));
        assert!(out.contains("0 pts"));
        assert!(out.contains("Chud zone"));
    }

    #[test]
    fn toggles_update_score() {
        let out = transcript("toggle 1\ntoggle 5\n");
        assert!(out.contains("40% Chad | Rising"));
    }

    #[test]
    fn unknown_command_prints_hint() {
        let out = transcript("dance\n");
        assert!(out.contains("unknown command: dance"));
    }

    #[test]
    fn quit_stops_processing() {
        let out = transcript("quit\ntoggle 1\n");
        assert!(!out.contains("15 pts"));
    }
}
