//! Line-based preset picker for the terminal.

use std::io::{BufRead, Write};

use cursor_presets_config::PresetName;

use crate::traits::Prompt;

/// Numbered-menu prompt reading answers line by line.
///
/// An answer may be a menu number or a preset name. An empty line accepts the
/// default. End of input or `q` cancels.
pub struct StdinPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdinPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                log::warn!("Failed to read answer: {}", e);
                None
            }
        }
    }

    fn show_menu(
        &mut self,
        message: &str,
        candidates: &[PresetName],
        default: Option<&PresetName>,
    ) -> std::io::Result<()> {
        for (index, name) in candidates.iter().enumerate() {
            writeln!(self.output, "{:>3}) {}", index + 1, name)?;
        }
        match default {
            Some(default) => write!(self.output, "{message} (default {default}): ")?,
            None => write!(self.output, "{message}: ")?,
        }
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Prompt for StdinPrompt<R, W> {
    fn choose(
        &mut self,
        message: &str,
        candidates: &[PresetName],
        default: Option<&PresetName>,
    ) -> Option<PresetName> {
        if let Err(e) = self.show_menu(message, candidates, default) {
            log::warn!("Failed to show preset menu: {}", e);
        }

        loop {
            let answer = self.read_answer()?;
            if answer.is_empty() {
                if let Some(default) = default {
                    return Some(default.clone());
                }
            } else if answer == "q" {
                return None;
            } else if let Ok(number) = answer.parse::<usize>()
                && let Some(name) = number.checked_sub(1).and_then(|i| candidates.get(i))
            {
                return Some(name.clone());
            } else if let Some(name) = candidates.iter().find(|name| **name == *answer) {
                return Some(name.clone());
            }

            let _ = write!(self.output, "No preset '{answer}', try again: ");
            let _ = self.output.flush();
        }
    }
}
