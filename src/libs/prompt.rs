//! Interactive input.
//!
//! The config loader and the daily command ask the user for values through
//! the [`Prompter`] trait, so the interactive terminal can be swapped for a
//! scripted source in tests.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};

pub trait Prompter {
    /// Asks for a single line of text. `secret` input is not echoed.
    fn ask(&mut self, prompt: &str, secret: bool) -> Result<String>;
}

/// Terminal prompter backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn ask(&mut self, prompt: &str, secret: bool) -> Result<String> {
        let value = if secret {
            Password::with_theme(&ColorfulTheme::default()).with_prompt(prompt).interact()?
        } else {
            Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .interact_text()?
        };
        Ok(value.trim().to_string())
    }
}
