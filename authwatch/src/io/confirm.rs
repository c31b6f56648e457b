//! Confirmation gate for destructive actions.
//!
//! The purge operation takes a `Confirmer` so the interactive prompt can
//! be swapped for a fixed policy in tests and scripts. The default answer
//! is always no.

use std::io::{self, BufRead, Write};
use std::sync::{Arc, RwLock};

/// Capability to approve a destructive action.
pub trait Confirmer {
    /// Ask the operator; `true` only on an explicit yes.
    fn confirm(&self, prompt: &str) -> bool;
}

/// Interactive confirmation on stdin. Anything but "y"/"yes"
/// (case-insensitive) declines, including EOF and read errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirmer;

impl StdinConfirmer {
    pub fn new() -> Self {
        Self
    }
}

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N]: ", prompt);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_affirmative(&answer)
    }
}

/// Non-interactive policy that declines everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct DenyAll;

impl Confirmer for DenyAll {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

/// Test confirmer with a fixed answer that records prompts.
#[derive(Debug, Clone)]
pub struct ScriptedConfirmer {
    answer: bool,
    prompts: Arc<RwLock<Vec<String>>>,
}

impl ScriptedConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Prompts shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.read().unwrap().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.write().unwrap().push(prompt.to_string());
        self.answer
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
