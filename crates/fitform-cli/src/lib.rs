//! FitForm CLI library.
//!
//! Command definitions and execution for the `fitform` developer tool:
//! replay recorded landmark streams through the engine and inspect the
//! exercise catalog.

use clap::{Parser, Subcommand};

use fitform_core::{Difficulty, Exercise};

pub mod replay;

/// FitForm command-line interface.
#[derive(Parser)]
#[command(
    name = "fitform",
    about = "Replay recorded landmark streams through the FitForm exercise analysis engine",
    version
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Replay a recorded landmark stream and print per-frame feedback
    Replay(replay::ReplayArgs),
    /// List supported exercises and difficulty levels
    Exercises,
}

/// Prints the exercise catalog and difficulty levels.
pub fn print_catalog() {
    println!("exercises:");
    for &exercise in Exercise::all() {
        let kind = if exercise.is_static_hold() {
            "static hold"
        } else {
            "dynamic"
        };
        println!("  {:<24} {kind}", exercise.id());
    }
    println!("difficulties:");
    for difficulty in Difficulty::all() {
        println!("  {difficulty}");
    }
}
