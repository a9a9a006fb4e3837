//! Console interface for the game
//!
//! The menu loop and in-game prompts run over generic `BufRead`/`Write`
//! handles, so scripted sessions can drive them in tests while the binary
//! wires up stdin and stdout.

pub mod menu;
pub mod output;
