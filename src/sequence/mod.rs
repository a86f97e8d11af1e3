//! Escape sequence definitions.
//!
//! - `catalog`: the static table of sequences, addressable by symbolic name
//! - `style`: colors and text attributes rendered as SGR parameters
//! - `codes`: named SGR codes and DEC private modes

pub mod catalog;
pub mod codes;
mod style;

pub use catalog::{lookup, Arity, Introducer, SequenceDef, CATALOG};
pub use codes::{mode, sgr};
pub use style::{Color, Style};
