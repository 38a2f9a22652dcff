//! Layout instruction adapter.
//!
//! A planning stage describes a poster as an ordered list of instructions
//! (`add_title`, `add_image`, ...). This crate turns that list into a
//! [`LayoutTree`](posterflow_layout::LayoutTree) rooted at a vertical
//! container the width of the canvas, and arranges it once.
//!
//! Parsing is lenient: an instruction that cannot be decoded, names an
//! unknown command, or refers to an asset that cannot be resolved is logged
//! and skipped. The remaining instructions still produce a layout.

pub mod config;
pub mod error;
pub mod instruction;
pub mod parser;

pub use config::{AdapterConfig, TextPreset};
pub use error::DslError;
pub use instruction::{Instruction, InstructionKind};
pub use parser::{DslParser, ParsedLayout};
