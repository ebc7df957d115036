//! CLI module for the `fitok <command> [options]` interface.
//!
//! # Architecture
//!
//! ```text
//! argv ──► parser ──► Command + GlobalOptions ──► dispatch ──► handlers
//!                                                  │
//!                      entrypoint (help/version) ◄─┘
//! ```
//!
//! # Design Principles
//!
//! 1. **One render per invocation**: each command reads the catalog fresh,
//!    applies its own query/view state, and exits. There is no session.
//!
//! 2. **Flags modify, never add**: search, scope, view, and format are
//!    refinements of the same inspector flow, not separate features.
//!
//! 3. **Degrade, don't die**: missing stylesheets mean an empty catalog;
//!    a missing clipboard means stdout. Only bad invocations are errors.
//!
//! # Module Structure
//!
//! - [`command`] - Command enum and option types (source of truth)
//! - [`parser`] - Subcommand parser
//! - [`dispatch`] - Command dispatcher and handlers
//! - [`entrypoint`] - Shared main() body for the binary

pub mod command;
pub mod dispatch;
pub mod entrypoint;
pub mod parser;

// Re-export main types for convenience
pub use command::{
    CategoriesOptions,
    // Command enum
    Command,
    CopyOptions,
    ExportOptions,
    // Global options
    GlobalOptions,
    HelpOptions,
    InspectOptions,
    // Parsing result
    ParsedCommand,
};

// Re-export parser functions
pub use parser::{is_subcommand, parse_command};

// Re-export dispatch functions
pub use dispatch::{SnapshotMetadata, dispatch_command};
