//! Shared CLI entry point for the `fitok` binary.
//!
//! Parses argv, prints help/version, and routes everything else to the
//! dispatcher. Kept out of `bin/` so the whole flow is testable as library
//! code.

use crate::cli::{self, Command};

/// Options controlling binary-specific behavior.
pub struct EntryOptions {
    /// Name shown in `--version` output.
    pub binary_name: &'static str,
    /// Usage text for `--help`.
    pub usage: &'static str,
}

/// Run the CLI with the given options. This is the shared main() body.
pub fn run(opts: &EntryOptions) -> std::io::Result<()> {
    let raw_args: Vec<String> = std::env::args().skip(1).collect();

    let parsed = match cli::parse_command(&raw_args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    match &parsed.command {
        Command::Help(help) => {
            let text = help
                .topic
                .as_deref()
                .and_then(Command::format_command_help)
                .unwrap_or_else(|| opts.usage.to_string());
            println!("{text}");
            Ok(())
        }
        Command::Version => {
            println!("{} {}", opts.binary_name, env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => match cli::dispatch_command(&parsed) {
            Ok(()) => Ok(()),
            Err(err) => {
                eprintln!("[fitok][error] {err:#}");
                std::process::exit(1);
            }
        },
    }
}
