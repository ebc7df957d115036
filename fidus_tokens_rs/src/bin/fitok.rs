use std::any::Any;
use std::panic;

use fidus_tokens::cli::entrypoint::{EntryOptions, run};

fn install_broken_pipe_handler() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let is_broken = <dyn Any>::downcast_ref::<&str>(payload)
            .is_some_and(|s| s.contains("Broken pipe"))
            || <dyn Any>::downcast_ref::<String>(payload)
                .is_some_and(|s| s.contains("Broken pipe"));

        if is_broken {
            // Quietly exit when downstream closes the pipe (e.g. piping to `head`).
            std::process::exit(0);
        }

        default_hook(info);
    }));
}

fn main() -> std::io::Result<()> {
    install_broken_pipe_handler();

    run(&EntryOptions {
        binary_name: "fitok",
        usage: USAGE,
    })
}

const USAGE: &str = "fitok - Fidus design-token inspector\n\n\
PHILOSOPHY: The stylesheet is the source of truth. Every command re-reads it,\n\
            so what you see is always what the theme currently says.\n\n\
Quick Start:\n  \
  fitok                          Inspect tokens under the current directory\n  \
  fitok --query prim             Filter by name, variable, or description\n  \
  fitok inspect --view grid      Card grid with color swatches and size bars\n\n\
Commands:\n  \
  inspect           Render the token inspector (default)\n  \
  export            Write the filtered set to fidus-<category>-tokens[-filtered].<ext>\n  \
  copy              Send the filtered set (or one token) to the clipboard\n  \
  categories        Per-category token counts\n  \
  watch             Re-render whenever a stylesheet changes\n\n\
Options:\n  \
  --category <c>    color|spacing|radius|shadow|z-index|typography|motion|other\n  \
  --query <q>       Case-insensitive substring filter\n  \
  --view <v>        code (default) or grid\n  \
  --format <f>      json (default) or css\n\n\
Common:\n  \
  --json            Machine-readable output\n  \
  --quiet, -q       Suppress non-essential output\n  \
  --verbose, -v     Scan details and spinner\n  \
  --color <mode>    auto|always|never\n  \
  --help, -h        Show help (fitok help <command> for details)\n  \
  --version, -V     Show version\n";
