//! `json-dotpath` — print the value at a dot-path of a JSON document.
//!
//! Usage:
//!   json-dotpath [--as <kind>] [--pretty] '<path>' < doc.json
//!
//! Set `RUST_LOG=debug` for lookup diagnostics on stderr.

use clap::Parser;
use json_dotpath_cli::{lookup, LookupOptions, ValueKind};
use log::{debug, error};
use std::io::{self, Read, Write};

#[derive(Parser)]
#[command(
    name = "json-dotpath",
    version,
    about = "Print the value at a dot-path of a JSON document read from stdin"
)]
struct Cli {
    #[arg(help = "Dot-separated path, e.g. data.images.original.url")]
    path: String,
    #[arg(
        long = "as",
        value_enum,
        default_value = "raw",
        help = "Accessor used to extract the value"
    )]
    kind: ValueKind,
    #[arg(long, help = "Pretty-print objects, arrays and raw values")]
    pretty: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        error!("reading stdin failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
    debug!("read {} bytes, looking up '{}' as {:?}", buf.len(), cli.path, cli.kind);

    let options = LookupOptions {
        kind: cli.kind,
        pretty: cli.pretty,
    };
    match lookup(buf.trim(), &cli.path, &options) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                error!("writing stdout failed: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            debug!("lookup of '{}' failed: {e:?}", cli.path);
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
