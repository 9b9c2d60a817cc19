//! Print the OpenAPI document.
//!
//! # Examples
//! ```sh
//! cargo run --bin openapi-dump -- --pretty > openapi.json
//! ```

use std::io::{self, Write};

use clap::Parser;
use jobboard::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the job board OpenAPI document")]
struct Cli {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
    /// Emit YAML instead of JSON.
    #[arg(long, conflicts_with = "pretty")]
    yaml: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let doc = ApiDoc::openapi();
    let rendered = if cli.yaml {
        doc.to_yaml().map_err(io::Error::other)?
    } else if cli.pretty {
        doc.to_pretty_json().map_err(io::Error::other)?
    } else {
        doc.to_json().map_err(io::Error::other)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")
}
