//! Write the OpenAPI document as JSON to stdout or a file.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use roster::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Export the roster OpenAPI document")]
struct Args {
    /// Destination file; stdout when omitted.
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn render(compact: bool) -> serde_json::Result<String> {
    let doc = ApiDoc::openapi();
    if compact {
        doc.to_json()
    } else {
        doc.to_pretty_json()
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let json = render(args.compact).map_err(io::Error::other)?;

    match args.output {
        Some(path) => fs::write(path, json),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")
        }
    }
}
