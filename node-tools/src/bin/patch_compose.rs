//! Patch a Docker Compose file for a second miner instance.
//!
//! Applies a fixed ordered list of literal substring replacements (renamed
//! container, bumped host ports) and writes the file back only when something
//! changed. Safe to re-run: the patch set is idempotent.

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use node_tools::exit_codes;
use node_tools::io::compose::{PatchOutcome, patch_compose_file, validate_compose_path};
use node_tools::logging;

#[derive(Parser)]
#[command(
    name = "patch-compose",
    version,
    about = "Patch a miner docker-compose file for a second instance"
)]
struct Cli {
    /// Docker Compose file to patch in place (.yml or .yaml).
    compose_file: PathBuf,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(err) = validate_compose_path(&cli.compose_file) {
        eprintln!("error: {err:#}");
        exit(exit_codes::USAGE);
    }

    match patch_compose_file(&cli.compose_file) {
        Ok(PatchOutcome::Patched(path)) => println!("patched: {}", path.display()),
        Ok(PatchOutcome::Unchanged) => {
            println!("no changes made (already patched or patterns not found)");
        }
        Err(err) => {
            eprintln!("{err:#}");
            exit(exit_codes::FAILURE);
        }
    }
}
