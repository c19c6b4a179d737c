//! Stamp a miner payout address into each node's `.env` file.
//!
//! For every fixed node directory, derives `.env` from `.env.example` with
//! `PUB_ETH_ADDR` set to the given address. Stops at the first node whose
//! template is missing; files written for earlier nodes stay written.

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use node_tools::core::address::EthAddress;
use node_tools::exit_codes;
use node_tools::io::node_env::{NODES, NodeEnvOutcome, NodePaths, write_node_env};
use node_tools::logging;

#[derive(Parser)]
#[command(
    name = "set-node-env",
    version,
    about = "Write PUB_ETH_ADDR into every node's .env file"
)]
struct Cli {
    /// Miner payout address (0x + 40 hex chars, no checksum required).
    address: EthAddress,

    /// Base directory containing the node1/ and node2/ directories.
    #[arg(long, default_value = ".")]
    base: PathBuf,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    for node in NODES {
        let paths = NodePaths::new(&cli.base, node);
        match write_node_env(&paths, &cli.address) {
            Ok(NodeEnvOutcome::Written(path)) => println!("wrote: {}", path.display()),
            Ok(NodeEnvOutcome::MissingTemplate(path)) => {
                eprintln!("missing: {}", path.display());
                exit(exit_codes::FAILURE);
            }
            Err(err) => {
                eprintln!("{err:#}");
                exit(exit_codes::FAILURE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0xABCDEF0123456789ABCDEF0123456789ABCDEF01";

    #[test]
    fn parse_requires_exactly_one_address() {
        assert!(Cli::try_parse_from(["set-node-env"]).is_err());
        assert!(Cli::try_parse_from(["set-node-env", ADDR, ADDR]).is_err());

        let cli = Cli::try_parse_from(["set-node-env", ADDR]).expect("parse");
        assert_eq!(cli.address.as_str(), ADDR);
        assert_eq!(cli.base, PathBuf::from("."));
    }

    #[test]
    fn parse_rejects_malformed_address() {
        assert!(Cli::try_parse_from(["set-node-env", "0xnothex"]).is_err());
    }

    #[test]
    fn parse_accepts_base_override() {
        let cli = Cli::try_parse_from(["set-node-env", ADDR, "--base", "/srv/bdag"])
            .expect("parse");
        assert_eq!(cli.base, PathBuf::from("/srv/bdag"));
    }
}
