//! Server Configuration
//!
//! Runtime settings for the submission service and their command line parsing.
//! Every setting has a default, so the binary starts with no arguments at all;
//! deployments override the bind address, the data directory root, or the
//! capacity ceiling as needed.

use anyhow::{anyhow, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Directory the file-backed store roots itself at when none is given.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Ceiling on the observed entry count of the indexed store. The comparison
/// is made against the raw directory-listing count (stored records plus the
/// self and parent entries), matching the listing the ceiling was calibrated
/// against.
pub const DEFAULT_MAX_ENTRIES: usize = 2000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Root of the on-disk store (`full.txt` and the `all/` record directory).
    pub data_dir: PathBuf,
    /// Maximum observed entry count before submissions are refused.
    pub max_entries: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl ServerConfig {
    /// Parses `--bind <addr:port>`, `--data-dir <path>` and `--max-entries <n>`
    /// flags, falling back to the defaults for anything not given. Unknown
    /// flags are an error.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = Self::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    config.bind_addr = flag_value(args, i)?.parse()?;
                    i += 2;
                }
                "--data-dir" => {
                    config.data_dir = PathBuf::from(flag_value(args, i)?);
                    i += 2;
                }
                "--max-entries" => {
                    config.max_entries = flag_value(args, i)?.parse()?;
                    i += 2;
                }
                other => {
                    return Err(anyhow!("Unknown argument: {}", other));
                }
            }
        }

        Ok(config)
    }
}

fn flag_value<'a>(args: &'a [String], i: usize) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} requires a value", args[i]))
}
