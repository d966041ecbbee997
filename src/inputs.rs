/// Line-based input files: wallets, tokens, proxies
use crate::logger::{self, LogTag};
use std::path::Path;

/// Parse file contents into entries
///
/// Lines are trimmed; blank lines and `#` comments are dropped; order is kept.
pub fn parse_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Load entries from a file
///
/// A missing or unreadable file is logged and yields an empty list.
pub fn load_lines(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let lines = parse_lines(&contents);
            logger::debug(
                LogTag::Inputs,
                &format!("Loaded {} entries from {}", lines.len(), path.display()),
            );
            lines
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            logger::error(LogTag::Inputs, &format!("File {} not found", path.display()));
            Vec::new()
        }
        Err(e) => {
            logger::error(
                LogTag::Inputs,
                &format!("Failed to read {}: {}", path.display(), e),
            );
            Vec::new()
        }
    }
}

/// Raw contents of the three input files
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub wallets: Vec<String>,
    pub tokens: Vec<String>,
    pub proxies: Vec<String>,
}

impl Inputs {
    /// Load all inputs; `proxies` is `None` when proxies are disabled
    pub fn load(wallets: &Path, tokens: &Path, proxies: Option<&Path>) -> Self {
        Self {
            wallets: load_lines(wallets),
            tokens: load_lines(tokens),
            proxies: proxies.map(load_lines).unwrap_or_default(),
        }
    }
}
