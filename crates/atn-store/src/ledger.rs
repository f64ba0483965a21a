//! Node-config ledgers: one encoded config per line, in trial order.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use atn_core::errors::{AtnError, ErrorInfo};
use atn_nodecfg::{encode, NodeConfig};

/// Writes all configs, replacing any existing ledger.
pub fn write_ledger(path: &Path, configs: &[NodeConfig]) -> Result<(), AtnError> {
    let mut text = String::new();
    for config in configs {
        text.push_str(&encode(config));
        text.push('\n');
    }
    fs::write(path, text).map_err(|err| AtnError::from_io("ledger-write", path, err))
}

/// Appends one raw line, creating the ledger if needed.
pub fn append_ledger_line(path: &Path, line: &str) -> Result<(), AtnError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| AtnError::from_io("ledger-open", path, err))?;
    writeln!(file, "{}", line.trim_end()).map_err(|err| AtnError::from_io("ledger-append", path, err))
}

/// Lines of a ledger, in file order; line `i` belongs to trial `i`.
/// Trailing blank lines are ignored, a blank line between two configs is a
/// `Parse` error.
pub fn read_ledger(path: &Path) -> Result<Vec<String>, AtnError> {
    let text = fs::read_to_string(path).map_err(|err| AtnError::from_io("ledger-read", path, err))?;
    let text = text.trim_end();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    text.lines()
        .enumerate()
        .map(|(index, line)| {
            let line = line.trim();
            if line.is_empty() {
                return Err(AtnError::Parse(
                    ErrorInfo::new("ledger-blank-line", "blank line inside a node-config ledger")
                        .with_context("path", path.display().to_string())
                        .with_context("line", (index + 1).to_string()),
                ));
            }
            Ok(line.to_string())
        })
        .collect()
}
