//! Reader for kplib-format knapsack instance files.
//!
//! Format: the first non-blank line holds the item count, the second the
//! capacity, followed by one `<profit> <weight>` pair per item. Blank
//! lines are ignored wherever they appear.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::err::InstanceLoadError;
use super::instance::{Instance, Item};

/// Loads a kplib instance from a file path.
///
/// The instance name is the file's base name.
pub fn load_kplib(path: impl AsRef<Path>) -> Result<Instance, InstanceLoadError> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = File::open(path)?;
    read_kplib(name, BufReader::new(file))
}

/// Reads a kplib instance from any buffered reader.
pub fn read_kplib<R: BufRead>(
    name: impl Into<String>,
    reader: R,
) -> Result<Instance, InstanceLoadError> {
    // Keep 1-based line numbers for error reporting; blank lines are
    // skipped but still counted.
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push((index + 1, trimmed.to_owned()));
        }
    }

    let mut rows = lines.iter();
    let (line, text) = rows.next().ok_or(InstanceLoadError::MissingHeader)?;
    let item_count: usize = text
        .parse()
        .map_err(|_| InstanceLoadError::InvalidHeader { line: *line })?;
    let (line, text) = rows.next().ok_or(InstanceLoadError::MissingHeader)?;
    let capacity: u64 = text
        .parse()
        .map_err(|_| InstanceLoadError::InvalidHeader { line: *line })?;

    let mut items = Vec::with_capacity(item_count);
    for (line, text) in rows.take(item_count) {
        let mut fields = text.split_whitespace();
        let (Some(profit), Some(weight), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(InstanceLoadError::InvalidItem { line: *line });
        };
        let profit: u64 = profit
            .parse()
            .map_err(|_| InstanceLoadError::InvalidItem { line: *line })?;
        let weight: u64 = weight
            .parse()
            .map_err(|_| InstanceLoadError::InvalidItem { line: *line })?;
        items.push(Item { profit, weight });
    }

    if items.len() != item_count {
        return Err(InstanceLoadError::MissingItems {
            expected: item_count,
            found: items.len(),
        });
    }

    Ok(Instance::new(name, capacity, items))
}
