use std::error::Error;
use std::fmt;

use serde_json;

use super::geometry::Point;

/// Build-stack marker telling the engine to upgrade the structure at a cell.
pub const UPGRADE: &str = "UP";
/// Build-stack marker scheduling the structure at a cell for removal.
pub const REMOVE: &str = "RM";

/// One queued action: a unit shorthand (or one of the markers above) plus
/// the target cell. The engine receives these as `[code, x, y]` arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnEntry {
    pub code: String,
    pub cell: Point
}

impl SpawnEntry {
    pub fn new(code: &str, cell: Point) -> SpawnEntry {
        SpawnEntry {
            code: code.to_owned(),
            cell
        }
    }
}

impl fmt::Display for SpawnEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at {}", self.code, self.cell)
    }
}

/// Serializes a build or deploy stack to its single-line wire form.
pub fn encode_stack(entries: &[SpawnEntry]) -> Result<String, Box<Error>> {
    let wire: Vec<(&str, u8, u8)> = entries
        .iter()
        .map(|entry| (entry.code.as_str(), entry.cell.x, entry.cell.y))
        .collect();
    Ok(serde_json::to_string(&wire)?)
}
