use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use unidna_ucd::{combining_class, parse_record, CodePoint, Property, RangeRecord, CCC_VIRAMA};

/// Load all range records of a `range ; tag [; mapping]` data file.
/// Comment, blank and malformed lines contribute nothing.
pub fn range_records<A: Property>(path: &Path) -> Result<Vec<RangeRecord<A>>> {
    let text = read(path)?;
    Ok(text.lines().filter_map(parse_record::<A>).collect())
}

/// Collect the virama code points (canonical combining class 9) of
/// `UnicodeData.txt`.
pub fn virama_points(path: &Path) -> Result<Vec<CodePoint>> {
    let text = read(path)?;
    let points = text
        .lines()
        .filter_map(combining_class)
        .filter(|(_, ccc)| *ccc == CCC_VIRAMA)
        .map(|(cp, _)| cp)
        .collect();
    Ok(points)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
