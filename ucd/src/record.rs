/// A single Unicode code point.
pub type CodePoint = u32;

/// Largest valid code point.
pub const MAX_CODE_POINT: CodePoint = 0x10FFFF;

/// One property assignment covering the inclusive range `start..=end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRecord<A> {
    pub start: CodePoint,
    pub end: CodePoint,
    pub value: A,
}

/// A property value with a closed tag vocabulary.
///
/// `from_fields` turns the textual tag plus the optional mapping payload
/// of a data file line into a value. Tags outside the vocabulary return
/// `None` and the line is skipped.
pub trait Property: Clone + PartialEq + Default {
    fn from_fields(tag: &str, mapping: Vec<CodePoint>) -> Option<Self>;
}

/// Parse one line of the common UCD layout `range ; tag [; mapping]`.
///
/// The range is a hex code point `XXXX` or an inclusive span `XXXX..YYYY`.
/// Returns `None` for blank lines, comments, lines with fewer than two
/// fields, unknown tags and malformed hex fields. None of these abort
/// processing of subsequent lines.
pub fn parse_record<A: Property>(line: &str) -> Option<RangeRecord<A>> {
    let line = strip_comment(line).trim();
    if line.is_empty() {
        return None;
    }

    let mut fields = line.split(';').map(str::trim);
    let range = fields.next()?;
    let tag = fields.next()?;
    let mapping = match fields.next() {
        Some(field) if !field.is_empty() => parse_code_points(field)?,
        _ => Vec::new(),
    };

    let (start, end) = parse_range(range)?;
    let value = A::from_fields(tag, mapping)?;
    Some(RangeRecord { start, end, value })
}

/// Parse a single hex code point field.
pub fn parse_code_point(field: &str) -> Option<CodePoint> {
    match CodePoint::from_str_radix(field, 16) {
        Ok(cp) if cp <= MAX_CODE_POINT => Some(cp),
        _ => {
            log::debug!("dropping record, bad code point field: {field:?}");
            None
        }
    }
}

fn parse_range(field: &str) -> Option<(CodePoint, CodePoint)> {
    let (start, end) = match field.split_once("..") {
        Some((start, end)) => (parse_code_point(start)?, parse_code_point(end)?),
        None => {
            let cp = parse_code_point(field)?;
            (cp, cp)
        }
    };

    if start > end {
        log::debug!("dropping record, range out of order: {field:?}");
        return None;
    }
    Some((start, end))
}

fn parse_code_points(field: &str) -> Option<Vec<CodePoint>> {
    field.split_whitespace().map(parse_code_point).collect()
}

fn strip_comment(line: &str) -> &str {
    match line.split_once('#') {
        Some((data, _)) => data,
        None => line,
    }
}
