use crate::record::{parse_code_point, CodePoint};

/// Canonical combining class of virama characters.
pub const CCC_VIRAMA: u8 = 9;

/// Extract the code point and canonical combining class from one
/// `UnicodeData.txt` line. The ccc is the fourth semicolon field.
/// Short lines and non-numeric ccc fields are skipped.
pub fn combining_class(line: &str) -> Option<(CodePoint, u8)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = line.split(';');
    let cp = fields.next()?.trim();
    let _name = fields.next()?;
    let _category = fields.next()?;
    let ccc = fields.next()?.trim();

    let ccc = ccc.parse().ok()?;
    let cp = parse_code_point(cp)?;
    Some((cp, ccc))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn virama_line() {
        let line = "094D;DEVANAGARI SIGN VIRAMA;Mn;9;NSM;;;;;N;;;;;";
        assert_eq!(combining_class(line), Some((0x094D, CCC_VIRAMA)));
    }

    #[test]
    fn non_virama_line() {
        let line = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;0061;;0061";
        assert_eq!(combining_class(line), Some((0x41, 0)));
    }

    #[test]
    fn skips_short_and_bad_lines() {
        assert!(combining_class("").is_none());
        assert!(combining_class("# comment").is_none());
        assert!(combining_class("0041;NAME;Lu").is_none());
        assert!(combining_class("0041;NAME;Lu;NaN;L").is_none());
        assert!(combining_class("XYZ;NAME;Mn;9;NSM").is_none());
    }
}
