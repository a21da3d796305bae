use strum_macros::{Display, EnumString};

use crate::record::{CodePoint, Property};

/// Unicode Bidi_Class values (UAX #9).
///
/// Code points absent from the compiled table default to `L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[repr(u8)]
pub enum BidiClass {
    L = 0,
    R,
    AL,
    EN,
    ES,
    ET,
    AN,
    CS,
    NSM,
    BN,
    ON,
    LRE,
    LRO,
    RLE,
    RLO,
    PDF,
    LRI,
    RLI,
    FSI,
    PDI,
    S,
    WS,
    B,
}

impl Default for BidiClass {
    fn default() -> BidiClass {
        BidiClass::L
    }
}

impl Property for BidiClass {
    fn from_fields(tag: &str, _mapping: Vec<CodePoint>) -> Option<BidiClass> {
        tag.parse().ok()
    }
}
