use strum_macros::{Display, EnumString};

use crate::record::{CodePoint, Property};

/// UTS #46 mapping statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[repr(u8)]
pub enum MappingStatus {
    #[strum(serialize = "valid")]
    Valid = 0,
    #[strum(serialize = "ignored")]
    Ignored,
    #[strum(serialize = "mapped")]
    Mapped,
    #[strum(serialize = "deviation")]
    Deviation,
    #[strum(serialize = "disallowed")]
    Disallowed,
    #[strum(serialize = "disallowed_STD3_valid")]
    DisallowedStd3Valid,
    #[strum(serialize = "disallowed_STD3_mapped")]
    DisallowedStd3Mapped,
}

/// One IDNA mapping table value: a status plus the replacement code
/// points for mapped statuses. The replacement sequence takes part in
/// merge equality, so equal statuses with different replacements stay
/// separate entries.
///
/// Code points absent from the compiled table default to disallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub status: MappingStatus,
    pub to: Vec<CodePoint>,
}

impl Default for Mapping {
    fn default() -> Mapping {
        Mapping {
            status: MappingStatus::Disallowed,
            to: Vec::new(),
        }
    }
}

impl Property for Mapping {
    fn from_fields(tag: &str, mapping: Vec<CodePoint>) -> Option<Mapping> {
        let status = tag.parse().ok()?;
        Some(Mapping {
            status,
            to: mapping,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_tags_parse() {
        assert_eq!(
            "valid".parse::<MappingStatus>().unwrap(),
            MappingStatus::Valid
        );
        assert_eq!(
            "disallowed_STD3_mapped".parse::<MappingStatus>().unwrap(),
            MappingStatus::DisallowedStd3Mapped
        );
        assert!("Valid".parse::<MappingStatus>().is_err());
    }

    #[test]
    fn payload_is_kept() {
        let value = Mapping::from_fields("mapped", vec![0x61, 0x62]).unwrap();
        assert_eq!(value.status, MappingStatus::Mapped);
        assert_eq!(value.to, vec![0x61, 0x62]);
    }

    #[test]
    fn default_is_disallowed() {
        let value = Mapping::default();
        assert_eq!(value.status, MappingStatus::Disallowed);
        assert!(value.to.is_empty());
    }
}
