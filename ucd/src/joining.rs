use strum_macros::{Display, EnumString};

use crate::record::{CodePoint, Property};

/// Unicode Joining_Type values (UAX #44). Both the one letter tags and
/// the long names used in some data files are accepted.
///
/// Code points absent from the compiled table default to `U`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[repr(u8)]
pub enum JoiningType {
    #[strum(serialize = "U", serialize = "Non_Joining")]
    U = 0,
    #[strum(serialize = "L", serialize = "Left_Joining")]
    L,
    #[strum(serialize = "R", serialize = "Right_Joining")]
    R,
    #[strum(serialize = "D", serialize = "Dual_Joining")]
    D,
    #[strum(serialize = "T", serialize = "Transparent")]
    T,
    #[strum(serialize = "C", serialize = "Join_Causing")]
    C,
}

impl Default for JoiningType {
    fn default() -> JoiningType {
        JoiningType::U
    }
}

impl Property for JoiningType {
    fn from_fields(tag: &str, _mapping: Vec<CodePoint>) -> Option<JoiningType> {
        tag.parse().ok()
    }
}
