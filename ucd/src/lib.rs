//! Compiles Unicode Character Database property records into sorted,
//! non-overlapping interval tables and answers point queries over them
//! with binary search.

mod bidi;
mod joining;
mod mapping;
mod record;
mod table;
mod unicode_data;

pub use bidi::BidiClass;
pub use joining::JoiningType;
pub use mapping::{Mapping, MappingStatus};
pub use record::{parse_code_point, parse_record, CodePoint, Property, RangeRecord, MAX_CODE_POINT};
pub use table::{CompiledSet, CompiledTable};
pub use unicode_data::{combining_class, CCC_VIRAMA};
