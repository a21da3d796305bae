//! Renders compiled tables into self-contained Rust modules: the enum
//! declaration, the static interval table and the lookup functions.

use unidna_ucd::{BidiClass, CompiledSet, CompiledTable, JoiningType, Mapping};

// Variant names in discriminant order, matching the enums in unidna-ucd.
const BIDI_VARIANTS: &[&str] = &[
    "L", "R", "AL", "EN", "ES", "ET", "AN", "CS", "NSM", "BN", "ON", "LRE", "LRO", "RLE", "RLO",
    "PDF", "LRI", "RLI", "FSI", "PDI", "S", "WS", "B",
];

const JOINING_VARIANTS: &[&str] = &["U", "L", "R", "D", "T", "C"];

const MAPPING_VARIANTS: &[&str] = &[
    "Valid",
    "Ignored",
    "Mapped",
    "Deviation",
    "Disallowed",
    "DisallowedStd3Valid",
    "DisallowedStd3Mapped",
];

const SEARCH_FN: &str = "\
fn search(table: &[(u32, u32, u8)], cp: u32) -> Option<u8> {
    use std::cmp::Ordering;

    let pos = table
        .binary_search_by(|&(start, end, _)| {
            if cp < start {
                Ordering::Greater
            } else if cp > end {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
        .ok()?;
    Some(table[pos].2)
}
";

pub fn bidi_module(table: &CompiledTable<BidiClass>) -> String {
    let mut out = header("DerivedBidiClass.txt");
    push_enum(&mut out, "BidiClass", BIDI_VARIANTS);

    out.push_str("pub static BIDI_CLASS: &[(u32, u32, u8)] = &[\n");
    for rec in table.entries() {
        out.push_str(&format!(
            "    (0x{:04X}, 0x{:04X}, {}),\n",
            rec.start, rec.end, rec.value as u8
        ));
    }
    out.push_str("];\n\n");

    out.push_str(
        "\
pub fn bidi_class(cp: u32) -> BidiClass {
    match search(BIDI_CLASS, cp) {
        // SAFETY: the table stores discriminants of the repr(u8) enum above
        Some(value) => unsafe { std::mem::transmute(value) },
        None => BidiClass::L,
    }
}

",
    );
    out.push_str(SEARCH_FN);
    out
}

pub fn joining_module(table: &CompiledTable<JoiningType>, viramas: &CompiledSet) -> String {
    let mut out = header("DerivedJoiningType.txt and UnicodeData.txt");
    push_enum(&mut out, "JoiningType", JOINING_VARIANTS);

    out.push_str("pub static JOINING_TYPE: &[(u32, u32, u8)] = &[\n");
    for rec in table.entries() {
        out.push_str(&format!(
            "    (0x{:04X}, 0x{:04X}, {}),\n",
            rec.start, rec.end, rec.value as u8
        ));
    }
    out.push_str("];\n\n");

    out.push_str("pub static VIRAMA: &[u32] = &[\n");
    for cp in viramas.points() {
        out.push_str(&format!("    0x{cp:04X},\n"));
    }
    out.push_str("];\n\n");

    out.push_str(
        "\
pub fn joining_type(cp: u32) -> JoiningType {
    match search(JOINING_TYPE, cp) {
        // SAFETY: the table stores discriminants of the repr(u8) enum above
        Some(value) => unsafe { std::mem::transmute(value) },
        None => JoiningType::U,
    }
}

pub fn is_virama(cp: u32) -> bool {
    VIRAMA.binary_search(&cp).is_ok()
}

",
    );
    out.push_str(SEARCH_FN);
    out
}

pub fn mapping_module(table: &CompiledTable<Mapping>) -> String {
    let mut out = header("IdnaMappingTable.txt");
    push_enum(&mut out, "MappingStatus", MAPPING_VARIANTS);

    out.push_str("pub static IDNA_MAPPING: &[(u32, u32, u8, &[u32])] = &[\n");
    for rec in table.entries() {
        out.push_str(&format!(
            "    (0x{:04X}, 0x{:04X}, {}, {}),\n",
            rec.start,
            rec.end,
            rec.value.status as u8,
            code_point_slice(&rec.value.to)
        ));
    }
    out.push_str("];\n\n");

    out.push_str(
        "\
pub fn idna_mapping(cp: u32) -> (MappingStatus, &'static [u32]) {
    use std::cmp::Ordering;

    let pos = IDNA_MAPPING.binary_search_by(|&(start, end, _, _)| {
        if cp < start {
            Ordering::Greater
        } else if cp > end {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    });
    match pos {
        Ok(pos) => {
            let (_, _, status, to) = IDNA_MAPPING[pos];
            // SAFETY: the table stores discriminants of the repr(u8) enum above
            (unsafe { std::mem::transmute(status) }, to)
        }
        Err(_) => (MappingStatus::Disallowed, &[]),
    }
}
",
    );
    out
}

fn header(source: &str) -> String {
    format!("// Generated by unidna-gen from {source}. Do not edit.\n\n")
}

fn push_enum(out: &mut String, name: &str, variants: &[&str]) {
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq)]\n");
    out.push_str("#[repr(u8)]\n");
    out.push_str(&format!("pub enum {name} {{\n"));
    for (i, variant) in variants.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!("    {variant} = 0,\n"));
        } else {
            out.push_str(&format!("    {variant},\n"));
        }
    }
    out.push_str("}\n\n");
}

fn code_point_slice(points: &[u32]) -> String {
    if points.is_empty() {
        return "&[]".into();
    }
    let elems: Vec<String> = points.iter().map(|cp| format!("0x{cp:04X}")).collect();
    format!("&[{}]", elems.join(", "))
}

#[cfg(test)]
mod test {
    use super::*;
    use unidna_ucd::{MappingStatus, RangeRecord};

    #[test]
    fn bidi_module_declarations() {
        let table = CompiledTable::compile(vec![RangeRecord {
            start: 0x41,
            end: 0x5A,
            value: BidiClass::L,
        }]);
        let module = bidi_module(&table);
        assert!(module.contains("pub enum BidiClass {"));
        assert!(module.contains("    L = 0,\n"));
        assert!(module.contains("pub static BIDI_CLASS: &[(u32, u32, u8)] = &[\n"));
        assert!(module.contains("    (0x0041, 0x005A, 0),\n"));
        assert!(module.contains("pub fn bidi_class(cp: u32) -> BidiClass {"));
    }

    #[test]
    fn joining_module_declarations() {
        let table = CompiledTable::compile(vec![RangeRecord {
            start: 0x0640,
            end: 0x0640,
            value: JoiningType::C,
        }]);
        let viramas = CompiledSet::compile(vec![0x094D]);
        let module = joining_module(&table, &viramas);
        assert!(module.contains("    (0x0640, 0x0640, 5),\n"));
        assert!(module.contains("pub static VIRAMA: &[u32] = &[\n"));
        assert!(module.contains("    0x094D,\n"));
        assert!(module.contains("pub fn is_virama(cp: u32) -> bool {"));
    }

    #[test]
    fn mapping_module_declarations() {
        let table = CompiledTable::compile(vec![
            RangeRecord {
                start: 0x41,
                end: 0x41,
                value: Mapping {
                    status: MappingStatus::Mapped,
                    to: vec![0x61],
                },
            },
            RangeRecord {
                start: 0x2D,
                end: 0x2D,
                value: Mapping {
                    status: MappingStatus::Valid,
                    to: vec![],
                },
            },
        ]);
        let module = mapping_module(&table);
        assert!(module.contains("    (0x002D, 0x002D, 0, &[]),\n"));
        assert!(module.contains("    (0x0041, 0x0041, 2, &[0x0061]),\n"));
        assert!(module.contains("pub fn idna_mapping(cp: u32) -> (MappingStatus, &'static [u32]) {"));
    }
}
