use std::cmp::Ordering;

use crate::record::{CodePoint, RangeRecord};

/// A compiled interval table: sorted by `start`, non-overlapping and
/// maximally merged. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTable<A> {
    entries: Vec<RangeRecord<A>>,
}

impl<A: Clone + PartialEq> CompiledTable<A> {
    /// Compile raw records into canonical form.
    ///
    /// Records are stable sorted by `start`, then adjacent records are
    /// coalesced when they carry an equal value and `start == prev.end + 1`.
    /// A gap of even one code point keeps records separate so uncovered
    /// points stay uncovered. Empty input compiles to an empty table.
    pub fn compile(mut records: Vec<RangeRecord<A>>) -> CompiledTable<A> {
        records.sort_by_key(|rec| rec.start);

        let mut entries: Vec<RangeRecord<A>> = Vec::with_capacity(records.len());
        for rec in records {
            match entries.last_mut() {
                Some(cur) => {
                    if rec.start <= cur.end {
                        log::warn!(
                            "overlapping input ranges: {:04X}..{:04X} and {:04X}..{:04X}",
                            cur.start,
                            cur.end,
                            rec.start,
                            rec.end
                        );
                    }
                    if cur.value == rec.value && rec.start == cur.end + 1 {
                        cur.end = rec.end;
                    } else {
                        entries.push(rec);
                    }
                }
                None => entries.push(rec),
            }
        }

        CompiledTable { entries }
    }

    /// Value of the interval containing `cp`, if any.
    #[inline]
    pub fn get(&self, cp: CodePoint) -> Option<&A> {
        let pos = self
            .entries
            .binary_search_by(|rec| {
                if cp < rec.start {
                    Ordering::Greater
                } else if cp > rec.end {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            })
            .ok()?;
        Some(&self.entries[pos].value)
    }

    /// Classify `cp`, falling back to the property default when no
    /// interval contains it. Total over all code points.
    #[inline]
    pub fn classify(&self, cp: CodePoint) -> A
    where
        A: Default,
    {
        self.get(cp).cloned().unwrap_or_default()
    }

    pub fn entries(&self) -> &[RangeRecord<A>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A compiled membership set: strictly ascending distinct code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSet {
    points: Vec<CodePoint>,
}

impl CompiledSet {
    /// Sort and deduplicate raw code points.
    pub fn compile(mut points: Vec<CodePoint>) -> CompiledSet {
        points.sort_unstable();
        points.dedup();
        CompiledSet { points }
    }

    #[inline]
    pub fn contains(&self, cp: CodePoint) -> bool {
        self.points.binary_search(&cp).is_ok()
    }

    pub fn points(&self) -> &[CodePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
