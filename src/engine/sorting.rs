//! Total ordering and page slicing for display.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::types::ProgramRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Keeps the order the filter produced. There is no relevance score
    /// beyond the boolean match threshold; this is an explicit limitation.
    Relevance,
    /// Program name ascending, blanks last. Stable.
    Name,
    /// Parsed last-checked date descending, unparseable dates last. Stable.
    LastChecked,
}

pub fn sort_records(records: &mut [&ProgramRecord], mode: SortMode) {
    match mode {
        SortMode::Relevance => {}
        SortMode::Name => {
            records.sort_by(|a, b| {
                let a_name = &a.raw.program_name;
                let b_name = &b.raw.program_name;
                match (a_name.is_empty(), b_name.is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => a_name.cmp(b_name),
                }
            });
        }
        SortMode::LastChecked => {
            records.sort_by(|a, b| match (a.last_checked, b.last_checked) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
        }
    }
}

/// Pagination metadata for rendering "N Programs Found" and page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// The clamped page index actually returned.
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    pub start: usize,
    pub end: usize,
}

/// Slice out one zero-indexed page, clamping the requested index to the
/// last valid page. A page size of zero is treated as one.
pub fn paginate<'a>(
    records: &'a [&'a ProgramRecord],
    page_size: usize,
    page: usize,
) -> (&'a [&'a ProgramRecord], PageInfo) {
    let page_size = page_size.max(1);
    let total = records.len();
    let page_count = if total == 0 {
        1
    } else {
        total.div_ceil(page_size)
    };
    let page = page.min(page_count - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total);

    (
        &records[start..end],
        PageInfo {
            page,
            page_count,
            total,
            start,
            end,
        },
    )
}
