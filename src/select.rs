//! Selector: evaluate a compiled query against records.
//!
//! Conditions are folded into an accumulator that starts at `false` for
//! [`Mode::Any`] and `true` for [`Mode::All`]. A query with no conditions
//! therefore selects nothing under `any` and everything under `all`.

use crate::Record;
use crate::query::{Mode, Query};

/// Does `record` satisfy `query`?
pub fn matches(record: &Record, query: &Query) -> bool {
    let conditions = query.conditions().iter().map(|c| c.test(record.get(&c.field)));
    match query.mode() {
        Mode::Any => conditions.fold(false, |acc, hit| acc || hit),
        Mode::All => conditions.fold(true, |acc, hit| acc && hit),
    }
}

/// Keep the records matching `query`, in input order.
pub fn select<I>(records: I, query: &Query) -> Vec<Record>
where
    I: IntoIterator<Item = Record>,
{
    records.into_iter().filter(|r| matches(r, query)).collect()
}

/// Borrowing form of [`select`].
pub fn select_ref<'a>(records: &'a [Record], query: &Query) -> Vec<&'a Record> {
    records.iter().filter(|r| matches(r, query)).collect()
}
