//! Document sorting
//!
//! Sorts documents by a `SortSpec` using the value comparator.
//! Absent fields compare as Missing, so they sort with nulls, first in
//! ascending order. The sort is stable.

use std::cmp::Ordering;

use super::errors::SortResult;
use super::spec::{SortDirection, SortSpec};
use crate::compare::{ComparatorResult, ValueComparator};
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::value::{Document, Value};

/// Sorts documents and values
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSorter {
    comparator: ValueComparator,
}

impl DocumentSorter {
    /// Creates a sorter backed by the given comparator
    pub fn new(comparator: ValueComparator) -> Self {
        Self { comparator }
    }

    /// Sorts documents according to the sort specification.
    ///
    /// The first comparator error aborts the sort and leaves the slice in
    /// its input order.
    pub fn sort(&self, documents: &mut [Document], spec: &SortSpec) -> SortResult<()> {
        match try_sort_by(documents, |a, b| self.compare(a, b, spec)) {
            Ok(()) => {
                if Logger::enabled(Event::SortComplete.severity()) {
                    let count = documents.len().to_string();
                    log_event_with_fields(Event::SortComplete, &[("documents", count.as_str())]);
                }
                Ok(())
            }
            Err(err) => {
                log_event_with_fields(
                    Event::SortAborted,
                    &[("code", err.code().code()), ("reason", err.message())],
                );
                Err(err.into())
            }
        }
    }

    /// Compares two documents under a sort specification
    pub fn compare(
        &self,
        a: &Document,
        b: &Document,
        spec: &SortSpec,
    ) -> ComparatorResult<Ordering> {
        for key in spec.keys() {
            let ordering = self
                .comparator
                .compare(a.get_path(&key.field), b.get_path(&key.field))?;

            let ordering = match key.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return Ok(ordering);
            }
        }
        Ok(Ordering::Equal)
    }

    /// Sorts plain values ascending
    pub fn sort_values(&self, values: &mut [Value]) -> ComparatorResult<()> {
        try_sort_by(values, |a, b| self.comparator.compare(a, b))
    }
}

/// Sorts values ascending with the default comparator
pub fn sort_values(values: &mut [Value]) -> ComparatorResult<()> {
    DocumentSorter::default().sort_values(values)
}

/// Stable sort with a fallible comparison.
///
/// Sorts a permutation of indices first so that an error leaves `items`
/// untouched.
fn try_sort_by<T, E, F>(items: &mut [T], mut compare: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let mut order: Vec<usize> = (0..items.len()).collect();
    {
        let view: &[T] = items;
        merge_sort(&mut order, &mut |i, j| compare(&view[i], &view[j]))?;
    }
    apply_permutation(items, order);
    Ok(())
}

fn merge_sort<E, F>(indices: &mut Vec<usize>, compare: &mut F) -> Result<(), E>
where
    F: FnMut(usize, usize) -> Result<Ordering, E>,
{
    let len = indices.len();
    if len <= 1 {
        return Ok(());
    }

    let mut right = indices.split_off(len / 2);
    merge_sort(indices, compare)?;
    merge_sort(&mut right, compare)?;

    let left = std::mem::take(indices);
    indices.reserve(len);

    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        // Take from the right only when strictly smaller, keeping equal
        // elements in their original order
        if compare(right[j], left[i])? == Ordering::Less {
            indices.push(right[j]);
            j += 1;
        } else {
            indices.push(left[i]);
            i += 1;
        }
    }
    indices.extend_from_slice(&left[i..]);
    indices.extend_from_slice(&right[j..]);
    Ok(())
}

/// Moves `items[order[k]]` to position `k` by following swap cycles
fn apply_permutation<T>(items: &mut [T], mut order: Vec<usize>) {
    for start in 0..items.len() {
        if order[start] == start {
            continue;
        }
        let mut k = start;
        loop {
            let source = order[k];
            order[k] = k;
            if source == start {
                break;
            }
            items.swap(k, source);
            k = source;
        }
    }
}
