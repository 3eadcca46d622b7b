//! Reconciliation of the two data sources into one authoritative map.

use crate::models::UserDatabase;
use std::collections::btree_map::Entry;

/// Merge the overlay into the baseline.
///
/// For a username present in both, histories are concatenated with the
/// baseline entries first, in stored order; the password hash stays the
/// baseline's. A username only in the overlay is adopted verbatim.
///
/// Entries already present in the baseline (every field equal) are
/// dropped from the overlay side: each mutation persists the whole
/// merged database to the overlay, so without this, rows promoted from
/// the baseline would be counted twice on the next load.
pub fn merge(mut baseline: UserDatabase, overlay: UserDatabase) -> UserDatabase {
    for (username, record) in overlay {
        match baseline.entry(username) {
            Entry::Occupied(mut occupied) => {
                let base = occupied.get_mut();
                extend_new(
                    &mut base.history.kit_calculations,
                    record.history.kit_calculations,
                );
                extend_new(
                    &mut base.history.phone_generations,
                    record.history.phone_generations,
                );
            }
            Entry::Vacant(vacant) => {
                vacant.insert(record);
            }
        }
    }

    baseline
}

fn extend_new<T: PartialEq>(base: &mut Vec<T>, extra: Vec<T>) {
    for entry in extra {
        if !base.contains(&entry) {
            base.push(entry);
        }
    }
}
