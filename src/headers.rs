//! Process-wide record of which test groups have already printed a header.
//!
//! The set only grows for the life of the process. [`reset`] exists so tests
//! can start from a known state. Access goes through a mutex because the
//! harness runs tests on parallel threads.

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

static SEEN_GROUPS: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

fn seen() -> MutexGuard<'static, BTreeSet<String>> {
    // a panic elsewhere cannot leave the set half-updated
    SEEN_GROUPS.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Returns true the first time `group` is claimed in this process.
pub fn claim(group: &str) -> bool {
    let mut groups = seen();
    if groups.contains(group) {
        return false;
    }
    groups.insert(group.to_string())
}

pub fn is_claimed(group: &str) -> bool {
    seen().contains(group)
}

pub fn reset() {
    seen().clear();
}
