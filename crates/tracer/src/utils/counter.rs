//! Process-wide statistics, such as the number of rays cast.
//!
//! Counters are registered lazily by the [counter!] macro on first use, and compiled
//! out without the `counter` feature.

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError,
    },
};

#[derive(Default)]
pub struct CounterU64 {
    atomic: AtomicU64,
}

impl CounterU64 {
    pub const fn new() -> Self {
        Self {
            atomic: AtomicU64::new(0),
        }
    }
    pub fn inc(&self) {
        self.atomic.fetch_add(1, Ordering::Relaxed); // Adding one is associative and commutative
    }
    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

lazy_static::lazy_static! {
    static ref COUNTERS: Mutex<BTreeMap<&'static str, Arc<CounterU64>>> = Mutex::new(BTreeMap::new());
}

/// Returns the counter registered under `descr`, creating it if needed
pub fn insert_counter(descr: &'static str) -> Arc<CounterU64> {
    let mut counters = COUNTERS.lock().unwrap_or_else(PoisonError::into_inner);
    counters
        .entry(descr)
        .or_insert_with(|| Arc::new(CounterU64::new()))
        .clone()
}

/// Current value of every counter, sorted by name
pub fn snapshot() -> Vec<(&'static str, u64)> {
    let counters = COUNTERS.lock().unwrap_or_else(PoisonError::into_inner);
    counters
        .iter()
        .map(|(name, counter)| (*name, counter.value()))
        .collect()
}

pub fn report_counters() {
    for (counter_name, value) in snapshot() {
        log::log!(target: "counter_report", log::Level::Info, "{}: {}", counter_name, value)
    }
}

#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            use $crate::utils::counter::{insert_counter, lazy_static, CounterU64};
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<CounterU64> = insert_counter($descr);
            }
            COUNTER_REF.inc();
        }
    };
}

pub use counter;
// Reexport for ease of use
pub use lazy_static;
