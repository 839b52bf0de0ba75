//! Instrumented alternatives and logging setup shared by unit tests.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for test output.
///
/// Enable with `RUST_LOG=alt_variant=trace`.
pub(crate) fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

/// Lifetime event counts of every [`Tracked`] value sharing them.
#[derive(Default)]
pub(crate) struct Counters {
    constructed: Cell<usize>,
    cloned: Cell<usize>,
    assigned: Cell<usize>,
    dropped: Cell<usize>,
}

impl Counters {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Counters::default())
    }

    pub(crate) fn constructed(&self) -> usize {
        self.constructed.get()
    }

    pub(crate) fn cloned(&self) -> usize {
        self.cloned.get()
    }

    pub(crate) fn assigned(&self) -> usize {
        self.assigned.get()
    }

    pub(crate) fn dropped(&self) -> usize {
        self.dropped.get()
    }

    /// Values constructed or cloned and not yet dropped.
    pub(crate) fn live(&self) -> usize {
        self.constructed() + self.cloned() - self.dropped()
    }
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

/// A value that records its constructions, clones, in-place assignments
/// and drops.
pub(crate) struct Tracked<T> {
    pub(crate) value: T,
    counters: Rc<Counters>,
}

impl<T> Tracked<T> {
    pub(crate) fn new(value: T, counters: &Rc<Counters>) -> Self {
        bump(&counters.constructed);
        Tracked {
            value,
            counters: Rc::clone(counters),
        }
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        bump(&self.counters.cloned);
        Tracked {
            value: self.value.clone(),
            counters: Rc::clone(&self.counters),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        bump(&self.counters.assigned);
        self.value.clone_from(&source.value);
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        bump(&self.counters.dropped);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

/// A `Clone` whose clone panics, for checking destructive reconstruction.
#[derive(Debug, PartialEq)]
pub(crate) struct PanicOnClone;

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        panic!("clone failed");
    }
}
