use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::collections::contiguous::{DynArray, dyn_array::IndexOutOfBounds};

/// A cheaply cloneable, shared record of teardown stages, in the order they
/// ran.
#[derive(Debug, Clone, Default)]
pub struct TeardownLog {
    stages: Rc<RefCell<Vec<&'static str>>>,
}

impl TeardownLog {
    pub fn new() -> TeardownLog {
        TeardownLog::default()
    }

    /// Appends a stage name; called from each level's `Drop`.
    pub fn record(&self, stage: &'static str) {
        self.stages.borrow_mut().push(stage);
    }

    /// The stages recorded so far, oldest first.
    pub fn stages(&self) -> Vec<&'static str> {
        self.stages.borrow().clone()
    }
}

/// The base capability level: a named buffer of cells.
#[derive(Debug)]
pub struct CoreStore {
    name: String,
    cells: DynArray<i64>,
    log: TeardownLog,
}

impl CoreStore {
    pub fn new(name: &str, len: usize, log: TeardownLog) -> CoreStore {
        CoreStore {
            name: name.to_owned(),
            cells: DynArray::repeat_default(len),
            log,
        }
    }

    pub fn describe(&self) -> String {
        format!("[core]-[{}]: {} cells", self.name, self.cells.size())
    }

    pub fn cells(&self) -> &DynArray<i64> {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut DynArray<i64> {
        &mut self.cells
    }
}

impl Drop for CoreStore {
    fn drop(&mut self) {
        self.log.record("core");
    }
}

/// The middle level: wraps a [`CoreStore`] and counts every read made
/// through it.
#[derive(Debug)]
pub struct MeteredStore {
    core: CoreStore,
    reads: Cell<usize>,
}

impl MeteredStore {
    pub fn new(name: &str, len: usize, log: TeardownLog) -> MeteredStore {
        MeteredStore {
            core: CoreStore::new(name, len, log),
            reads: Cell::new(0),
        }
    }

    /// Checked cell read; counts towards the read meter even when it fails.
    pub fn read(&self, index: usize) -> Result<i64, IndexOutOfBounds> {
        self.reads.set(self.reads.get() + 1);
        self.core.cells.get(index).copied()
    }

    pub fn write(&mut self, index: usize, value: i64) -> Result<(), IndexOutOfBounds> {
        *self.core.cells.get_mut(index)? = value;
        Ok(())
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn describe(&self) -> String {
        format!("[metered]-[{}]: {} reads", self.core.name, self.reads.get())
    }
}

impl Drop for MeteredStore {
    fn drop(&mut self) {
        self.core.log.record("metered");
    }
}

/// The leaf level: wraps a [`MeteredStore`] and additionally tracks the
/// highest index ever touched.
#[derive(Debug)]
pub struct AuditedStore {
    metered: MeteredStore,
    high_water: Cell<Option<usize>>,
}

impl AuditedStore {
    pub fn new(name: &str, len: usize, log: TeardownLog) -> AuditedStore {
        AuditedStore {
            metered: MeteredStore::new(name, len, log),
            high_water: Cell::new(None),
        }
    }

    pub fn read(&self, index: usize) -> Result<i64, IndexOutOfBounds> {
        let value = self.metered.read(index)?;
        self.touch(index);
        Ok(value)
    }

    pub fn write(&mut self, index: usize, value: i64) -> Result<(), IndexOutOfBounds> {
        self.metered.write(index, value)?;
        self.touch(index);
        Ok(())
    }

    /// The highest index successfully accessed, if any.
    pub fn high_water(&self) -> Option<usize> {
        self.high_water.get()
    }

    pub fn describe(&self) -> String {
        format!(
            "[audited]-[{}]: {} reads, high water {:?}",
            self.metered.core.name,
            self.metered.reads(),
            self.high_water.get()
        )
    }

    fn touch(&self, index: usize) {
        let high = self.high_water.get().map_or(index, |h| h.max(index));
        self.high_water.set(Some(high));
    }
}

impl Drop for AuditedStore {
    fn drop(&mut self) {
        self.metered.core.log.record("audited");
    }
}

/// The closed set of capability levels, owned behind one type.
///
/// Dropping a `Store` tears its level down leaf to base: an
/// [`AuditedStore`] records `"audited"`, then its [`MeteredStore`] field
/// records `"metered"`, then the innermost [`CoreStore`] records `"core"`.
///
/// # Examples
/// ```
/// # use seq_basics::lifecycle::{AuditedStore, Store, TeardownLog};
/// let log = TeardownLog::new();
/// {
///     let store = Store::Audited(AuditedStore::new("F_BODY", 100, log.clone()));
///     assert!(store.describe().contains("F_BODY"));
/// }
/// assert_eq!(log.stages(), ["audited", "metered", "core"]);
/// ```
#[derive(Debug)]
pub enum Store {
    Core(CoreStore),
    Metered(MeteredStore),
    Audited(AuditedStore),
}

impl Store {
    /// Describes the store at whichever level it is owned.
    pub fn describe(&self) -> String {
        match self {
            Store::Core(core) => core.describe(),
            Store::Metered(metered) => metered.describe(),
            Store::Audited(audited) => audited.describe(),
        }
    }
}
