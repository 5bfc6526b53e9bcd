use std::cell::Cell;
use std::rc::Rc;

use crate::instrument::InstrumentKind;

/// Shared handle to the currently selected instrument.
///
/// Clones point at the same cell: the debug panel keeps one to write, the
/// router keeps one to read. Everything runs on the page's event loop, so
/// `Rc<Cell>` is all the sharing needed.
#[derive(Clone, Debug, Default)]
pub struct InstrumentSelection {
    current: Rc<Cell<InstrumentKind>>,
}

impl InstrumentSelection {
    pub fn new(initial: InstrumentKind) -> Self {
        Self {
            current: Rc::new(Cell::new(initial)),
        }
    }

    pub fn get(&self) -> InstrumentKind {
        self.current.get()
    }

    /// Switch instruments. Returns the previous selection.
    pub fn set(&self, kind: InstrumentKind) -> InstrumentKind {
        self.current.replace(kind)
    }
}
