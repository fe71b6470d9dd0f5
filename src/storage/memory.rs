use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Keeps contacts in memory only. Clones share the same data, so a test can
/// hand one clone to a `ContactManager` and inspect what was saved through
/// the other.
#[derive(Clone, Default)]
pub struct MemStorage {
    data: Rc<RefCell<ContactBook>>,
    saves: Rc<Cell<usize>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: ContactBook) -> Self {
        Self {
            data: Rc::new(RefCell::new(contacts)),
            saves: Rc::default(),
        }
    }

    pub fn snapshot(&self) -> ContactBook {
        self.data.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<ContactBook, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
