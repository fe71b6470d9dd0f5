pub mod json;
pub mod memory;

use crate::prelude::{AppError, ContactBook};
use std::fs;
use std::path::Path;

pub use json::JsonStorage;
pub use memory::MemStorage;

pub trait ContactStore {
    fn load(&self) -> Result<ContactBook, AppError>;

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError>;

    /// Where the contacts live, for log lines and messages.
    fn location(&self) -> String;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
