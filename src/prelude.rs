pub use crate::cli::{command, run_app, shell::Shell};
pub use crate::domain::{
    contact::{self, Contact, ContactBook},
    manager::{AddReport, ContactManager, FieldChange, UpdateReport},
    search::search_by_name,
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, JsonStorage, MemStorage};
pub use crate::validation::is_valid_email;
