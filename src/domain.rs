pub mod contact;
pub mod manager;
pub mod search;

pub use contact::{Contact, ContactBook};
pub use manager::{AddReport, ContactManager, FieldChange, UpdateReport};

pub enum Command {
    AddContact,
    SearchContacts,
    UpdateContact,
    Exit,
}
