use crate::domain::search::search_by_name;
use crate::prelude::{AppError, Contact, ContactBook, ContactStore};
use crate::validation::{is_blank, is_valid_email};

pub struct ContactManager {
    pub mem: ContactBook,
    pub storage: Box<dyn ContactStore>,
}

/// What happened to a single field during an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChange {
    /// Blank input, the stored value stays.
    Kept,
    Replaced,
    /// The new value failed validation, the stored value stays.
    Rejected,
}

#[derive(Debug)]
pub struct AddReport {
    /// The email did not pass validation and was stored empty.
    pub email_discarded: bool,
    pub save_error: Option<AppError>,
}

#[derive(Debug)]
pub struct UpdateReport {
    pub phone: FieldChange,
    pub email: FieldChange,
    pub save_error: Option<AppError>,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>) -> Self {
        Self {
            mem: ContactBook::new(),
            storage,
        }
    }

    /// Replaces the in-memory contacts with what the storage holds.
    ///
    /// A storage that cannot be read leaves the manager empty and hands the
    /// error back so the caller can warn about it; the file itself is not
    /// touched until the next successful save.
    pub fn load(&mut self) -> Result<usize, AppError> {
        match self.storage.load() {
            Ok(contacts) => {
                self.mem = contacts;
                Ok(self.mem.len())
            }
            Err(e) => {
                tracing::warn!(
                    location = %self.storage.location(),
                    error = %e,
                    "could not load contacts, starting empty"
                );
                self.mem.clear();
                Err(e)
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }

    pub fn contact_list(&self) -> &ContactBook {
        &self.mem
    }

    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.mem.get(name)
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        email: &str,
    ) -> Result<AddReport, AppError> {
        if is_blank(name) {
            return Err(AppError::Validation("Contact name cannot be empty".to_string()));
        }

        if self.mem.contains_key(name) {
            return Err(AppError::AlreadyExists(name.to_string()));
        }

        let email_discarded = !email.is_empty() && !is_valid_email(email);
        let email = if email_discarded { "" } else { email };

        self.mem.insert(name.to_string(), Contact::new(phone, email));

        Ok(AddReport {
            email_discarded,
            save_error: self.save_best_effort(),
        })
    }

    pub fn search(&self, query: &str) -> Vec<(&str, &Contact)> {
        search_by_name(&self.mem, query)
    }

    /// Merges new values into the contact stored under exactly `name`.
    /// Blank values keep what is stored; an invalid email is ignored.
    pub fn update_contact(
        &mut self,
        name: &str,
        new_phone: &str,
        new_email: &str,
    ) -> Result<UpdateReport, AppError> {
        let contact = self
            .mem
            .get_mut(name)
            .ok_or_else(|| AppError::NotFound(name.to_string()))?;

        let phone = if new_phone.is_empty() {
            FieldChange::Kept
        } else {
            contact.phone = new_phone.to_string();
            FieldChange::Replaced
        };

        let email = if new_email.is_empty() {
            FieldChange::Kept
        } else if is_valid_email(new_email) {
            contact.email = new_email.to_string();
            FieldChange::Replaced
        } else {
            FieldChange::Rejected
        };

        Ok(UpdateReport {
            phone,
            email,
            save_error: self.save_best_effort(),
        })
    }

    fn save_best_effort(&self) -> Option<AppError> {
        self.save().err().inspect(|e| {
            tracing::warn!(
                location = %self.storage.location(),
                error = %e,
                "could not save contacts"
            );
        })
    }
}
