use super::*;

use crate::prelude::Contact;
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_PATH: &str = "contacts.json";

pub struct JsonStorage {
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactStore for JsonStorage {
    fn load(&self) -> Result<ContactBook, AppError> {
        if !fs::exists(&self.path)? {
            tracing::debug!(path = %self.path.display(), "no contacts file yet");
            return Ok(ContactBook::new());
        }

        let data = fs::read_to_string(&self.path)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(ContactBook::new());
        }

        let value: Value = serde_json::from_str(&data)?;

        let records = match value {
            Value::Object(records) => records,
            other => {
                return Err(AppError::InvalidFormat(format!(
                    "expected an object of contacts, found {}",
                    describe(&other)
                )));
            }
        };

        // A bad record costs only that record, never its siblings.
        let mut contacts = ContactBook::new();
        for (name, record) in records {
            if !record.is_object() {
                tracing::warn!(%name, "skipping contact: record is {}", describe(&record));
                continue;
            }
            match serde_json::from_value::<Contact>(record) {
                Ok(contact) => {
                    contacts.insert(name, contact);
                }
                Err(e) => tracing::warn!(%name, error = %e, "skipping unreadable contact"),
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "loaded contacts"
        );
        Ok(contacts)
    }

    fn save(&self, contacts: &ContactBook) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut data = serde_json::to_string_pretty(contacts)?;
        data.push('\n');

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(data.as_bytes())?;

        tracing::debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "saved contacts"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> JsonStorage {
        JsonStorage::new(dir.path().join("contacts.json"))
    }

    #[test]
    fn missing_file_loads_empty() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let storage = storage_in(&dir);

        assert!(storage.load()?.is_empty());
        assert!(!storage.path.exists());
        Ok(())
    }

    #[test]
    fn saved_contacts_load_back_unchanged() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let storage = storage_in(&dir);

        let mut contacts = ContactBook::new();
        contacts.insert("Anna".to_string(), Contact::new("555-1234", "anna@example.com"));
        contacts.insert("Bob".to_string(), Contact::new("", ""));

        storage.save(&contacts)?;

        assert_eq!(storage.load()?, contacts);
        Ok(())
    }

    #[test]
    fn saves_pretty_printed_with_unicode_unescaped() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let storage = storage_in(&dir);

        let mut contacts = ContactBook::new();
        contacts.insert("Zoë".to_string(), Contact::new("555-1234", "a@b.com"));
        storage.save(&contacts)?;

        let written = fs::read_to_string(&storage.path)?;
        assert_eq!(
            written,
            "{\n  \"Zoë\": {\n    \"phone\": \"555-1234\",\n    \"email\": \"a@b.com\"\n  }\n}\n"
        );
        Ok(())
    }

    #[test]
    fn missing_record_fields_load_as_empty() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let storage = storage_in(&dir);
        fs::write(&storage.path, r#"{"Anna": {"phone": "555"}, "Bob": {}}"#)?;

        let contacts = storage.load()?;

        assert_eq!(contacts["Anna"], Contact::new("555", ""));
        assert_eq!(contacts["Bob"], Contact::default());
        Ok(())
    }

    #[test]
    fn bad_records_are_skipped_and_good_ones_kept() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let storage = storage_in(&dir);
        fs::write(
            &storage.path,
            r#"{
  "Anna": {"phone": "1", "email": "anna@example.com"},
  "Bob": {"phone": 5551234, "email": ""},
  "Carl": "555-0000",
  "Dora": {"phone": ["555"]}
}"#,
        )?;

        let contacts = storage.load()?;

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts["Anna"], Contact::new("1", "anna@example.com"));
        assert_eq!(contacts["Bob"], Contact::new("5551234", ""));
        Ok(())
    }

    #[test]
    fn scalar_file_is_invalid_format() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let storage = storage_in(&dir);
        fs::write(&storage.path, r#""not a json object""#)?;

        let err = storage.load().unwrap_err();

        assert!(matches!(err, AppError::InvalidFormat(_)));
        assert!(err.to_string().contains("found a string"));
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error_and_left_in_place() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let storage = storage_in(&dir);
        fs::write(&storage.path, "{\"Anna\": ")?;

        assert!(matches!(storage.load(), Err(AppError::Json(_))));
        assert_eq!(fs::read_to_string(&storage.path)?, "{\"Anna\": ");
        Ok(())
    }

    #[test]
    fn blank_file_loads_empty() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let storage = storage_in(&dir);
        fs::write(&storage.path, "  \n")?;

        assert!(storage.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn save_creates_missing_parent_directories() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let storage = JsonStorage::new(dir.path().join("nested/deeper/contacts.json"));

        storage.save(&ContactBook::new())?;

        assert_eq!(fs::read_to_string(&storage.path)?, "{}\n");
        Ok(())
    }

    #[test]
    fn save_into_a_directory_path_fails() -> Result<(), AppError> {
        let dir = TempDir::new()?;
        let storage = JsonStorage::new(dir.path());

        assert!(matches!(storage.save(&ContactBook::new()), Err(AppError::Io(_))));
        Ok(())
    }
}
