use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, de::Error};
use serde_json::Value;

/// Contacts keyed by their name. Names are case-sensitive and unique.
pub type ContactBook = BTreeMap<String, Contact>;

/// Shown in place of a phone or email that was never given.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "deserialize_optional_field")]
    pub phone: String,

    #[serde(default, deserialize_with = "deserialize_optional_field")]
    pub email: String,
}

impl Contact {
    pub fn new(phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn phone_or_na(&self) -> &str {
        or_not_available(&self.phone)
    }

    pub fn email_or_na(&self) -> &str {
        or_not_available(&self.email)
    }
}

fn or_not_available(value: &str) -> &str {
    if value.is_empty() { NOT_AVAILABLE } else { value }
}

// Hand-edited files sometimes carry `null` where a field was left out,
// or a phone number typed as a bare number.
fn deserialize_optional_field<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Ok(scalar.to_string()),
        Some(_) => Err(D::Error::custom("expected a string field")),
    }
}
