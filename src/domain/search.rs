use crate::domain::contact::{Contact, ContactBook};

/// Case-insensitive substring match of `query` against every contact name.
///
/// Results come back in name order since `ContactBook` is kept sorted.
/// An empty query matches every contact; callers reject blank queries
/// before getting here.
pub fn search_by_name<'a>(contacts: &'a ContactBook, query: &str) -> Vec<(&'a str, &'a Contact)> {
    let query = query.to_lowercase();

    contacts
        .iter()
        .filter(|(name, _)| name.to_lowercase().contains(&query))
        .map(|(name, contact)| (name.as_str(), contact))
        .collect()
}
