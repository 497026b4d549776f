//! Domain entities: core data structures

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Normalize a contact name to its canonical key form.
///
/// A letter is uppercased when the preceding character is not a letter and
/// lowercased otherwise, so word boundaries include whitespace, digits and
/// punctuation: `"mary-jane o'neil"` becomes `"Mary-Jane O'Neil"`.
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_is_letter = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }
    result
}

/// A name with its phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Title-cased name, unique within a book
    pub name: String,
    /// Free-form phone number
    pub phone: String,
}

/// Ordered mapping from contact name to phone number.
///
/// Contacts keep insertion order; overwriting a phone keeps the position.
/// `last_record_id` and `records` are legacy fields carried through the
/// persisted file unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressBook {
    pub last_record_id: u64,
    pub records: Vec<String>,
    pub contacts: Vec<Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Check whether a contact exists, ignoring capitalization.
    pub fn contains(&self, name: &str) -> bool {
        self.position(&title_case(name)).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name == key)
    }

    /// Insert a contact or overwrite the phone of an existing one.
    pub fn add_record(&mut self, name: &str, phone: &str) {
        let key = title_case(name);
        match self.position(&key) {
            Some(idx) => self.contacts[idx].phone = phone.to_string(),
            None => self.contacts.push(Contact {
                name: key,
                phone: phone.to_string(),
            }),
        }
    }

    /// Overwrite the phone of an existing contact.
    pub fn change_phone(&mut self, name: &str, phone: &str) -> DomainResult<()> {
        let key = title_case(name);
        let idx = self
            .position(&key)
            .ok_or(DomainError::ContactNotFound(key))?;
        self.contacts[idx].phone = phone.to_string();
        Ok(())
    }

    pub fn get_phone(&self, name: &str) -> DomainResult<&str> {
        let key = title_case(name);
        self.position(&key)
            .map(|idx| self.contacts[idx].phone.as_str())
            .ok_or(DomainError::ContactNotFound(key))
    }

    /// Render the listing shown by the `show` command.
    pub fn show_all_contacts(&self) -> String {
        if self.is_empty() {
            return "No contacts found.".to_string();
        }
        let mut result = String::from("Addressbook:\n");
        for contact in &self.contacts {
            result.push_str(&format!("{}: {}\n", contact.name, contact.phone));
        }
        result
    }
}
