//! Search filter over an in-memory contact list

use super::Contact;

/// Compute the visible subset of `contacts` for a search term
///
/// Case-insensitive substring match against the phone number, the full
/// name, or the name initials. Order is preserved and the empty term
/// matches everything.
pub fn filter_contacts<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    let term = term.to_lowercase();
    contacts
        .iter()
        .filter(|contact| contact.matches_lowercase(&term))
        .collect()
}
