use super::error::ContactError;
use super::types::NewContact;

/// Validates a contact before it is inserted.
///
/// Only the owner and a first name are required; every other field may be blank.
pub fn validate_new_contact(contact: &NewContact) -> Result<(), ContactError> {
    if contact.user_id <= 0 {
        return Err(ContactError::InvalidUserId(contact.user_id));
    }
    if contact.first_name.trim().is_empty() {
        return Err(ContactError::MissingField("FirstName"));
    }
    Ok(())
}
