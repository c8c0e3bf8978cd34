//! The new-contact form.

use contactbook_core::contact::NewContact;

/// Values entered in the new-contact form.
///
/// The owner is not part of the form; it is supplied when the form is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl ContactForm {
    /// Builds the request body for the given owner. Values are sent as entered.
    pub fn to_new_contact(&self, user_id: i64) -> NewContact {
        NewContact {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
            user_id,
        }
    }
}
