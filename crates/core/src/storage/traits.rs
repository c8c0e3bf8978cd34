use async_trait::async_trait;

use crate::contact::{Contact, NewContact};

use super::{Result, WriteOutcome};

/// Data access for the `Contacts` table.
///
/// Every method is one database round trip. Reads that match nothing return an
/// empty result, and writes that match nothing return [`WriteOutcome::Unmatched`];
/// `Err` is reserved for statements that could not run.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Gets a contact by its ID.
    async fn get_contact(&self, id: i64) -> Result<Option<Contact>>;

    /// Gets every contact owned by a user.
    async fn get_contacts_for_user(&self, user_id: i64) -> Result<Vec<Contact>>;

    /// Stores a new contact and returns the ID assigned to it.
    async fn create_contact(&self, contact: &NewContact) -> Result<i64>;

    /// Overwrites the name, phone number and address fields of a contact.
    ///
    /// The ID, owner and profile image are left untouched.
    async fn update_contact(&self, contact: &Contact) -> Result<WriteOutcome>;

    /// Deletes a contact by its ID.
    async fn delete_contact(&self, id: i64) -> Result<WriteOutcome>;

    /// Finds a user's contacts where any searchable field contains the keyword.
    ///
    /// The keyword is wrapped in `%` wildcards as-is; see
    /// [`crate::contact::escape_like`] for literal matching.
    async fn search_contacts(&self, user_id: i64, keyword: &str) -> Result<Vec<Contact>>;

    /// Sets the profile image filename of a contact.
    async fn save_profile_image(&self, image_filename: &str, id: i64) -> Result<WriteOutcome>;
}
