//! SQLite row conversion functions.

use contactbook_core::contact::Contact;
use rusqlite::Row;

/// Convert a SQLite row to a Contact.
///
/// Expected columns: ID, UserID, FirstName, LastName, PhoneNumber, Address, City, State, ZIP, ProfileImage
pub fn row_to_contact(row: &Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        user_id: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        phone_number: row.get(4)?,
        address: row.get(5)?,
        city: row.get(6)?,
        state: row.get(7)?,
        zip: row.get(8)?,
        profile_image: row.get(9)?,
    })
}
