//! API request types for contact operations.
//!
//! These types are shared between the server and client for type-safe API communication.

use serde::{Deserialize, Serialize};

use super::types::Contact;

/// Request payload for updating a contact.
///
/// Only the fields that are present are changed. The owner and the profile
/// image cannot be changed through this request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateContactRequest {
    #[serde(rename = "FirstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "PhoneNumber", default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(rename = "Address", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "City", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "ZIP", default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl UpdateContactRequest {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Applies the supplied fields to an existing contact.
    pub fn apply_to(self, contact: &mut Contact) {
        if let Some(first_name) = self.first_name {
            contact.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            contact.last_name = last_name;
        }
        if let Some(phone_number) = self.phone_number {
            contact.phone_number = phone_number;
        }
        if let Some(address) = self.address {
            contact.address = address;
        }
        if let Some(city) = self.city {
            contact.city = city;
        }
        if let Some(state) = self.state {
            contact.state = state;
        }
        if let Some(zip) = self.zip {
            contact.zip = zip;
        }
    }
}

/// Request payload for setting a contact's profile image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileImageRequest {
    #[serde(rename = "ProfileImage")]
    pub profile_image: String,
}

/// Query parameters for listing or searching a user's contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactQuery {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    /// Keyword to search for. Lists every contact when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}
