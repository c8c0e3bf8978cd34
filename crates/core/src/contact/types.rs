use serde::{Deserialize, Serialize};

/// An address-book entry owned by a single user.
///
/// Field names on the wire match the `Contacts` table columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "ID")]
    pub id: i64,
    /// Owner of the contact. Never changes after creation.
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "PhoneNumber")]
    pub phone_number: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "ZIP")]
    pub zip: String,
    /// Filename of the uploaded profile picture, if any.
    #[serde(rename = "ProfileImage", default)]
    pub profile_image: Option<String>,
}

impl Contact {
    /// Builds a stored contact from its insert payload and the id the store assigned.
    pub fn from_new(id: i64, new: NewContact) -> Self {
        Self {
            id,
            user_id: new.user_id,
            first_name: new.first_name,
            last_name: new.last_name,
            phone_number: new.phone_number,
            address: new.address,
            city: new.city,
            state: new.state,
            zip: new.zip,
            profile_image: None,
        }
    }

    /// Returns "first last", the concatenation keyword search also matches against.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A contact that has not been stored yet.
///
/// This is also the JSON body the new-contact form posts to `contactController`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName", default)]
    pub last_name: String,
    #[serde(rename = "PhoneNumber", default)]
    pub phone_number: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "City", default)]
    pub city: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "ZIP", default)]
    pub zip: String,
    #[serde(rename = "UserID")]
    pub user_id: i64,
}

impl NewContact {
    /// Creates a contact for `user_id` with the given name and blank details.
    pub fn new(user_id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            user_id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Default::default()
        }
    }

    /// Sets the phone number.
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Sets the street address, city, state and ZIP code.
    pub fn with_address(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        self.address = address.into();
        self.city = city.into();
        self.state = state.into();
        self.zip = zip.into();
        self
    }
}
