mod error;
mod operations;
mod requests;
mod search;
mod types;

pub use error::ContactError;
pub use operations::validate_new_contact;
pub use requests::{ContactQuery, ProfileImageRequest, UpdateContactRequest};
pub use search::{contact_matches, escape_like, keyword_pattern, like_matches};
pub use types::{Contact, NewContact};
