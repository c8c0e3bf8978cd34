//! contactbook_client - client and CLI for the contactbook API.

pub mod cli;
pub mod client;
pub mod error;
pub mod form;
pub mod notification;
pub mod output;

pub use client::ContactbookClient;
pub use error::{ClientError, Result};
pub use form::ContactForm;
pub use notification::{Notification, NotificationLevel};
