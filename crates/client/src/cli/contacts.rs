//! Contact CLI commands.

use clap::{Args, Parser, Subcommand};

use contactbook_core::contact::UpdateContactRequest;

use crate::form::ContactForm;

/// Contact management commands.
#[derive(Debug, Parser)]
pub struct ContactsCommand {
    #[command(subcommand)]
    pub action: ContactsAction,
}

/// Fields of the new-contact form.
#[derive(Debug, Args)]
pub struct FormArgs {
    /// First name.
    #[arg(long)]
    pub first_name: String,
    /// Last name.
    #[arg(long, default_value = "")]
    pub last_name: String,
    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Street address.
    #[arg(long, default_value = "")]
    pub address: String,
    /// City.
    #[arg(long, default_value = "")]
    pub city: String,
    /// State.
    #[arg(long, default_value = "")]
    pub state: String,
    /// ZIP code.
    #[arg(long, default_value = "")]
    pub zip: String,
}

impl From<FormArgs> for ContactForm {
    fn from(args: FormArgs) -> Self {
        ContactForm {
            first_name: args.first_name,
            last_name: args.last_name,
            phone_number: args.phone,
            address: args.address,
            city: args.city,
            state: args.state,
            zip: args.zip,
        }
    }
}

/// Fields to change on an existing contact. Omitted fields are left as they are.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip: Option<String>,
}

impl From<UpdateArgs> for UpdateContactRequest {
    fn from(args: UpdateArgs) -> Self {
        UpdateContactRequest {
            first_name: args.first_name,
            last_name: args.last_name,
            phone_number: args.phone,
            address: args.address,
            city: args.city,
            state: args.state,
            zip: args.zip,
        }
    }
}

/// Available contact actions.
#[derive(Debug, Subcommand)]
pub enum ContactsAction {
    /// Submit the new-contact form.
    Create(FormArgs),
    /// List the user's contacts.
    List,
    /// Search the user's contacts by keyword.
    Search {
        /// Keyword matched against names, phone number and address.
        keyword: String,
        /// Treat `%` and `_` in the keyword literally.
        #[arg(long)]
        literal: bool,
    },
    /// Get contact by ID.
    Get {
        /// Contact ID.
        id: i64,
    },
    /// Update contact fields.
    Update {
        /// Contact ID.
        id: i64,
        #[command(flatten)]
        fields: UpdateArgs,
    },
    /// Delete contact by ID.
    Delete {
        /// Contact ID.
        id: i64,
    },
    /// Set the profile image filename of a contact.
    Image {
        /// Contact ID.
        id: i64,
        /// Image filename.
        filename: String,
    },
}
