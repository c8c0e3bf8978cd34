//! contactbook-client CLI entry point.

use clap::Parser;
use contactbook_client::cli::contacts::ContactsAction;
use contactbook_client::cli::{Cli, Commands, OutputFormat};
use contactbook_client::output::{format_output, pretty};
use contactbook_client::{ClientError, ContactForm, ContactbookClient};
use contactbook_core::contact::{escape_like, UpdateContactRequest};

fn require_user_id(user_id: Option<i64>) -> Result<i64, ClientError> {
    user_id.ok_or_else(|| {
        ClientError::InvalidInput("--user-id or CONTACTBOOK_USER_ID is required".to_string())
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = ContactbookClient::new(&cli.url_base, &cli.extension);

    match cli.command {
        Commands::Contacts(contacts_cmd) => match contacts_cmd.action {
            ContactsAction::Create(form) => {
                let user_id = require_user_id(cli.user_id)?;
                let notification = client
                    .submit_new_contact(&ContactForm::from(form), user_id)
                    .await?;
                match cli.format {
                    OutputFormat::Json => {
                        println!("{}", format_output(&notification, cli.format))
                    }
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_notification(&notification))
                    }
                }
                if !notification.is_success() {
                    std::process::exit(1);
                }
            }
            ContactsAction::List => {
                let user_id = require_user_id(cli.user_id)?;
                let contacts = client.list_contacts(user_id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&contacts, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_contacts(&contacts)),
                }
            }
            ContactsAction::Search { keyword, literal } => {
                let user_id = require_user_id(cli.user_id)?;
                let keyword = if literal {
                    escape_like(&keyword)
                } else {
                    keyword
                };
                let contacts = client.search_contacts(user_id, &keyword).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&contacts, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_contacts(&contacts)),
                }
            }
            ContactsAction::Get { id } => {
                let contact = client.get_contact(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&contact, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_contact(&contact)),
                }
            }
            ContactsAction::Update { id, fields } => {
                let update = UpdateContactRequest::from(fields);
                if update.is_empty() {
                    return Err(ClientError::InvalidInput(
                        "at least one field to update is required".to_string(),
                    )
                    .into());
                }
                let contact = client.update_contact(id, &update).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&contact, cli.format)),
                    OutputFormat::Pretty => {
                        println!("Updated:\n{}", pretty::format_contact(&contact))
                    }
                }
            }
            ContactsAction::Delete { id } => {
                client.delete_contact(id).await?;
                if !cli.quiet {
                    println!("Deleted contact {}", id);
                }
            }
            ContactsAction::Image { id, filename } => {
                client.save_profile_image(id, &filename).await?;
                if !cli.quiet {
                    println!("Saved profile image {} for contact {}", filename, id);
                }
            }
        },
    }

    Ok(())
}
