//! Pretty output formatting.

use contactbook_core::contact::Contact;

use crate::notification::Notification;

/// Format a contact for display.
pub fn format_contact(contact: &Contact) -> String {
    let mut output = format!("{}\n  ID: {}", contact.full_name(), contact.id);
    let fields = [
        ("Phone", &contact.phone_number),
        ("Address", &contact.address),
        ("City", &contact.city),
        ("State", &contact.state),
        ("ZIP", &contact.zip),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            output.push_str(&format!("\n  {label}: {value}"));
        }
    }
    if let Some(image) = &contact.profile_image {
        output.push_str(&format!("\n  Image: {image}"));
    }
    output
}

/// Format contacts for display.
pub fn format_contacts(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }
    let mut output = format!("CONTACTS ({})\n", contacts.len());
    output.push_str(&"-".repeat(40));
    for contact in contacts {
        output.push_str(&format!("\n{}", format_contact(contact)));
        output.push('\n');
    }
    output
}

/// Format a notification as `[level] title message`.
pub fn format_notification(notification: &Notification) -> String {
    format!(
        "[{}] {} {}",
        notification.level.as_str(),
        notification.title,
        notification.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactbook_core::contact::NewContact;

    #[test]
    fn test_format_contact_skips_blank_fields() {
        let contact = Contact::from_new(
            3,
            NewContact::new(7, "Jane", "Doe").with_phone_number("555-1234"),
        );

        assert_eq!(
            format_contact(&contact),
            "Jane Doe\n  ID: 3\n  Phone: 555-1234"
        );
    }

    #[test]
    fn test_format_contacts_empty() {
        assert_eq!(format_contacts(&[]), "No contacts found.");
    }

    #[test]
    fn test_format_contacts_header() {
        let contacts = vec![
            Contact::from_new(1, NewContact::new(7, "Jane", "Doe")),
            Contact::from_new(2, NewContact::new(7, "John", "Roe")),
        ];
        let output = format_contacts(&contacts);

        assert!(output.starts_with("CONTACTS (2)\n"));
        assert!(output.contains("John Roe\n  ID: 2"));
    }

    #[test]
    fn test_format_notification() {
        assert_eq!(
            format_notification(&Notification::contact_created()),
            "[success] Success! Contact created"
        );
        assert_eq!(
            format_notification(&Notification::danger("Bad Request", "Missing field")),
            "[danger] Bad Request Missing field"
        );
    }
}
