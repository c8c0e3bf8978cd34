//! JSON output formatting.

/// Format a value as compact JSON.
pub fn format_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactbook_core::contact::{Contact, NewContact};

    #[test]
    fn test_contact_uses_column_names() {
        let contact = Contact::from_new(2, NewContact::new(7, "Jane", "Doe"));
        let json = format_json(&contact);

        assert!(json.starts_with(r#"{"ID":2,"#));
        assert!(json.contains(r#""FirstName":"Jane""#));
        assert!(json.contains(r#""UserID":7"#));
    }
}
