//! Keyword search helpers.
//!
//! Search is a SQL `LIKE` substring filter. These functions build the bound
//! pattern and evaluate it in memory with the same rules SQLite applies:
//! `%` matches any run of characters, `_` matches exactly one, `\` escapes the
//! next character, and letters compare case-insensitively after Unicode
//! lowercasing of both the pattern and the text.

use super::types::Contact;

/// The character used to escape `%` and `_` in patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Wraps a keyword in `%` wildcards for a substring `LIKE` match.
///
/// `%` and `_` inside the keyword are not escaped and keep their wildcard
/// meaning. Pass the keyword through [`escape_like`] first for a literal match.
pub fn keyword_pattern(keyword: &str) -> String {
    format!("%{keyword}%")
}

/// Escapes `LIKE` metacharacters so the keyword matches literally.
pub fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Any,
    One,
    Literal(char),
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        let token = match c {
            '%' => Token::Any,
            '_' => Token::One,
            c if c == LIKE_ESCAPE => Token::Literal(chars.next().unwrap_or(LIKE_ESCAPE)),
            c => Token::Literal(c),
        };
        // Consecutive `%` behave like a single one.
        if token == Token::Any && tokens.last() == Some(&Token::Any) {
            continue;
        }
        tokens.push(token);
    }
    tokens
}

fn token_matches(token: Token, c: char) -> bool {
    match token {
        Token::Any | Token::One => true,
        Token::Literal(l) => l == c,
    }
}

/// Evaluates a `LIKE` pattern against `text`.
pub fn like_matches(pattern: &str, text: &str) -> bool {
    let tokens = tokenize(&pattern.to_lowercase());
    let chars: Vec<char> = text.to_lowercase().chars().collect();

    let (mut t, mut c) = (0, 0);
    // Position of the last `%` seen and the text index it was resumed from.
    let mut backtrack: Option<(usize, usize)> = None;

    while c < chars.len() {
        match tokens.get(t) {
            Some(Token::Any) => {
                backtrack = Some((t, c));
                t += 1;
            }
            Some(&token) if token_matches(token, chars[c]) => {
                t += 1;
                c += 1;
            }
            _ => match backtrack {
                Some((any_t, any_c)) => {
                    t = any_t + 1;
                    c = any_c + 1;
                    backtrack = Some((any_t, any_c + 1));
                }
                None => return false,
            },
        }
    }

    tokens[t..].iter().all(|token| *token == Token::Any)
}

/// Returns true if any searchable field of the contact matches the pattern.
///
/// The searchable fields are the name, phone number, address, city, state,
/// ZIP code and the "first last" concatenation.
pub fn contact_matches(contact: &Contact, pattern: &str) -> bool {
    [
        contact.first_name.as_str(),
        contact.last_name.as_str(),
        contact.phone_number.as_str(),
        contact.address.as_str(),
        contact.city.as_str(),
        contact.state.as_str(),
        contact.zip.as_str(),
    ]
    .into_iter()
    .any(|field| like_matches(pattern, field))
        || like_matches(pattern, &contact.full_name())
}
