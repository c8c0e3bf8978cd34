//! SQLite schema definitions and SQL query constants.
//!
//! Every value reaches SQLite through a bound parameter. Table and column names
//! follow the `Contacts` table the address book was designed around.

/// SQL statement to create the contacts table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS Contacts (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    FirstName TEXT NOT NULL,
    LastName TEXT NOT NULL,
    PhoneNumber TEXT NOT NULL,
    Address TEXT NOT NULL,
    City TEXT NOT NULL,
    State TEXT NOT NULL,
    ZIP TEXT NOT NULL,
    UserID INTEGER NOT NULL,
    ProfileImage TEXT
);

CREATE INDEX IF NOT EXISTS idx_contacts_user_id ON Contacts(UserID);
"#;

pub const SELECT_CONTACT_BY_ID: &str = r#"
SELECT ID, UserID, FirstName, LastName, PhoneNumber, Address, City, State, ZIP, ProfileImage
FROM Contacts
WHERE ID = ?1
"#;

pub const SELECT_CONTACTS_BY_USER: &str = r#"
SELECT ID, UserID, FirstName, LastName, PhoneNumber, Address, City, State, ZIP, ProfileImage
FROM Contacts
WHERE UserID = ?1
ORDER BY ID
"#;

pub const INSERT_CONTACT: &str = r#"
INSERT INTO Contacts (FirstName, LastName, PhoneNumber, Address, City, State, ZIP, UserID)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

// Never writes UserID or ProfileImage.
pub const UPDATE_CONTACT: &str = r#"
UPDATE Contacts
SET FirstName = ?1, LastName = ?2, PhoneNumber = ?3, Address = ?4, City = ?5, State = ?6, ZIP = ?7
WHERE ID = ?8
"#;

pub const DELETE_CONTACT: &str = r#"
DELETE FROM Contacts
WHERE ID = ?1
"#;

/// Name of the scalar function that lowercases text with Unicode rules.
///
/// Registered on every connection by the repository. SQLite's own `LIKE`
/// only folds ASCII letters.
pub const CASEFOLD_FN: &str = "casefold";

/// `?2` is the `%keyword%` pattern, bound once and reused for every column.
pub const SEARCH_CONTACTS: &str = r#"
SELECT ID, UserID, FirstName, LastName, PhoneNumber, Address, City, State, ZIP, ProfileImage
FROM Contacts
WHERE UserID = ?1
  AND (casefold(FirstName) LIKE casefold(?2) ESCAPE '\'
    OR casefold(LastName) LIKE casefold(?2) ESCAPE '\'
    OR casefold(PhoneNumber) LIKE casefold(?2) ESCAPE '\'
    OR casefold(Address) LIKE casefold(?2) ESCAPE '\'
    OR casefold(City) LIKE casefold(?2) ESCAPE '\'
    OR casefold(State) LIKE casefold(?2) ESCAPE '\'
    OR casefold(ZIP) LIKE casefold(?2) ESCAPE '\'
    OR casefold(FirstName || ' ' || LastName) LIKE casefold(?2) ESCAPE '\')
ORDER BY ID
"#;

pub const UPDATE_PROFILE_IMAGE: &str = r#"
UPDATE Contacts
SET ProfileImage = ?1
WHERE ID = ?2
"#;
