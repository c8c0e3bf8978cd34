/// Outcome of a write that targets a single row by id.
///
/// A write that matches no row is not an error: the statement ran, it just
/// had nothing to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The row existed and the statement was applied to it.
    Applied,
    /// No row has the given id.
    Unmatched,
}

impl WriteOutcome {
    /// Builds an outcome from the affected-row count reported by the database.
    pub fn from_rows_affected(rows: usize) -> Self {
        if rows == 0 {
            WriteOutcome::Unmatched
        } else {
            WriteOutcome::Applied
        }
    }

    /// Returns true if a row was written.
    pub fn is_applied(&self) -> bool {
        matches!(self, WriteOutcome::Applied)
    }
}
