//! Party entity registered for at most one election.

/// A party as stored in the `party` table.
///
/// `election_id` is the resolved parent reference, `None` when the election
/// id given at save time did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Party {
    pub id: i32,
    pub name: String,
    pub election_id: Option<i32>,
}

impl Party {
    /// Creates a new Party instance.
    pub fn new(id: i32, name: String, election_id: Option<i32>) -> Self {
        Self {
            id,
            name,
            election_id,
        }
    }

    /// Returns true if the party carries a resolved election reference.
    pub fn has_election(&self) -> bool {
        self.election_id.is_some()
    }
}
