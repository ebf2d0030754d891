//! Election entity identified by its year.

/// An election as stored in the `election` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Election {
    pub id: i32,
    pub year: i32,
}

impl Election {
    /// Creates a new Election instance.
    pub fn new(id: i32, year: i32) -> Self {
        Self { id, year }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_election_creation() {
        let election = Election::new(1, 2024);

        assert_eq!(election.id, 1);
        assert_eq!(election.year, 2024);
    }
}
