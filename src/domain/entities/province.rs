//! Province entity representing a top-level administrative division.

/// A province as stored in the `province` table.
///
/// `no_of_districts` is the declared district count carried on the row. It is
/// informational only and is never reconciled against the districts actually
/// stored under the province.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Province {
    pub id: i32,
    pub name: String,
    pub no_of_districts: i32,
}

impl Province {
    /// Creates a new Province instance.
    pub fn new(id: i32, name: String, no_of_districts: i32) -> Self {
        Self {
            id,
            name,
            no_of_districts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_province_creation() {
        let province = Province::new(1, "Western".to_string(), 5);

        assert_eq!(province.id, 1);
        assert_eq!(province.name, "Western");
        assert_eq!(province.no_of_districts, 5);
    }
}
