//! District entity belonging to at most one province.

/// A district as stored in the `district` table.
///
/// `province_id` is the resolved parent reference. A district saved with a
/// province id that did not resolve to an existing province carries `None`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct District {
    pub id: i32,
    pub name: String,
    pub province_id: Option<i32>,
}

impl District {
    /// Creates a new District instance.
    pub fn new(id: i32, name: String, province_id: Option<i32>) -> Self {
        Self {
            id,
            name,
            province_id,
        }
    }

    /// Returns true if the district carries a resolved province reference.
    pub fn has_province(&self) -> bool {
        self.province_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_creation() {
        let district = District::new(10, "Colombo".to_string(), Some(1));

        assert_eq!(district.id, 10);
        assert_eq!(district.name, "Colombo");
        assert!(district.has_province());
    }

    #[test]
    fn test_district_without_province() {
        let district = District::new(11, "Orphan".to_string(), None);

        assert!(!district.has_province());
    }
}
