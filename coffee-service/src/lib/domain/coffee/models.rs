use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::coffee::errors::SlugError;

/// Catalog entry for a single coffee product.
#[derive(Debug, Clone)]
pub struct Coffee {
    pub id: CoffeeId,
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub price: f64,
    /// Reference to an already-hosted image; this service does not handle
    /// uploads.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Coffee unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoffeeId(pub Uuid);

impl CoffeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CoffeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CoffeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// URL-safe catalog key, unique per coffee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
    const MAX_LENGTH: usize = 50;

    /// Create a validated slug.
    ///
    /// # Errors
    /// * `Empty` - Slug is empty
    /// * `TooLong` - Slug longer than 50 characters
    /// * `InvalidCharacters` - Anything but lowercase ascii, digits, hyphen
    pub fn new(slug: String) -> Result<Self, SlugError> {
        if slug.is_empty() {
            return Err(SlugError::Empty);
        }
        if slug.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
                actual: slug.len(),
            });
        }
        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SlugError::InvalidCharacters);
        }
        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to add a coffee to the catalog
#[derive(Debug)]
pub struct CreateCoffeeCommand {
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
}

/// Command to update a catalog entry; only provided fields change.
#[derive(Debug, Default)]
pub struct UpdateCoffeeCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slug() {
        let slug = Slug::new("flat-white-2".to_string()).unwrap();
        assert_eq!(slug.as_str(), "flat-white-2");
    }

    #[test]
    fn test_slug_rejects_bad_input() {
        assert_eq!(Slug::new("".to_string()), Err(SlugError::Empty));
        assert_eq!(
            Slug::new("Espresso".to_string()),
            Err(SlugError::InvalidCharacters)
        );
        assert_eq!(
            Slug::new("flat white".to_string()),
            Err(SlugError::InvalidCharacters)
        );
        assert!(matches!(
            Slug::new("x".repeat(51)),
            Err(SlugError::TooLong { .. })
        ));
    }
}
