use async_trait::async_trait;

use crate::domain::coffee::errors::CoffeeError;
use crate::domain::coffee::models::Coffee;
use crate::domain::coffee::models::CreateCoffeeCommand;
use crate::domain::coffee::models::Slug;
use crate::domain::coffee::models::UpdateCoffeeCommand;

/// Port for catalog service operations.
#[async_trait]
pub trait CoffeeServicePort: Send + Sync + 'static {
    /// Add a coffee to the catalog.
    ///
    /// # Errors
    /// * `AlreadyExists` - Slug is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_coffee(&self, command: CreateCoffeeCommand) -> Result<Coffee, CoffeeError>;

    /// Retrieve a coffee by slug.
    ///
    /// # Errors
    /// * `NotFound` - No coffee with this slug
    /// * `DatabaseError` - Database operation failed
    async fn get_coffee(&self, slug: &Slug) -> Result<Coffee, CoffeeError>;

    /// List the whole catalog, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_coffees(&self) -> Result<Vec<Coffee>, CoffeeError>;

    /// Update a catalog entry's optional fields.
    ///
    /// # Errors
    /// * `NotFound` - No coffee with this slug
    /// * `DatabaseError` - Database operation failed
    async fn update_coffee(
        &self,
        slug: &Slug,
        command: UpdateCoffeeCommand,
    ) -> Result<Coffee, CoffeeError>;

    /// Remove a coffee from the catalog.
    ///
    /// # Errors
    /// * `NotFound` - No coffee with this slug
    /// * `DatabaseError` - Database operation failed
    async fn delete_coffee(&self, slug: &Slug) -> Result<(), CoffeeError>;
}

/// Persistence operations for the catalog.
#[async_trait]
pub trait CoffeeRepository: Send + Sync + 'static {
    async fn create(&self, coffee: Coffee) -> Result<Coffee, CoffeeError>;

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Coffee>, CoffeeError>;

    async fn list_all(&self) -> Result<Vec<Coffee>, CoffeeError>;

    async fn update(&self, coffee: Coffee) -> Result<Coffee, CoffeeError>;

    async fn delete(&self, slug: &Slug) -> Result<(), CoffeeError>;
}
