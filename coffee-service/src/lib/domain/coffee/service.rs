use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::coffee::errors::CoffeeError;
use crate::domain::coffee::models::Coffee;
use crate::domain::coffee::models::CoffeeId;
use crate::domain::coffee::models::CreateCoffeeCommand;
use crate::domain::coffee::models::Slug;
use crate::domain::coffee::models::UpdateCoffeeCommand;
use crate::domain::coffee::ports::CoffeeRepository;
use crate::domain::coffee::ports::CoffeeServicePort;

/// Domain service implementation for catalog operations.
pub struct CoffeeService<CR>
where
    CR: CoffeeRepository,
{
    repository: Arc<CR>,
}

impl<CR> CoffeeService<CR>
where
    CR: CoffeeRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CoffeeServicePort for CoffeeService<CR>
where
    CR: CoffeeRepository,
{
    async fn create_coffee(&self, command: CreateCoffeeCommand) -> Result<Coffee, CoffeeError> {
        let now = Utc::now();

        let coffee = Coffee {
            id: CoffeeId::new(),
            name: command.name,
            slug: command.slug,
            description: command.description,
            price: command.price,
            image: command.image,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(coffee).await
    }

    async fn get_coffee(&self, slug: &Slug) -> Result<Coffee, CoffeeError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or(CoffeeError::NotFound(slug.to_string()))
    }

    async fn list_coffees(&self) -> Result<Vec<Coffee>, CoffeeError> {
        self.repository.list_all().await
    }

    async fn update_coffee(
        &self,
        slug: &Slug,
        command: UpdateCoffeeCommand,
    ) -> Result<Coffee, CoffeeError> {
        let mut coffee = self
            .repository
            .find_by_slug(slug)
            .await?
            .ok_or(CoffeeError::NotFound(slug.to_string()))?;

        if let Some(name) = command.name {
            coffee.name = name;
        }
        if let Some(description) = command.description {
            coffee.description = description;
        }
        if let Some(price) = command.price {
            coffee.price = price;
        }
        if let Some(image) = command.image {
            coffee.image = Some(image);
        }
        coffee.updated_at = Utc::now();

        self.repository.update(coffee).await
    }

    async fn delete_coffee(&self, slug: &Slug) -> Result<(), CoffeeError> {
        self.repository.delete(slug).await
    }
}
