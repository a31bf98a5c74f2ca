use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::coffee::errors::CoffeeError;
use crate::domain::coffee::models::Coffee;
use crate::domain::coffee::models::CoffeeId;
use crate::domain::coffee::models::Slug;
use crate::domain::coffee::ports::CoffeeRepository;

/// Postgres-backed catalog store.
pub struct PostgresCoffeeRepository {
    pool: PgPool,
}

impl PostgresCoffeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn coffee_from_row(row: &PgRow) -> Result<Coffee, CoffeeError> {
        let db = |e: sqlx::Error| CoffeeError::DatabaseError(e.to_string());

        Ok(Coffee {
            id: CoffeeId(row.try_get("id").map_err(db)?),
            name: row.try_get("name").map_err(db)?,
            slug: Slug::new(row.try_get("slug").map_err(db)?)?,
            description: row.try_get("description").map_err(db)?,
            price: row.try_get("price").map_err(db)?,
            image: row.try_get("image").map_err(db)?,
            created_at: row.try_get("created_at").map_err(db)?,
            updated_at: row.try_get("updated_at").map_err(db)?,
        })
    }
}

#[async_trait]
impl CoffeeRepository for PostgresCoffeeRepository {
    async fn create(&self, coffee: Coffee) -> Result<Coffee, CoffeeError> {
        sqlx::query(
            r#"
            INSERT INTO coffees (id, name, slug, description, price, image, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(coffee.id.0)
        .bind(&coffee.name)
        .bind(coffee.slug.as_str())
        .bind(&coffee.description)
        .bind(coffee.price)
        .bind(&coffee.image)
        .bind(coffee.created_at)
        .bind(coffee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return CoffeeError::AlreadyExists(coffee.slug.to_string());
                }
            }
            CoffeeError::DatabaseError(e.to_string())
        })?;

        Ok(coffee)
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Coffee>, CoffeeError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, slug, description, price, image, created_at, updated_at
            FROM coffees
            WHERE slug = $1
            "#,
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CoffeeError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::coffee_from_row(&r)?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Coffee>, CoffeeError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, slug, description, price, image, created_at, updated_at
            FROM coffees
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CoffeeError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::coffee_from_row).collect()
    }

    async fn update(&self, coffee: Coffee) -> Result<Coffee, CoffeeError> {
        let result = sqlx::query(
            r#"
            UPDATE coffees
            SET name = $2, description = $3, price = $4, image = $5, updated_at = $6
            WHERE slug = $1
            "#,
        )
        .bind(coffee.slug.as_str())
        .bind(&coffee.name)
        .bind(&coffee.description)
        .bind(coffee.price)
        .bind(&coffee.image)
        .bind(coffee.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CoffeeError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CoffeeError::NotFound(coffee.slug.to_string()));
        }

        Ok(coffee)
    }

    async fn delete(&self, slug: &Slug) -> Result<(), CoffeeError> {
        let result = sqlx::query("DELETE FROM coffees WHERE slug = $1")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| CoffeeError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CoffeeError::NotFound(slug.to_string()));
        }

        Ok(())
    }
}
