//! Product catalogue service

use serde::Deserialize;
use shared::Product;
use sqlx::{FromRow, SqlitePool};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::RenameInput;

/// Product service for managing the catalogue
#[derive(Clone)]
pub struct ProductService {
    db: SqlitePool,
}

/// Row for product queries
#[derive(Debug, FromRow)]
struct ProductRow {
    product_id: String,
    name: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::new(row.product_id, row.name)
    }
}

/// Form submitted to add a product
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateProductInput {
    #[serde(default)]
    #[validate(custom = "crate::services::not_blank")]
    pub product_id: String,
    #[serde(default)]
    #[validate(custom = "crate::services::not_blank")]
    pub name: String,
}

impl ProductService {
    /// Create a new ProductService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// List all products ordered by name
    pub async fn list_products(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT product_id, name FROM products ORDER BY name ASC, product_id ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Get a product by identifier
    pub async fn get_product(&self, product_id: &str) -> AppResult<Product> {
        sqlx::query_as::<_, ProductRow>(
            "SELECT product_id, name FROM products WHERE product_id = ?",
        )
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .map(Product::from)
        .ok_or_else(|| AppError::NotFound("Product".to_string()))
    }

    /// Whether a product with this identifier exists
    pub async fn product_exists(&self, product_id: &str) -> AppResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM products WHERE product_id = ?)",
        )
        .bind(product_id)
        .fetch_one(&self.db)
        .await?;

        Ok(exists)
    }

    /// Add a product.
    ///
    /// The insert relies on the primary key to reject duplicates, so two
    /// concurrent submissions of the same identifier cannot both succeed.
    pub async fn create_product(&self, input: CreateProductInput) -> AppResult<Product> {
        input.validate()?;
        let product = Product::new(input.product_id.trim(), input.name.trim());

        sqlx::query("INSERT INTO products (product_id, name) VALUES (?, ?)")
            .bind(&product.product_id)
            .bind(&product.name)
            .execute(&self.db)
            .await
            .map_err(|e| AppError::from_insert(e, "Product ID"))?;

        tracing::info!(product_id = %product.product_id, "Product added");
        Ok(product)
    }

    /// Rename a product; the identifier itself never changes
    pub async fn update_product(&self, product_id: &str, input: RenameInput) -> AppResult<Product> {
        // Unknown identifiers are reported before any form problem
        self.get_product(product_id).await?;
        input.validate()?;
        let name = input.name.trim();

        let result = sqlx::query("UPDATE products SET name = ? WHERE product_id = ?")
            .bind(name)
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        tracing::info!(product_id, "Product updated");
        Ok(Product::new(product_id, name))
    }

    /// Delete a product. Movements referring to it are kept.
    pub async fn delete_product(&self, product_id: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE product_id = ?")
            .bind(product_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Product".to_string()));
        }

        tracing::info!(product_id, "Product deleted");
        Ok(())
    }
}
