use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, ProductFilter, UpdateProduct},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Map a database error to the domain, turning unique-index violations
    /// on sku into [`ProductError::DuplicateSku`]. The service checks for
    /// duplicates up front; this covers racing inserts.
    fn map_write_err(err: sea_orm::DbErr, sku: &str) -> ProductError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                ProductError::DuplicateSku(sku.to_string())
            }
            _ => ProductError::Database(err.to_string()),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let sku = input.sku.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_write_err(e, &sku))?;

        tracing::info!(product_id = model.id, sku = %model.sku, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let mut query = entity::Entity::find();

        if let Some(kind) = filter.kind {
            query = query.filter(entity::Column::Kind.eq(kind));
        }

        if let Some(search) = filter.search {
            query = query.filter(entity::Column::Name.contains(&search));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .limit(filter.limit)
            .offset(filter.offset)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        // Existence check so a missing row maps to NotFound, not a write error
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let sku = input.sku.clone();
        let active_model = entity::ActiveModel {
            id: Set(id),
            name: Set(input.name),
            kind: Set(input.kind),
            sku: Set(input.sku),
            image_url: Set(input.image_url),
            description: Set(input.description),
            quantity: Set(input.quantity),
            price: Set(input.price),
        };

        let updated = entity::Entity::update(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| Self::map_write_err(e, &sku))?;

        tracing::info!(product_id = id, "Updated product");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn exists_by_sku(&self, sku: &str) -> ProductResult<bool> {
        let found = entity::Entity::find()
            .filter(entity::Column::Sku.eq(sku))
            .one(&self.db)
            .await?;
        Ok(found.is_some())
    }
}
