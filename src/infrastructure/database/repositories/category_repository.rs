use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::{db_err, is_unique_violation};
use crate::domain::{Category, CategoryRepositoryInterface, CreateCategoryDto, DomainError, DomainResult};
use crate::infrastructure::database::entities::category;

pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn category_model_to_domain(model: category::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
        description: model.description,
        created_by: model.created_by,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl CategoryRepositoryInterface for SeaOrmCategoryRepository {
    async fn create_category(&self, dto: CreateCategoryDto) -> DomainResult<Category> {
        let now = Utc::now();

        let new_category = category::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(dto.name),
            description: Set(dto.description),
            created_by: Set(dto.created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = new_category.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict("Category already exists".to_string())
            } else {
                db_err(e)
            }
        })?;

        Ok(category_model_to_domain(model))
    }

    async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(category_model_to_domain).collect())
    }

    async fn get_category_by_id(&self, id: &str) -> DomainResult<Option<Category>> {
        let model = category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(category_model_to_domain))
    }
}
