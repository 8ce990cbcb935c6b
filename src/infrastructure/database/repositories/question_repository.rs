use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::db_err;
use crate::domain::{
    CreateQuestionDto, DomainError, DomainResult, ListQuestionsDto, Question,
    QuestionRepositoryInterface, UpdateQuestionDto,
};
use crate::infrastructure::database::entities::{answer, category, question, user};
use crate::shared::PaginatedResult;

pub struct SeaOrmQuestionRepository {
    db: DatabaseConnection,
}

impl SeaOrmQuestionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Row shape for question queries joined with author and category
#[derive(FromQueryResult)]
struct QuestionRow {
    id: String,
    title: String,
    content: String,
    user_id: String,
    category_id: String,
    views: i32,
    votes: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_username: String,
    category_name: String,
}

fn row_to_domain(row: QuestionRow) -> Question {
    Question {
        id: row.id,
        title: row.title,
        content: row.content,
        author_id: row.user_id,
        author_username: row.author_username,
        category_id: row.category_id,
        category_name: row.category_name,
        views: row.views,
        votes: row.votes,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

/// Base select hydrating author username and category name in one query
fn joined() -> sea_orm::Select<question::Entity> {
    question::Entity::find()
        .column_as(user::Column::Username, "author_username")
        .column_as(category::Column::Name, "category_name")
        .join(JoinType::InnerJoin, question::Relation::User.def())
        .join(JoinType::InnerJoin, question::Relation::Category.def())
}

#[async_trait]
impl QuestionRepositoryInterface for SeaOrmQuestionRepository {
    async fn create_question(&self, dto: CreateQuestionDto) -> DomainResult<Question> {
        let now = Utc::now();
        let id = uuid::Uuid::new_v4().to_string();

        let new_question = question::ActiveModel {
            id: Set(id.clone()),
            title: Set(dto.title),
            content: Set(dto.content),
            user_id: Set(dto.author_id),
            category_id: Set(dto.category_id),
            views: Set(0),
            votes: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_question.insert(&self.db).await.map_err(db_err)?;

        // Re-read through the join so author/category names are hydrated
        self.get_question_by_id(&id).await?.ok_or(DomainError::NotFound {
            entity: "Question",
            field: "id",
            value: id,
        })
    }

    async fn list_questions(
        &self,
        dto: ListQuestionsDto,
    ) -> DomainResult<PaginatedResult<Question>> {
        let page = dto.page.unwrap_or(1).max(1);
        let page_size = dto.page_size.unwrap_or(20).clamp(1, 100);

        let mut query = question::Entity::find();

        if let Some(ref category_id) = dto.category_id {
            query = query.filter(question::Column::CategoryId.eq(category_id));
        }
        if let Some(ref search) = dto.search {
            query = query.filter(
                question::Column::Title
                    .contains(search.as_str())
                    .or(question::Column::Content.contains(search.as_str())),
            );
        }

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let offset = ((page - 1) * page_size) as u64;
        let rows = query
            .column_as(user::Column::Username, "author_username")
            .column_as(category::Column::Name, "category_name")
            .join(JoinType::InnerJoin, question::Relation::User.def())
            .join(JoinType::InnerJoin, question::Relation::Category.def())
            .order_by_desc(question::Column::CreatedAt)
            .offset(offset)
            .limit(page_size as u64)
            .into_model::<QuestionRow>()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items: Vec<Question> = rows.into_iter().map(row_to_domain).collect();

        Ok(PaginatedResult::new(items, total, page, page_size))
    }

    async fn list_by_category(&self, category_id: &str) -> DomainResult<Vec<Question>> {
        let rows = joined()
            .filter(question::Column::CategoryId.eq(category_id))
            .order_by_desc(question::Column::CreatedAt)
            .into_model::<QuestionRow>()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(row_to_domain).collect())
    }

    async fn get_question_by_id(&self, id: &str) -> DomainResult<Option<Question>> {
        let row = joined()
            .filter(question::Column::Id.eq(id))
            .into_model::<QuestionRow>()
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(row_to_domain))
    }

    async fn update_question(&self, id: &str, dto: UpdateQuestionDto) -> DomainResult<Question> {
        let existing = question::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Question",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: question::ActiveModel = existing.into();

        if let Some(title) = dto.title {
            active.title = Set(title);
        }
        if let Some(content) = dto.content {
            active.content = Set(content);
        }
        if let Some(category_id) = dto.category_id {
            active.category_id = Set(category_id);
        }
        active.updated_at = Set(Utc::now());

        active.update(&self.db).await.map_err(db_err)?;

        self.get_question_by_id(id).await?.ok_or(DomainError::NotFound {
            entity: "Question",
            field: "id",
            value: id.to_string(),
        })
    }

    async fn delete_question(&self, id: &str) -> DomainResult<()> {
        // Remove dependent answers first, matching the documented contract
        // that deleting a question deletes its answers
        answer::Entity::delete_many()
            .filter(answer::Column::QuestionId.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        let result = question::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Question",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}
