use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::db_err;
use crate::domain::{
    Answer, AnswerRepositoryInterface, CreateAnswerDto, DomainError, DomainResult, UpdateAnswerDto,
};
use crate::infrastructure::database::entities::{answer, user};

pub struct SeaOrmAnswerRepository {
    db: DatabaseConnection,
}

impl SeaOrmAnswerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Row shape for answer queries joined with the author
#[derive(FromQueryResult)]
struct AnswerRow {
    id: String,
    content: String,
    user_id: String,
    question_id: String,
    is_accepted: bool,
    votes: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_username: String,
}

fn row_to_domain(row: AnswerRow) -> Answer {
    Answer {
        id: row.id,
        content: row.content,
        author_id: row.user_id,
        author_username: row.author_username,
        question_id: row.question_id,
        is_accepted: row.is_accepted,
        votes: row.votes,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn joined() -> sea_orm::Select<answer::Entity> {
    answer::Entity::find()
        .column_as(user::Column::Username, "author_username")
        .join(JoinType::InnerJoin, answer::Relation::User.def())
}

#[async_trait]
impl AnswerRepositoryInterface for SeaOrmAnswerRepository {
    async fn create_answer(&self, dto: CreateAnswerDto) -> DomainResult<Answer> {
        let now = Utc::now();
        let id = uuid::Uuid::new_v4().to_string();

        let new_answer = answer::ActiveModel {
            id: Set(id.clone()),
            content: Set(dto.content),
            user_id: Set(dto.author_id),
            question_id: Set(dto.question_id),
            is_accepted: Set(false),
            votes: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_answer.insert(&self.db).await.map_err(db_err)?;

        self.get_answer_by_id(&id).await?.ok_or(DomainError::NotFound {
            entity: "Answer",
            field: "id",
            value: id,
        })
    }

    async fn list_for_question(&self, question_id: &str) -> DomainResult<Vec<Answer>> {
        let rows = joined()
            .filter(answer::Column::QuestionId.eq(question_id))
            .order_by_asc(answer::Column::CreatedAt)
            .into_model::<AnswerRow>()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(row_to_domain).collect())
    }

    async fn get_answer_by_id(&self, id: &str) -> DomainResult<Option<Answer>> {
        let row = joined()
            .filter(answer::Column::Id.eq(id))
            .into_model::<AnswerRow>()
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(row.map(row_to_domain))
    }

    async fn update_answer(&self, id: &str, dto: UpdateAnswerDto) -> DomainResult<Answer> {
        let existing = answer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Answer",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: answer::ActiveModel = existing.into();

        if let Some(content) = dto.content {
            active.content = Set(content);
        }
        active.updated_at = Set(Utc::now());

        active.update(&self.db).await.map_err(db_err)?;

        self.get_answer_by_id(id).await?.ok_or(DomainError::NotFound {
            entity: "Answer",
            field: "id",
            value: id.to_string(),
        })
    }

    async fn delete_answer(&self, id: &str) -> DomainResult<()> {
        let result = answer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound {
                entity: "Answer",
                field: "id",
                value: id.to_string(),
            });
        }

        Ok(())
    }
}
