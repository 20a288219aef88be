use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::event::errors::EventError;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventDetails;
use crate::domain::event::models::EventId;
use crate::domain::event::models::NewEvent;
use crate::domain::event::ports::EventRepository;
use crate::domain::user::models::UserId;

pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_event(row: PgRow) -> Result<Event, EventError> {
        let details = EventDetails::new(
            row.try_get("name").map_err(database_error)?,
            row.try_get("description").map_err(database_error)?,
            row.try_get("location").map_err(database_error)?,
            row.try_get("date_time").map_err(database_error)?,
        )?;

        Ok(Event {
            id: EventId(row.try_get("id").map_err(database_error)?),
            details,
            owner_id: UserId(row.try_get("user_id").map_err(database_error)?),
        })
    }
}

fn database_error(e: sqlx::Error) -> EventError {
    EventError::DatabaseError(e.to_string())
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn create(&self, event: NewEvent) -> Result<Event, EventError> {
        let row = sqlx::query(
            r#"
            INSERT INTO events (name, description, location, date_time, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(event.details.name())
        .bind(event.details.description())
        .bind(event.details.location())
        .bind(event.details.date_time())
        .bind(event.owner_id.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(Event {
            id: EventId(row.try_get("id").map_err(database_error)?),
            details: event.details,
            owner_id: event.owner_id,
        })
    }

    async fn list_all(&self) -> Result<Vec<Event>, EventError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, location, date_time, user_id
            FROM events
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Self::row_to_event).collect()
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, location, date_time, user_id
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Self::row_to_event).transpose()
    }

    async fn update(&self, event: &Event) -> Result<(), EventError> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET name = $2, description = $3, location = $4, date_time = $5
            WHERE id = $1
            "#,
        )
        .bind(event.id.as_i64())
        .bind(event.details.name())
        .bind(event.details.description())
        .bind(event.details.location())
        .bind(event.details.date_time())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(EventError::NotFound(event.id));
        }

        Ok(())
    }

    async fn delete(&self, id: EventId) -> Result<(), EventError> {
        let result = sqlx::query(
            r#"
            DELETE FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(EventError::NotFound(id));
        }

        Ok(())
    }

    async fn add_registration(&self, event_id: EventId, user_id: UserId) -> Result<(), EventError> {
        sqlx::query(
            r#"
            INSERT INTO registrations (event_id, user_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(event_id.as_i64())
        .bind(user_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn remove_registration(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<(), EventError> {
        sqlx::query(
            r#"
            DELETE FROM registrations
            WHERE event_id = $1 AND user_id = $2
            "#,
        )
        .bind(event_id.as_i64())
        .bind(user_id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }
}
