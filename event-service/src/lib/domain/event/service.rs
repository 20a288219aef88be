use std::sync::Arc;

use async_trait::async_trait;

use super::errors::EventError;
use super::models::Event;
use super::models::EventDetails;
use super::models::EventId;
use super::models::NewEvent;
use super::models::OwnedEvent;
use super::ports::EventRepository;
use super::ports::EventServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of EventServicePort.
///
/// Generic over repository for testability.
pub struct EventService<ER>
where
    ER: EventRepository,
{
    event_repository: Arc<ER>,
}

impl<ER> EventService<ER>
where
    ER: EventRepository,
{
    pub fn new(event_repository: Arc<ER>) -> Self {
        Self { event_repository }
    }
}

#[async_trait]
impl<ER> EventServicePort for EventService<ER>
where
    ER: EventRepository + 'static,
{
    async fn create_event(
        &self,
        details: EventDetails,
        owner: UserId,
    ) -> Result<Event, EventError> {
        let event = self
            .event_repository
            .create(NewEvent {
                details,
                owner_id: owner,
            })
            .await?;

        tracing::info!(event_id = %event.id, owner_id = %owner, "Event created");

        Ok(event)
    }

    async fn list_events(&self) -> Result<Vec<Event>, EventError> {
        self.event_repository.list_all().await
    }

    async fn get_event(&self, id: EventId) -> Result<Event, EventError> {
        self.event_repository
            .find_by_id(id)
            .await?
            .ok_or(EventError::NotFound(id))
    }

    async fn authorize_owner(
        &self,
        id: EventId,
        requester: UserId,
    ) -> Result<OwnedEvent, EventError> {
        let event = self.get_event(id).await?;

        OwnedEvent::claim(event, requester).map_err(|e| {
            tracing::warn!(event_id = %id, user_id = %requester, "Ownership check failed");
            e
        })
    }

    async fn update_event(
        &self,
        event: OwnedEvent,
        details: EventDetails,
    ) -> Result<Event, EventError> {
        let updated = event.with_details(details);
        self.event_repository.update(&updated).await?;

        tracing::info!(event_id = %updated.id, "Event updated");

        Ok(updated)
    }

    async fn delete_event(&self, event: OwnedEvent) -> Result<(), EventError> {
        self.event_repository.delete(event.id()).await?;

        tracing::info!(event_id = %event.id(), "Event deleted");

        Ok(())
    }

    async fn register(&self, id: EventId, user: UserId) -> Result<(), EventError> {
        let event = self.get_event(id).await?;

        self.event_repository
            .add_registration(event.id, user)
            .await
    }

    async fn cancel_registration(&self, id: EventId, user: UserId) -> Result<(), EventError> {
        self.event_repository.remove_registration(id, user).await
    }
}
