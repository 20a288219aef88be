use async_trait::async_trait;

use crate::domain::event::errors::EventError;
use crate::domain::event::models::Event;
use crate::domain::event::models::EventDetails;
use crate::domain::event::models::EventId;
use crate::domain::event::models::NewEvent;
use crate::domain::event::models::OwnedEvent;
use crate::domain::user::models::UserId;

/// Port for event domain service operations.
///
/// Reads are public. Mutations of an existing event go through
/// [`authorize_owner`](EventServicePort::authorize_owner) first.
#[async_trait]
pub trait EventServicePort: Send + Sync + 'static {
    /// Create an event owned by `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_event(&self, details: EventDetails, owner: UserId)
        -> Result<Event, EventError>;

    /// All events in storage order.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_events(&self) -> Result<Vec<Event>, EventError>;

    /// # Errors
    /// * `NotFound` - Event does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_event(&self, id: EventId) -> Result<Event, EventError>;

    /// Fetch an event and check that `requester` owns it.
    ///
    /// # Errors
    /// * `NotFound` - Event does not exist
    /// * `NotOwner` - Event belongs to another user
    /// * `DatabaseError` - Database operation failed
    async fn authorize_owner(
        &self,
        id: EventId,
        requester: UserId,
    ) -> Result<OwnedEvent, EventError>;

    /// Overwrite name, description, location and date/time.
    ///
    /// # Returns
    /// The event as stored after the update
    ///
    /// # Errors
    /// * `NotFound` - Event was deleted after authorization
    /// * `DatabaseError` - Database operation failed
    async fn update_event(
        &self,
        event: OwnedEvent,
        details: EventDetails,
    ) -> Result<Event, EventError>;

    /// # Errors
    /// * `NotFound` - Event was deleted after authorization
    /// * `DatabaseError` - Database operation failed
    async fn delete_event(&self, event: OwnedEvent) -> Result<(), EventError>;

    /// Register `user` for an existing event.
    ///
    /// Registering twice stores two registrations.
    ///
    /// # Errors
    /// * `NotFound` - Event does not exist
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, id: EventId, user: UserId) -> Result<(), EventError>;

    /// Remove `user`'s registration; succeeds when there is none.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn cancel_registration(&self, id: EventId, user: UserId) -> Result<(), EventError>;
}

/// Persistence operations for events and registrations.
///
/// Performs no authorization: callers check ownership before `update` and `delete`.
#[async_trait]
pub trait EventRepository: Send + Sync + 'static {
    /// Insert an event and return it with its assigned id.
    async fn create(&self, event: NewEvent) -> Result<Event, EventError>;

    async fn list_all(&self) -> Result<Vec<Event>, EventError>;

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventError>;

    /// Overwrite the editable fields of `event.id`.
    ///
    /// # Errors
    /// * `NotFound` - No row has that id
    async fn update(&self, event: &Event) -> Result<(), EventError>;

    /// # Errors
    /// * `NotFound` - No row has that id
    async fn delete(&self, id: EventId) -> Result<(), EventError>;

    async fn add_registration(&self, event_id: EventId, user_id: UserId)
        -> Result<(), EventError>;

    /// Delete matching registrations; deleting nothing is not an error.
    async fn remove_registration(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<(), EventError>;
}
