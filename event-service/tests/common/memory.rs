use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use event_service::event::errors::EventError;
use event_service::event::models::Event;
use event_service::event::models::EventId;
use event_service::event::models::NewEvent;
use event_service::event::ports::EventRepository;
use event_service::user::errors::UserError;
use event_service::user::models::EmailAddress;
use event_service::user::models::NewUser;
use event_service::user::models::User;
use event_service::user::models::UserId;
use event_service::user::ports::UserRepository;

/// Users table kept in memory, with the same email uniqueness as Postgres.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        let created = User {
            id: UserId(users.len() as i64 + 1),
            email: user.email,
            password_hash: user.password_hash,
        };
        users.push(created.clone());

        Ok(created)
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }
}

#[derive(Default)]
struct EventTables {
    next_id: i64,
    events: BTreeMap<EventId, Event>,
    registrations: Vec<(EventId, UserId)>,
}

/// Events and registrations kept in memory.
#[derive(Default)]
pub struct InMemoryEventRepository {
    tables: Mutex<EventTables>,
}

impl InMemoryEventRepository {
    pub fn snapshot(&self, id: EventId) -> Option<Event> {
        self.tables.lock().unwrap().events.get(&id).cloned()
    }

    pub fn registrations(&self) -> Vec<(EventId, UserId)> {
        self.tables.lock().unwrap().registrations.clone()
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: NewEvent) -> Result<Event, EventError> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;

        let created = Event {
            id: EventId(tables.next_id),
            details: event.details,
            owner_id: event.owner_id,
        };
        tables.events.insert(created.id, created.clone());

        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<Event>, EventError> {
        Ok(self.tables.lock().unwrap().events.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EventId) -> Result<Option<Event>, EventError> {
        Ok(self.snapshot(id))
    }

    async fn update(&self, event: &Event) -> Result<(), EventError> {
        let mut tables = self.tables.lock().unwrap();

        match tables.events.get_mut(&event.id) {
            Some(stored) => {
                stored.details = event.details.clone();
                Ok(())
            }
            None => Err(EventError::NotFound(event.id)),
        }
    }

    async fn delete(&self, id: EventId) -> Result<(), EventError> {
        let mut tables = self.tables.lock().unwrap();

        tables
            .events
            .remove(&id)
            .ok_or(EventError::NotFound(id))?;
        tables.registrations.retain(|(event_id, _)| *event_id != id);

        Ok(())
    }

    async fn add_registration(&self, event_id: EventId, user_id: UserId) -> Result<(), EventError> {
        self.tables
            .lock()
            .unwrap()
            .registrations
            .push((event_id, user_id));
        Ok(())
    }

    async fn remove_registration(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<(), EventError> {
        self.tables
            .lock()
            .unwrap()
            .registrations
            .retain(|registration| *registration != (event_id, user_id));
        Ok(())
    }
}
