pub mod event;
pub mod user;

pub use event::PostgresEventRepository;
pub use user::PostgresUserRepository;
