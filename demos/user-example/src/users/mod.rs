pub mod domain;
pub use self::domain::{NewUser, User, UserId};

pub(crate) mod repository;

pub(crate) mod service;

pub(crate) mod routes;
pub use self::routes::UserFilter;
