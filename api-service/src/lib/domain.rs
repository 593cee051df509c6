pub mod auth;
pub mod object_id;
pub mod user;
