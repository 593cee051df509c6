pub mod scalars;
pub mod schema;

pub use schema::build_schema;
pub use schema::ApiSchema;
