//! Schema modeling and whole-schema validation for a GraphQL-style type
//! system extended with input unions.
//!
//! Build a [`Schema`] from a [`SchemaConfig`], then call
//! [`Schema::validate`] for the full list of rule violations or
//! [`Schema::assert_valid`] for a single propagatable error.

pub mod ast;
pub mod introspection;
pub mod loc;
pub mod name;
mod named_ref;
mod schema;
pub mod suggestion;
pub mod types;

pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use schema::InvalidSchemaError;
pub use schema::Schema;
pub use schema::SchemaConfig;
pub use schema::SchemaValidationError;
