mod declaration_index;
mod schema;
pub(crate) mod validate;
mod validation_error;

pub(crate) use declaration_index::DeclarationIndex;
pub use schema::Schema;
pub use schema::SchemaConfig;
pub(crate) use validate::SchemaValidationContext;
pub use validation_error::InvalidSchemaError;
pub use validation_error::SchemaValidationError;

#[cfg(test)]
mod tests;
