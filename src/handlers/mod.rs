// Handler modules
pub mod kinds;
pub mod validate;

// Re-export all handler functions
pub use kinds::handle_kinds;
pub use validate::{ValidateOptions, handle_validate};
