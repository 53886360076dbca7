// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between a UI shell and the services
// - Translates service state into screen views
// - Never holds business rules of its own

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;


pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::{AppState, Providers};
