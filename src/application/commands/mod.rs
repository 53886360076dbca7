// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands return views, never domain types
// - Errors cross the boundary as JSON ErrorResponse strings
// - Commands NEVER contain business logic

pub mod capture_commands;
pub mod map_commands;

pub use capture_commands::*;
pub use map_commands::*;
