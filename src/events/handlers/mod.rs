// src/events/handlers/mod.rs
//
// Event Handlers
//
// Handlers use closure-based subscription via EventBus::subscribe.
// Only registration functions are exported.

pub mod diagnostic_handler;

pub use diagnostic_handler::register_diagnostic_handlers;
