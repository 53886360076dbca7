// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod capture_orchestrator;
pub mod location_dispatcher;

#[cfg(test)]
mod test_support;


pub use capture_orchestrator::{CaptureOrchestrator, CaptureOutcome, IgnoreReason};

pub use location_dispatcher::{DispatcherState, EntryProblem, LocationDispatcher, ShareOutcome};
