// src/capabilities/app_resolver.rs
//
// Hand-off of a coordinate to an installed navigation app.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{NavigationApp, ShareRequest};
use crate::error::DispatchError;

/// Successful outcome of one resolution call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "app", rename_all = "snake_case")]
pub enum ShareResolution {
    /// An app was launched with the location
    Launched(NavigationApp),

    /// The user dismissed the chooser
    Cancelled,
}

/// Resolves the allow-listed apps that are installed and launches one,
/// directly when exactly one is available, through a chooser otherwise.
/// May present native UI as a side effect.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppResolver: Send + Sync {
    async fn show_location(&self, request: &ShareRequest) -> Result<ShareResolution, DispatchError>;
}
