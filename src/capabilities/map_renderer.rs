use async_trait::async_trait;

use crate::domain::MapRenderRequest;
use crate::error::MapError;

/// Interactive map widget.
///
/// Readiness, viewport and error notifications flow back through
/// `LocationDispatcher::on_map_ready` and friends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MapRenderer: Send + Sync {
    async fn render(&self, request: &MapRenderRequest) -> Result<(), MapError>;
}
