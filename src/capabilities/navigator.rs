use crate::domain::ScreenParams;

/// Screen router
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Push a screen with its transition parameters
    fn navigate(&self, route: &str, params: ScreenParams);

    /// Pop the current screen. Returns false when there is nothing to pop.
    fn back(&self) -> bool;

    fn current_route(&self) -> Option<String>;
}
