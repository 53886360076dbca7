// src/integrations/map_link/launcher.rs
//
// Opening a deep link with the operating system's URL handler.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use url::Url;

use crate::domain::NavigationApp;
use crate::error::DispatchError;

/// Knows which navigation apps can be launched and launches them
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppLauncher: Send + Sync {
    fn is_installed(&self, app: NavigationApp) -> bool;

    async fn open(&self, app: NavigationApp, url: &Url) -> Result<(), DispatchError>;
}

/// Hands URLs to `xdg-open` / `open` / `start`.
///
/// Every link is an https URL, so an app counts as installed whenever the
/// system opener exists; `with_apps` narrows that.
pub struct SystemOpener {
    program: String,
    args: Vec<String>,
    apps: Vec<NavigationApp>,
}

impl SystemOpener {
    pub fn detect() -> Self {
        let (program, args) = if cfg!(target_os = "macos") {
            ("open", vec![])
        } else if cfg!(target_os = "windows") {
            ("cmd", vec!["/C", "start", ""])
        } else {
            ("xdg-open", vec![])
        };

        Self {
            program: program.to_string(),
            args: args.into_iter().map(String::from).collect(),
            apps: NavigationApp::ALL.to_vec(),
        }
    }

    pub fn with_apps(mut self, apps: Vec<NavigationApp>) -> Self {
        self.apps = apps;
        self
    }
}

#[async_trait]
impl AppLauncher for SystemOpener {
    fn is_installed(&self, app: NavigationApp) -> bool {
        self.apps.contains(&app)
    }

    async fn open(&self, app: NavigationApp, url: &Url) -> Result<(), DispatchError> {
        log::info!("Opening {} via {}: {}", app.display_name(), self.program, url);

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(url.as_str())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| DispatchError::LaunchFailed {
                app: app.id().to_string(),
                reason: format!("Failed to spawn {}: {}", self.program, e),
            })?;

        if !status.success() {
            return Err(DispatchError::LaunchFailed {
                app: app.id().to_string(),
                reason: format!("{} exited with {}", self.program, status),
            });
        }
        Ok(())
    }
}
