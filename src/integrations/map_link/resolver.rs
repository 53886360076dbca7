// src/integrations/map_link/resolver.rs
//
// Desktop AppResolver: deep links + chooser + system opener.
//
// RULES:
// - Candidates are the allow-list filtered by what is installed, in
//   allow-list order
// - None installed: NoCompatibleApp
// - Exactly one: launched directly, no chooser
// - Several: chooser; a dismissed chooser is a success without launch

use std::sync::Arc;

use async_trait::async_trait;

use super::chooser::AppChooser;
use super::launcher::AppLauncher;
use super::links::deep_link;
use crate::capabilities::{AppResolver, ShareResolution};
use crate::domain::{NavigationApp, ShareRequest};
use crate::error::DispatchError;

pub struct MapLinkResolver {
    launcher: Arc<dyn AppLauncher>,
    chooser: Arc<dyn AppChooser>,
}

impl MapLinkResolver {
    pub fn new(launcher: Arc<dyn AppLauncher>, chooser: Arc<dyn AppChooser>) -> Self {
        Self { launcher, chooser }
    }

    /// Allow-listed apps that can be launched, duplicates removed
    pub fn candidates(&self, request: &ShareRequest) -> Vec<NavigationApp> {
        let mut candidates = Vec::new();
        for app in &request.allow_list {
            if !candidates.contains(app) && self.launcher.is_installed(*app) {
                candidates.push(*app);
            }
        }
        candidates
    }

    async fn launch(&self, app: NavigationApp, request: &ShareRequest) -> Result<ShareResolution, DispatchError> {
        let url = deep_link(app, request.coordinate, &request.title).map_err(|e| {
            DispatchError::LaunchFailed {
                app: app.id().to_string(),
                reason: e.to_string(),
            }
        })?;
        self.launcher.open(app, &url).await?;
        Ok(ShareResolution::Launched(app))
    }
}

#[async_trait]
impl AppResolver for MapLinkResolver {
    async fn show_location(&self, request: &ShareRequest) -> Result<ShareResolution, DispatchError> {
        let candidates = self.candidates(request);

        match candidates.as_slice() {
            [] => Err(DispatchError::NoCompatibleApp),
            [only] => {
                log::debug!("Only {} is available, launching directly", only.display_name());
                self.launch(*only, request).await
            }
            _ => match self.chooser.choose(request, candidates.clone()).await? {
                Some(app) if candidates.contains(&app) => self.launch(app, request).await,
                Some(app) => Err(DispatchError::Chooser(format!(
                    "{} was not offered",
                    app.display_name()
                ))),
                None => {
                    log::debug!("App chooser dismissed");
                    Ok(ShareResolution::Cancelled)
                }
            },
        }
    }
}
