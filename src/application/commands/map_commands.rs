// src/application/commands/map_commands.rs

use std::sync::Arc;

use crate::application::dto::{MapScreenView, ShareResultDto};
use crate::application::error_handling::{ErrorResponse, ToErrorResponse};
use crate::application::state::AppState;
use crate::domain::{MapRegion, ScreenParams};
use crate::services::LocationDispatcher;

fn current_map_screen(state: &AppState) -> Result<Arc<LocationDispatcher>, String> {
    state.map_screen().ok_or_else(|| {
        let response = ErrorResponse::validation("No map screen is open".to_string());
        serde_json::to_string(&response).unwrap_or_else(|_| "Internal error".to_string())
    })
}

fn view(state: &AppState, dispatcher: &LocationDispatcher) -> MapScreenView {
    MapScreenView::from_state(&dispatcher.state(), &state.config.map)
}

/// Map screen mounted with its route query (`latitude=..&longitude=..`).
///
/// Bad parameters are not an error here: the screen shows its error view.
pub async fn open_map_screen(state: &AppState, query: String) -> Result<MapScreenView, String> {
    let dispatcher = state.open_map_screen();
    let params = ScreenParams::from_query(&query);

    if dispatcher.initialize_from(&params).is_ok() {
        dispatcher.render().await.to_error_response()?;
    }
    Ok(view(state, &dispatcher))
}

pub async fn get_map_screen(state: &AppState) -> Result<MapScreenView, String> {
    let dispatcher = current_map_screen(state)?;
    Ok(view(state, &dispatcher))
}

pub async fn share_location(state: &AppState) -> Result<ShareResultDto, String> {
    let dispatcher = current_map_screen(state)?;
    Ok(dispatcher.share().await.into())
}

pub async fn leave_map_screen(state: &AppState) -> Result<bool, String> {
    let dispatcher = current_map_screen(state)?;
    Ok(dispatcher.back())
}

pub async fn map_ready(state: &AppState) -> Result<(), String> {
    current_map_screen(state)?.on_map_ready();
    Ok(())
}

pub async fn map_region_changed(state: &AppState, region: MapRegion) -> Result<(), String> {
    current_map_screen(state)?.on_region_changed(region);
    Ok(())
}

pub async fn map_error(state: &AppState, message: String) -> Result<(), String> {
    current_map_screen(state)?.on_map_error(&message);
    Ok(())
}
