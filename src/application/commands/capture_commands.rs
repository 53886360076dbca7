// src/application/commands/capture_commands.rs

use crate::application::dto::{CaptureResultDto, CaptureScreenView};
use crate::application::state::AppState;
use crate::domain::ScreenParams;

/// Screen mounted: settle permissions
pub async fn start_capture_screen(state: &AppState) -> Result<CaptureScreenView, String> {
    let screen = state.capture_orchestrator.start().await;
    Ok(CaptureScreenView::from(&screen))
}

/// "Grant Camera Permission" pressed
pub async fn grant_camera_permission(state: &AppState) -> Result<CaptureScreenView, String> {
    let screen = state.capture_orchestrator.retry_camera_permission().await;
    Ok(CaptureScreenView::from(&screen))
}

pub async fn take_picture(state: &AppState) -> Result<CaptureResultDto, String> {
    let outcome = state.capture_orchestrator.capture().await;
    Ok(CaptureResultDto::new(&outcome, &state.capture_orchestrator.state()))
}

pub async fn retake_picture(state: &AppState) -> Result<CaptureScreenView, String> {
    let screen = state.capture_orchestrator.retake();
    Ok(CaptureScreenView::from(&screen))
}

pub async fn get_capture_screen(state: &AppState) -> Result<CaptureScreenView, String> {
    Ok(CaptureScreenView::from(&state.capture_orchestrator.state()))
}

/// Route parameters for the map screen of the held capture
pub async fn view_photo_location(state: &AppState) -> Result<Option<ScreenParams>, String> {
    let params = state.capture_orchestrator.map_route();
    if params.is_some() {
        state.capture_orchestrator.open_map();
    }
    Ok(params)
}
