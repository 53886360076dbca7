// src/integrations/map_link/chooser.rs
//
// "Open with..." chooser shown when more than one navigation app is
// available.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::domain::{NavigationApp, ShareRequest};
use crate::error::DispatchError;

/// Presents the candidate apps. `Ok(None)` means the user cancelled.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppChooser: Send + Sync {
    async fn choose(
        &self,
        request: &ShareRequest,
        options: Vec<NavigationApp>,
    ) -> Result<Option<NavigationApp>, DispatchError>;
}

/// One line of user input interpreted against a numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Picked(NavigationApp),
    Cancelled,
    Unrecognized,
}

fn parse_selection(line: &str, options: &[NavigationApp]) -> Selection {
    let line = line.trim();
    if line.is_empty() || line == "0" {
        return Selection::Cancelled;
    }
    if let Ok(n) = line.parse::<usize>() {
        return match options.get(n.wrapping_sub(1)) {
            Some(app) => Selection::Picked(*app),
            None => Selection::Unrecognized,
        };
    }
    // Accept the app id as typed
    match line.parse::<NavigationApp>() {
        Ok(app) if options.contains(&app) => Selection::Picked(app),
        _ => Selection::Unrecognized,
    }
}

/// Numbered menu on a line-based terminal
pub struct TerminalChooser {
    input: Mutex<Box<dyn AsyncBufRead + Send + Unpin>>,
    output: Mutex<Box<dyn AsyncWrite + Send + Unpin>>,
}

impl TerminalChooser {
    pub fn new(
        input: Box<dyn AsyncBufRead + Send + Unpin>,
        output: Box<dyn AsyncWrite + Send + Unpin>,
    ) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    pub fn stdio() -> Self {
        Self::new(
            Box::new(tokio::io::BufReader::new(tokio::io::stdin())),
            Box::new(tokio::io::stdout()),
        )
    }

    async fn prompt(&self, request: &ShareRequest, options: &[NavigationApp]) -> std::io::Result<()> {
        let mut menu = format!("{}\n{}\n", request.dialog_title, request.dialog_message);
        for (i, app) in options.iter().enumerate() {
            menu.push_str(&format!("  {}) {}\n", i + 1, app.display_name()));
        }
        menu.push_str(&format!("  0) {}\n> ", request.cancel_text));

        let mut out = self.output.lock().await;
        out.write_all(menu.as_bytes()).await?;
        out.flush().await
    }

    async fn read_line(&self) -> std::io::Result<Option<String>> {
        let mut input = self.input.lock().await;
        let mut line = String::new();
        if input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[async_trait]
impl AppChooser for TerminalChooser {
    async fn choose(
        &self,
        request: &ShareRequest,
        options: Vec<NavigationApp>,
    ) -> Result<Option<NavigationApp>, DispatchError> {
        let io_err = |e: std::io::Error| DispatchError::Chooser(e.to_string());

        loop {
            self.prompt(request, &options).await.map_err(io_err)?;

            // End of input dismisses the dialog
            let Some(line) = self.read_line().await.map_err(io_err)? else {
                return Ok(None);
            };

            match parse_selection(&line, &options) {
                Selection::Picked(app) => return Ok(Some(app)),
                Selection::Cancelled => return Ok(None),
                Selection::Unrecognized => {
                    log::debug!("Unrecognized chooser input: {:?}", line.trim());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShareConfig;
    use crate::domain::Coordinate;
    use std::io::Cursor;
    use std::pin::Pin;
    use std::sync::{Arc, Mutex as StdMutex};
    use std::task::{Context, Poll};

    /// Write sink whose contents stay readable after the chooser takes it
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<StdMutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl AsyncWrite for SharedBuffer {
        fn poll_write(self: Pin<&mut Self>, _cx: &mut Context<'_>, buf: &[u8]) -> Poll<std::io::Result<usize>> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Poll::Ready(Ok(buf.len()))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<std::io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    fn request() -> ShareRequest {
        ShareConfig::default().request_for(Coordinate::new(40.7128, -74.006).unwrap())
    }

    fn chooser(input: &str) -> (TerminalChooser, SharedBuffer) {
        let out = SharedBuffer::default();
        let chooser = TerminalChooser::new(
            Box::new(Cursor::new(input.as_bytes().to_vec())),
            Box::new(out.clone()),
        );
        (chooser, out)
    }

    #[test]
    fn test_parse_selection() {
        let options = [NavigationApp::GoogleMaps, NavigationApp::Waze];
        assert_eq!(parse_selection("2\n", &options), Selection::Picked(NavigationApp::Waze));
        assert_eq!(parse_selection("google-maps", &options), Selection::Picked(NavigationApp::GoogleMaps));
        assert_eq!(parse_selection("0", &options), Selection::Cancelled);
        assert_eq!(parse_selection("  ", &options), Selection::Cancelled);
        assert_eq!(parse_selection("3", &options), Selection::Unrecognized);
        assert_eq!(parse_selection("apple-maps", &options), Selection::Unrecognized);
    }

    #[tokio::test]
    async fn test_menu_shows_dialog_strings() {
        let (chooser, out) = chooser("1\n");
        let picked = chooser
            .choose(&request(), vec![NavigationApp::AppleMaps, NavigationApp::Waze])
            .await
            .unwrap();

        assert_eq!(picked, Some(NavigationApp::AppleMaps));
        let shown = out.contents();
        assert!(shown.starts_with("Open with...\nChoose an app to open the location\n"));
        assert!(shown.contains("  2) Waze"));
        assert!(shown.contains("  0) Cancel"));
    }

    #[tokio::test]
    async fn test_reprompts_until_recognized() {
        let (chooser, _) = chooser("9\nwaze\n");
        let picked = chooser
            .choose(&request(), vec![NavigationApp::GoogleMaps, NavigationApp::Waze])
            .await
            .unwrap();
        assert_eq!(picked, Some(NavigationApp::Waze));
    }

    #[tokio::test]
    async fn test_end_of_input_cancels() {
        let (chooser, _) = chooser("");
        let picked = chooser
            .choose(&request(), NavigationApp::ALL.to_vec())
            .await
            .unwrap();
        assert_eq!(picked, None);
    }

    #[tokio::test]
    async fn test_waiting_for_input_leaves_runtime_free() {
        // Single-threaded runtime: the answer can only arrive if choose() yields
        let (mut keyboard, terminal) = tokio::io::duplex(64);
        let out = SharedBuffer::default();
        let chooser = TerminalChooser::new(
            Box::new(tokio::io::BufReader::new(terminal)),
            Box::new(out.clone()),
        );

        let answer = async {
            tokio::task::yield_now().await;
            keyboard.write_all(b"2\n").await.unwrap();
        };
        let req = request();
        let (picked, _) = tokio::join!(
            chooser.choose(&req, vec![NavigationApp::GoogleMaps, NavigationApp::Waze]),
            answer
        );

        assert_eq!(picked.unwrap(), Some(NavigationApp::Waze));
        assert!(out.contents().ends_with("> "));
    }
}
