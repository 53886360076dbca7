// src/integrations/map_link/mod.rs
//
// Navigation-app hand-off for desktop builds

pub mod chooser;
pub mod launcher;
pub mod links;
pub mod resolver;

pub use chooser::{AppChooser, TerminalChooser};
pub use launcher::{AppLauncher, SystemOpener};
pub use links::deep_link;
pub use resolver::MapLinkResolver;
