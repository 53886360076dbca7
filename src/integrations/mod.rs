// src/integrations/mod.rs
//
// Concrete providers for the capability traits.
//
// Device capabilities (camera, location, media library) have no desktop
// provider; they are supplied by the embedding shell.

pub mod desktop;
pub mod map_link;

pub use desktop::{HistoryNavigator, LoggingMapRenderer};
pub use map_link::{
    deep_link, AppChooser, AppLauncher, MapLinkResolver, SystemOpener, TerminalChooser,
};
