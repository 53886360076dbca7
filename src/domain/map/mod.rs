pub mod value_objects;

pub use value_objects::{MapMarker, MapRegion, MapRenderRequest, NavigationApp, ShareRequest};
