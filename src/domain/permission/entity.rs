use serde::{Deserialize, Serialize};

/// OS-mediated authorization status for a sensitive capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    Undetermined,
    Denied,
    Granted,
}

impl PermissionState {
    pub fn is_granted(self) -> bool {
        self == PermissionState::Granted
    }

    pub fn is_undetermined(self) -> bool {
        self == PermissionState::Undetermined
    }
}

impl std::fmt::Display for PermissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionState::Undetermined => write!(f, "undetermined"),
            PermissionState::Denied => write!(f, "denied"),
            PermissionState::Granted => write!(f, "granted"),
        }
    }
}

/// The device capabilities whose permissions the capture screen tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Camera,
    Location,
    MediaLibrary,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Camera => write!(f, "camera"),
            Capability::Location => write!(f, "location"),
            Capability::MediaLibrary => write!(f, "media_library"),
        }
    }
}

/// Last known permission status per capability.
/// `None` means the status has not been read yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    pub camera: Option<PermissionState>,
    pub location: Option<PermissionState>,
    pub media_library: Option<PermissionState>,
}

impl PermissionSnapshot {
    /// Camera and location statuses are both known.
    /// Media library never gates the capture flow.
    pub fn is_determined(&self) -> bool {
        self.camera.is_some() && self.location.is_some()
    }

    pub fn get(&self, capability: Capability) -> Option<PermissionState> {
        match capability {
            Capability::Camera => self.camera,
            Capability::Location => self.location,
            Capability::MediaLibrary => self.media_library,
        }
    }

    pub fn set(&mut self, capability: Capability, state: PermissionState) {
        match capability {
            Capability::Camera => self.camera = Some(state),
            Capability::Location => self.location = Some(state),
            Capability::MediaLibrary => self.media_library = Some(state),
        }
    }

    pub fn is_granted(&self, capability: Capability) -> bool {
        self.get(capability).map_or(false, PermissionState::is_granted)
    }
}
