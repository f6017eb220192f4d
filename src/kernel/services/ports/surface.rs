use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ThemeId {
    Dark,
    Light,
}

impl ThemeId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// A single preference delta to push into the live editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceChange {
    Theme(ThemeId),
    FontSize(u8),
    WordWrap(bool),
    Minimap(bool),
}

/// Live text-editing surface owned by the shell.
///
/// Attached to the store once when the surface mounts, never detached.
/// The store itself never calls into it; the shell applies
/// `Effect::SyncSurface` through this trait, skipping it while no surface
/// is mounted.
pub trait EditorSurface: Send + Sync {
    fn apply_preference(&self, change: PreferenceChange);
}

pub type SurfaceHandle = Arc<dyn EditorSurface>;
