//! Service ports: traits + data contracts.

pub mod config;
pub mod generate;
pub mod runner;
pub mod surface;

pub use config::GatewayConfig;
pub use generate::GenerateError;
pub use runner::{RunError, RunReport};
pub use surface::{EditorSurface, PreferenceChange, SurfaceHandle, ThemeId};
