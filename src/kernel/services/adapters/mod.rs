pub mod config;
pub mod gemini;
pub mod piston;
pub mod runtime;

pub use config::ConfigService;
pub use gemini::GeminiClient;
pub use piston::PistonClient;
pub use runtime::{AppMessage, RemoteRuntime};
