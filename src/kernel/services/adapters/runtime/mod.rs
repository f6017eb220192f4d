mod message;
mod runtime;

pub use message::AppMessage;
pub use runtime::RemoteRuntime;
