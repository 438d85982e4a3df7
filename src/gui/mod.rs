mod app;
mod message;

pub use app::{ResultViewer, show, to_handle};
pub use message::Message;

/// Title of the result window.
pub const WINDOW_TITLE: &str = "Result:";
