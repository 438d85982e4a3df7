#[derive(Debug, Clone)]
pub enum Message {
    /// Any key; closes the viewer.
    KeyPressed,
}
