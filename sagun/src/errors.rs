use thiserror::Error;

/// Errors the session reports to its host instead of dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// A dispatch was attempted with neither typed text nor a highlighted
    /// suggestion. The host is expected to show a blocking prompt; no
    /// navigation happens and no session state is corrupted.
    #[error("search keyword is empty")]
    EmptyKeyword,
}
