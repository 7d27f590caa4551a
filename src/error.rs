use thiserror::Error;

/// Why the catalog could not be loaded. The catalog is all-or-nothing: any of
/// these leaves the app without entries and shows the error screen.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("response body was not text")]
    Body,
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("game `{id}` has unknown category `{category}`")]
    UnknownCategory { id: String, category: String },
    #[error("game id `{0}` appears more than once")]
    DuplicateId(String),
}

/// Failures of player actions. None of these end the session; the player stays
/// open and the user may try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("the browser refused to open a new window; allow popups for this site and try again")]
    PresentationRefused,
    #[error("fullscreen is unavailable: {0}")]
    FullscreenRefused(String),
    #[error("could not prepare the player: {0}")]
    ResourceUnavailable(String),
}
