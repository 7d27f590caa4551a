//! Fullscreen for the player surface. The flag shown in the UI is always
//! read back from the host after a request, never assumed from it.

use crate::error::PlayerError;

pub trait FullscreenHost {
    /// Whether anything in the document is fullscreen right now.
    fn is_fullscreen(&self) -> bool;
    fn is_supported(&self) -> bool;
    fn request(&self) -> Result<(), PlayerError>;
    fn exit(&self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FullscreenState {
    active: bool,
}

impl FullscreenState {
    pub fn is_active(self) -> bool {
        self.active
    }

    /// Re-reads the host; returns the new flag.
    pub fn sync(&mut self, host: &impl FullscreenHost) -> bool {
        self.active = host.is_fullscreen();
        self.active
    }

    /// Leaves fullscreen if it is on, otherwise asks for it.
    pub fn toggle(&mut self, host: &impl FullscreenHost) -> Result<(), PlayerError> {
        let result = if host.is_fullscreen() {
            host.exit();
            Ok(())
        } else if !host.is_supported() {
            Err(PlayerError::FullscreenRefused("not supported here".into()))
        } else {
            host.request()
        };
        self.sync(host);
        result
    }
}
