pub mod cloak;
pub mod selection;

pub use cloak::{TitleCloak, WebChrome};
pub use selection::{Selection, SelectionAction};
