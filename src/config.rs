// Compile-time settings for the catalog and the player.

/// Catalog document, fetched relative to the page origin.
pub const CATALOG_PATH: &str = "./games.json";

/// How many featured entries the banner considers.
pub const FEATURED_LIMIT: usize = 3;

/// Gap between blanking the embed and pointing it back at the target.
pub const RELOAD_DELAY_MS: u32 = 50;
pub const PLACEHOLDER_URL: &str = "about:blank";

/// Permissions granted to every embed the app creates.
pub const EMBED_ALLOW: &str =
    "autoplay; encrypted-media; fullscreen; clipboard-read; clipboard-write; gamepad";

pub const DISGUISE_TITLE: &str = "Untitled document";
pub const DISGUISE_ICON: &str = "assets/document.svg";

/// Title given to a popped-out player window.
pub const DETACHED_COVER_TITLE: &str = "My Drive";
