pub mod app;
pub mod empty_state;
pub mod featured_banner;
pub mod game_card;
pub mod game_player;
pub mod layout;
pub mod status_screen;
