// Small helpers shared by components.

/// "1 game" / "N games".
pub fn game_count_label(n: usize) -> String {
    if n == 1 {
        "1 game".to_string()
    } else {
        format!("{n} games")
    }
}

/// Rating as shown on cards: one decimal, trailing ".0" dropped.
pub fn format_rating(rating: f64) -> String {
    let s = format!("{rating:.1}");
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}

#[cfg(target_family = "wasm")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_family = "wasm"))]
pub fn clog(msg: &str) {
    let _ = msg;
}

#[cfg(target_family = "wasm")]
pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_family = "wasm"))]
pub fn cwarn(msg: &str) {
    let _ = msg;
}

/// Blocking browser alert; used for errors the user has to act on.
pub fn alert(msg: &str) {
    cwarn(msg);
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(game_count_label(0), "0 games");
        assert_eq!(game_count_label(1), "1 game");
        assert_eq!(game_count_label(12), "12 games");
    }

    #[test]
    fn rating_drops_trailing_zero() {
        assert_eq!(format_rating(4.0), "4");
        assert_eq!(format_rating(4.76), "4.8");
        assert_eq!(format_rating(3.2), "3.2");
    }
}
