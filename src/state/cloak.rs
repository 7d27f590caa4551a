// Tab title/icon disguise. The page's title and icon are process-wide, so all
// writes go through one TitleCloak that remembers what it replaced.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlLinkElement};

use crate::config::{DISGUISE_ICON, DISGUISE_TITLE};

/// Read/write access to the top-level document's title and icon link.
pub trait DocumentChrome {
    fn title(&self) -> String;
    fn set_title(&self, title: &str);
    /// `None` when the page has no icon link.
    fn icon_href(&self) -> Option<String>;
    /// `None` removes the icon link.
    fn set_icon_href(&self, href: Option<&str>);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChromeSnapshot {
    pub title: String,
    pub icon: Option<String>,
}

impl ChromeSnapshot {
    fn capture(chrome: &impl DocumentChrome) -> Self {
        Self {
            title: chrome.title(),
            icon: chrome.icon_href(),
        }
    }

    fn restore(&self, chrome: &impl DocumentChrome) {
        chrome.set_title(&self.title);
        chrome.set_icon_href(self.icon.as_deref());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TitleCloak {
    #[default]
    Normal,
    Disguised { prior: ChromeSnapshot },
}

impl TitleCloak {
    pub fn is_disguised(&self) -> bool {
        matches!(self, TitleCloak::Disguised { .. })
    }

    /// Captures the current title and icon, then swaps in the disguise.
    /// Applying twice keeps the first capture.
    pub fn apply(&mut self, chrome: &impl DocumentChrome) {
        if self.is_disguised() {
            return;
        }
        let prior = ChromeSnapshot::capture(chrome);
        chrome.set_title(DISGUISE_TITLE);
        chrome.set_icon_href(Some(DISGUISE_ICON));
        *self = TitleCloak::Disguised { prior };
    }

    /// Puts back exactly what `apply` captured.
    pub fn revert(&mut self, chrome: &impl DocumentChrome) {
        if let TitleCloak::Disguised { prior } = std::mem::take(self) {
            prior.restore(chrome);
        }
    }

    pub fn toggle(&mut self, chrome: &impl DocumentChrome) {
        if self.is_disguised() {
            self.revert(chrome);
        } else {
            self.apply(chrome);
        }
    }
}

/// The live page.
pub struct WebChrome {
    document: Document,
}

impl WebChrome {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn icon_link(&self) -> Option<HtmlLinkElement> {
        self.document
            .query_selector("link[rel*='icon']")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok())
    }
}

impl DocumentChrome for WebChrome {
    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn icon_href(&self) -> Option<String> {
        // The attribute, not the resolved URL, so restoring writes back the same text.
        self.icon_link().and_then(|link| link.get_attribute("href"))
    }

    fn set_icon_href(&self, href: Option<&str>) {
        match (self.icon_link(), href) {
            (Some(link), Some(href)) => {
                let _ = link.set_attribute("href", href);
            }
            (Some(link), None) => link.remove(),
            (None, Some(href)) => {
                let Some(head) = self.document.head() else {
                    return;
                };
                let Ok(el) = self.document.create_element("link") else {
                    return;
                };
                if let Ok(link) = el.dyn_into::<HtmlLinkElement>() {
                    link.set_rel("icon");
                    let _ = link.set_attribute("href", href);
                    let _ = head.append_child(&link);
                }
            }
            (None, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeChrome {
        title: RefCell<String>,
        icon: RefCell<Option<String>>,
    }

    impl DocumentChrome for FakeChrome {
        fn title(&self) -> String {
            self.title.borrow().clone()
        }
        fn set_title(&self, title: &str) {
            *self.title.borrow_mut() = title.to_string();
        }
        fn icon_href(&self) -> Option<String> {
            self.icon.borrow().clone()
        }
        fn set_icon_href(&self, href: Option<&str>) {
            *self.icon.borrow_mut() = href.map(str::to_string);
        }
    }

    fn page(title: &str, icon: Option<&str>) -> FakeChrome {
        FakeChrome {
            title: RefCell::new(title.to_string()),
            icon: RefCell::new(icon.map(str::to_string)),
        }
    }

    #[test]
    fn apply_then_revert_restores_exact_values() {
        let chrome = page("Arcade", Some("https://site.example/pad.png"));
        let mut cloak = TitleCloak::default();
        cloak.apply(&chrome);
        assert!(cloak.is_disguised());
        assert_eq!(chrome.title(), DISGUISE_TITLE);
        assert_eq!(chrome.icon_href().as_deref(), Some(DISGUISE_ICON));
        cloak.revert(&chrome);
        assert_eq!(cloak, TitleCloak::Normal);
        assert_eq!(chrome.title(), "Arcade");
        assert_eq!(chrome.icon_href().as_deref(), Some("https://site.example/pad.png"));
    }

    #[test]
    fn missing_icon_is_removed_again_on_revert() {
        let chrome = page("Arcade", None);
        let mut cloak = TitleCloak::default();
        cloak.toggle(&chrome);
        assert!(chrome.icon_href().is_some());
        cloak.toggle(&chrome);
        assert_eq!(chrome.icon_href(), None);
    }

    #[test]
    fn double_apply_keeps_original_capture() {
        let chrome = page("Arcade", Some("pad.png"));
        let mut cloak = TitleCloak::default();
        cloak.apply(&chrome);
        cloak.apply(&chrome);
        cloak.revert(&chrome);
        assert_eq!(chrome.title(), "Arcade");
        assert_eq!(chrome.icon_href().as_deref(), Some("pad.png"));
    }

    #[test]
    fn revert_when_normal_touches_nothing() {
        let chrome = page("Arcade", None);
        let mut cloak = TitleCloak::default();
        cloak.revert(&chrome);
        assert_eq!(chrome.title(), "Arcade");
    }
}
