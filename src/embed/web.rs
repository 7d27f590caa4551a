use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, Element, HtmlElement, HtmlIFrameElement, Url, Window};
use yew::NodeRef;

use super::EmbedHost;
use super::fullscreen::FullscreenHost;
use crate::config::{EMBED_ALLOW, PLACEHOLDER_URL};
use crate::error::PlayerError;
use crate::util::cwarn;

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// The player's iframe, addressed through the component's `NodeRef`.
#[derive(Clone)]
pub struct WebHost {
    frame: NodeRef,
}

impl WebHost {
    pub fn new(frame: NodeRef) -> Self {
        Self { frame }
    }
}

impl EmbedHost for WebHost {
    type Timer = Timeout;

    fn navigate(&self, url: &str) {
        // An unmounted frame has nothing to navigate.
        match self.frame.cast::<HtmlIFrameElement>() {
            Some(frame) if frame.is_connected() => frame.set_src(url),
            _ => cwarn("embed: surface gone, navigation skipped"),
        }
    }

    fn schedule(&self, delay_ms: u32, task: impl FnOnce() + 'static) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn create_document_url(&self, html: &str) -> Result<String, PlayerError> {
        let parts = js_sys::Array::of1(&JsValue::from_str(html));
        let opts = BlobPropertyBag::new();
        opts.set_type("text/html");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
            .map_err(|e| PlayerError::ResourceUnavailable(describe(&e)))?;
        Url::create_object_url_with_blob(&blob)
            .map_err(|e| PlayerError::ResourceUnavailable(describe(&e)))
    }

    fn revoke_document_url(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            cwarn(&format!("embed: revoke failed: {}", describe(&e)));
        }
    }

    fn grant_permissions(&self, allow: &str) {
        match self.frame.cast::<HtmlIFrameElement>() {
            Some(frame) => grant(&frame, allow),
            None => cwarn("embed: surface gone, permissions skipped"),
        }
    }

    fn open_detached(&self, url: &str, cover_title: &str) -> Result<(), PlayerError> {
        let window = web_sys::window().ok_or(PlayerError::PresentationRefused)?;
        let popup = window
            .open_with_url_and_target(PLACEHOLDER_URL, "_blank")
            .ok()
            .flatten()
            .ok_or(PlayerError::PresentationRefused)?;
        if popup.closed().unwrap_or(true) {
            return Err(PlayerError::PresentationRefused);
        }
        // A half-built popup is closed rather than left behind as a blank tab.
        populate_detached(&popup, url, cover_title).inspect_err(|_| {
            if let Err(e) = popup.close() {
                cwarn(&format!("embed: popup close failed: {}", describe(&e)));
            }
        })
    }
}

fn populate_detached(popup: &Window, url: &str, cover_title: &str) -> Result<(), PlayerError> {
    let document = popup.document().ok_or(PlayerError::PresentationRefused)?;
    document.set_title(cover_title);
    let body = document.body().ok_or(PlayerError::PresentationRefused)?;
    fill_style(&body, "margin:0;height:100vh;overflow:hidden;background-color:#000");

    let frame: HtmlIFrameElement = document
        .create_element("iframe")
        .and_then(|el| el.dyn_into::<HtmlIFrameElement>().map_err(JsValue::from))
        .map_err(|e| PlayerError::ResourceUnavailable(describe(&e)))?;
    fill_style(&frame, "border:none;width:100%;height:100%;margin:0");
    grant(&frame, EMBED_ALLOW);
    frame.set_src(url);
    body.append_child(&frame)
        .map_err(|e| PlayerError::ResourceUnavailable(describe(&e)))?;
    Ok(())
}

fn grant(frame: &HtmlIFrameElement, allow: &str) {
    frame.set_allow_fullscreen(true);
    if let Err(e) = frame.set_attribute("allow", allow) {
        cwarn(&format!("embed: allow attribute rejected: {}", describe(&e)));
    }
}

fn fill_style(el: &HtmlElement, css: &str) {
    el.style().set_css_text(css);
}

/// Fullscreen on the player container, reporting the document's state.
pub struct WebFullscreen {
    target: NodeRef,
}

impl WebFullscreen {
    pub fn new(target: NodeRef) -> Self {
        Self { target }
    }

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }
}

impl FullscreenHost for WebFullscreen {
    fn is_fullscreen(&self) -> bool {
        Self::document().and_then(|d| d.fullscreen_element()).is_some()
    }

    fn is_supported(&self) -> bool {
        Self::document().is_some_and(|d| d.fullscreen_enabled())
    }

    fn request(&self) -> Result<(), PlayerError> {
        let el = self
            .target
            .cast::<Element>()
            .ok_or_else(|| PlayerError::FullscreenRefused("player is not mounted".into()))?;
        el.request_fullscreen()
            .map_err(|e| PlayerError::FullscreenRefused(describe(&e)))
    }

    fn exit(&self) {
        if let Some(d) = Self::document() {
            d.exit_fullscreen();
        }
    }
}
