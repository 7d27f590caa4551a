//! Presenting a game's URL in the player's embed surface.
//!
//! [`EmbedController::present_url`] is the single entry point; the strategy
//! picks how the URL reaches the surface. Browser side effects go through an
//! [`EmbedHost`] so the controller's ownership rules can be tested without a DOM.

pub mod fullscreen;
pub mod web;

use crate::config::{DETACHED_COVER_TITLE, EMBED_ALLOW, PLACEHOLDER_URL, RELOAD_DELAY_MS};
use crate::error::PlayerError;
use crate::util::clog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Point the surface straight at the URL.
    Direct,
    /// Blank the surface, then navigate back to the URL after a short delay.
    ReloadCycle,
    /// Wrap the URL in a local in-memory document and embed that instead.
    IsolatedDocument,
    /// Open the URL inside a new blank top-level window.
    DetachedWindow,
}

/// Browser operations the controller needs. Implementations are cheap handles
/// (cloned into scheduled tasks).
pub trait EmbedHost: Clone + 'static {
    /// Pending task; dropping it cancels the task.
    type Timer;

    /// Grants the surface its embed permissions (`allow` list plus
    /// fullscreen). Called before every navigation of the surface.
    fn grant_permissions(&self, allow: &str);
    fn navigate(&self, url: &str);
    fn schedule(&self, delay_ms: u32, task: impl FnOnce() + 'static) -> Self::Timer;
    /// Materializes `html` as a locally addressable document and returns its URL.
    fn create_document_url(&self, html: &str) -> Result<String, PlayerError>;
    fn revoke_document_url(&self, url: &str);
    /// Opens a new top-level window hosting `url`, titled `cover_title`. The
    /// window is not tracked afterwards.
    fn open_detached(&self, url: &str, cover_title: &str) -> Result<(), PlayerError>;
}

/// What the controller is holding on to for the surface's current content.
enum Presentation<T> {
    Direct,
    /// Holds the timer for the second navigation, fired or not.
    Reload(T),
    Isolated { document_url: String },
}

pub struct EmbedController<H: EmbedHost> {
    host: H,
    active: Option<Presentation<H::Timer>>,
}

impl<H: EmbedHost> EmbedController<H> {
    pub fn new(host: H) -> Self {
        Self { host, active: None }
    }

    /// Strategy behind what the surface currently shows, if any.
    pub fn mode(&self) -> Option<Strategy> {
        self.active.as_ref().map(|p| match p {
            Presentation::Direct => Strategy::Direct,
            Presentation::Reload(_) => Strategy::ReloadCycle,
            Presentation::Isolated { .. } => Strategy::IsolatedDocument,
        })
    }

    pub fn present_url(&mut self, url: &str, strategy: Strategy) -> Result<(), PlayerError> {
        match strategy {
            Strategy::DetachedWindow => {
                // Leaves the surface and whatever it holds untouched.
                self.host.open_detached(url, DETACHED_COVER_TITLE)
            }
            Strategy::Direct => {
                self.release();
                self.host.grant_permissions(EMBED_ALLOW);
                self.host.navigate(url);
                self.active = Some(Presentation::Direct);
                Ok(())
            }
            Strategy::ReloadCycle => {
                self.release();
                self.host.grant_permissions(EMBED_ALLOW);
                self.host.navigate(PLACEHOLDER_URL);
                let host = self.host.clone();
                let target = url.to_string();
                let timer = self
                    .host
                    .schedule(RELOAD_DELAY_MS, move || host.navigate(&target));
                self.active = Some(Presentation::Reload(timer));
                Ok(())
            }
            Strategy::IsolatedDocument => {
                // A failed build leaves the current presentation in place.
                let document_url = self.host.create_document_url(&isolated_document(url))?;
                self.release();
                self.host.grant_permissions(EMBED_ALLOW);
                self.host.navigate(&document_url);
                self.active = Some(Presentation::Isolated { document_url });
                Ok(())
            }
        }
    }

    /// Drops everything the current presentation owns: a pending reload is
    /// cancelled and an isolated document is revoked.
    pub fn release(&mut self) {
        match self.active.take() {
            Some(Presentation::Reload(timer)) => {
                drop(timer);
                clog("embed: pending reload cancelled");
            }
            Some(Presentation::Isolated { document_url }) => {
                self.host.revoke_document_url(&document_url);
                clog(&format!("embed: revoked {document_url}"));
            }
            Some(Presentation::Direct) | None => {}
        }
    }
}

impl<H: EmbedHost> Drop for EmbedController<H> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Escapes text for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Standalone page whose only content is a full-size iframe on `url`.
pub fn isolated_document(url: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html><html><body style=\"margin:0;overflow:hidden;background:#000\">",
            "<iframe src=\"{src}\" style=\"border:none;width:100%;height:100vh\" ",
            "allowfullscreen allow=\"{allow}\"></iframe>",
            "</body></html>"
        ),
        src = escape_attr(url),
        allow = EMBED_ALLOW,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Task = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Log {
        navigations: Vec<String>,
        created: Vec<String>,
        revoked: Vec<String>,
        detached: Vec<(String, String)>,
        tasks: Vec<(u32, Task)>,
        next_id: u32,
        refuse_popup: bool,
        fail_create: bool,
        grants: Vec<String>,
        grants_at_first_navigation: Option<usize>,
    }

    #[derive(Clone, Default)]
    struct FakeHost(Rc<RefCell<Log>>);

    struct FakeTimer {
        id: u32,
        log: Rc<RefCell<Log>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.log.borrow_mut().tasks.retain(|(id, _)| *id != self.id);
        }
    }

    impl FakeHost {
        fn fire_timers(&self) {
            let tasks = std::mem::take(&mut self.0.borrow_mut().tasks);
            for (_, task) in tasks {
                task();
            }
        }

        fn outstanding(&self) -> usize {
            let log = self.0.borrow();
            log.created.len() - log.revoked.len()
        }

        fn navigations(&self) -> Vec<String> {
            self.0.borrow().navigations.clone()
        }
    }

    impl EmbedHost for FakeHost {
        type Timer = FakeTimer;

        fn grant_permissions(&self, allow: &str) {
            self.0.borrow_mut().grants.push(allow.to_string());
        }

        fn navigate(&self, url: &str) {
            let mut log = self.0.borrow_mut();
            if log.grants_at_first_navigation.is_none() {
                log.grants_at_first_navigation = Some(log.grants.len());
            }
            log.navigations.push(url.to_string());
        }

        fn schedule(&self, _delay_ms: u32, task: impl FnOnce() + 'static) -> FakeTimer {
            let mut log = self.0.borrow_mut();
            log.next_id += 1;
            let id = log.next_id;
            log.tasks.push((id, Box::new(task)));
            FakeTimer {
                id,
                log: self.0.clone(),
            }
        }

        fn create_document_url(&self, _html: &str) -> Result<String, PlayerError> {
            let mut log = self.0.borrow_mut();
            if log.fail_create {
                return Err(PlayerError::ResourceUnavailable("blob refused".into()));
            }
            let url = format!("blob:local/{}", log.created.len());
            log.created.push(url.clone());
            Ok(url)
        }

        fn revoke_document_url(&self, url: &str) {
            self.0.borrow_mut().revoked.push(url.to_string());
        }

        fn open_detached(&self, url: &str, cover_title: &str) -> Result<(), PlayerError> {
            let mut log = self.0.borrow_mut();
            if log.refuse_popup {
                return Err(PlayerError::PresentationRefused);
            }
            log.detached.push((url.to_string(), cover_title.to_string()));
            Ok(())
        }
    }

    const URL: &str = "https://games.example/b";

    #[test]
    fn direct_navigates_once() {
        let host = FakeHost::default();
        let mut ctl = EmbedController::new(host.clone());
        ctl.present_url(URL, Strategy::Direct).unwrap();
        assert_eq!(host.navigations(), [URL]);
        assert_eq!(ctl.mode(), Some(Strategy::Direct));
    }

    #[test]
    fn reload_cycle_blanks_then_returns() {
        let host = FakeHost::default();
        let mut ctl = EmbedController::new(host.clone());
        ctl.present_url(URL, Strategy::ReloadCycle).unwrap();
        assert_eq!(host.navigations(), [PLACEHOLDER_URL]);
        host.fire_timers();
        assert_eq!(host.navigations(), [PLACEHOLDER_URL, URL]);
    }

    #[test]
    fn release_during_reload_delay_prevents_second_navigation() {
        let host = FakeHost::default();
        let mut ctl = EmbedController::new(host.clone());
        ctl.present_url(URL, Strategy::ReloadCycle).unwrap();
        ctl.release();
        host.fire_timers();
        assert_eq!(host.navigations(), [PLACEHOLDER_URL]);
    }

    #[test]
    fn dropping_controller_cancels_pending_reload() {
        let host = FakeHost::default();
        {
            let mut ctl = EmbedController::new(host.clone());
            ctl.present_url(URL, Strategy::ReloadCycle).unwrap();
        }
        host.fire_timers();
        assert_eq!(host.navigations(), [PLACEHOLDER_URL]);
    }

    #[test]
    fn repeated_reload_keeps_only_latest_timer() {
        let host = FakeHost::default();
        let mut ctl = EmbedController::new(host.clone());
        ctl.present_url(URL, Strategy::ReloadCycle).unwrap();
        ctl.present_url(URL, Strategy::ReloadCycle).unwrap();
        assert_eq!(host.0.borrow().tasks.len(), 1);
        host.fire_timers();
        assert_eq!(host.navigations(), [PLACEHOLDER_URL, PLACEHOLDER_URL, URL]);
    }

    #[test]
    fn isolated_twice_leaves_one_outstanding_resource() {
        let host = FakeHost::default();
        let mut ctl = EmbedController::new(host.clone());
        ctl.present_url(URL, Strategy::IsolatedDocument).unwrap();
        assert_eq!(host.outstanding(), 1);
        ctl.present_url(URL, Strategy::IsolatedDocument).unwrap();
        assert_eq!(host.outstanding(), 1);
        assert_eq!(host.0.borrow().revoked, ["blob:local/0"]);
        assert_eq!(host.navigations(), ["blob:local/0", "blob:local/1"]);
        assert_eq!(ctl.mode(), Some(Strategy::IsolatedDocument));
        drop(ctl);
        assert_eq!(host.outstanding(), 0);
    }

    #[test]
    fn switching_back_to_direct_revokes_isolated_document() {
        let host = FakeHost::default();
        let mut ctl = EmbedController::new(host.clone());
        ctl.present_url(URL, Strategy::IsolatedDocument).unwrap();
        ctl.present_url("https://games.example/a", Strategy::Direct).unwrap();
        assert_eq!(host.outstanding(), 0);
    }

    #[test]
    fn detached_window_uses_cover_title_and_keeps_surface() {
        let host = FakeHost::default();
        let mut ctl = EmbedController::new(host.clone());
        ctl.present_url(URL, Strategy::IsolatedDocument).unwrap();
        ctl.present_url(URL, Strategy::DetachedWindow).unwrap();
        let log = host.0.borrow();
        assert_eq!(log.detached, [(URL.to_string(), DETACHED_COVER_TITLE.to_string())]);
        assert!(log.revoked.is_empty());
        drop(log);
        assert_eq!(ctl.mode(), Some(Strategy::IsolatedDocument));
    }

    #[test]
    fn refused_popup_is_reported() {
        let host = FakeHost::default();
        host.0.borrow_mut().refuse_popup = true;
        let mut ctl = EmbedController::new(host.clone());
        ctl.present_url(URL, Strategy::Direct).unwrap();
        assert_eq!(
            ctl.present_url(URL, Strategy::DetachedWindow),
            Err(PlayerError::PresentationRefused)
        );
        assert_eq!(ctl.mode(), Some(Strategy::Direct));
    }

    #[test]
    fn surface_gets_permissions_before_first_navigation() {
        for strategy in [Strategy::Direct, Strategy::ReloadCycle, Strategy::IsolatedDocument] {
            let host = FakeHost::default();
            let mut ctl = EmbedController::new(host.clone());
            ctl.present_url(URL, strategy).unwrap();
            let log = host.0.borrow();
            assert_eq!(log.grants_at_first_navigation, Some(1), "{strategy:?}");
            assert_eq!(log.grants, [EMBED_ALLOW]);
        }
    }

    #[test]
    fn failed_isolation_keeps_current_document() {
        let host = FakeHost::default();
        let mut ctl = EmbedController::new(host.clone());
        ctl.present_url(URL, Strategy::IsolatedDocument).unwrap();
        host.0.borrow_mut().fail_create = true;
        assert!(matches!(
            ctl.present_url(URL, Strategy::IsolatedDocument),
            Err(PlayerError::ResourceUnavailable(_))
        ));
        assert!(host.0.borrow().revoked.is_empty());
        assert_eq!(host.outstanding(), 1);
        assert_eq!(host.navigations(), ["blob:local/0"]);
        assert_eq!(ctl.mode(), Some(Strategy::IsolatedDocument));
    }

    #[test]
    fn isolated_document_escapes_url() {
        let html = isolated_document("https://x.example/?a=1&b=\"><script>");
        assert!(html.contains("src=\"https://x.example/?a=1&amp;b=&quot;&gt;&lt;script&gt;\""));
        assert!(html.contains(EMBED_ALLOW));
        assert!(!html.contains("<script>"));
    }
}
