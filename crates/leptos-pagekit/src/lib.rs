//! Leptos Page Interaction Utilities
//!
//! Scroll-position tracking, share-menu state, and clipboard copy for
//! content pages. The browser-facing pieces wrap `web_sys`; the state
//! machines underneath are plain Rust so they can be tested off-browser.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Scroll offset in px above which the back-to-top control shows
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

// ========================
// Scroll tracking
// ========================

/// Two-state threshold tracker fed by scroll samples.
///
/// `sample` returns `Some(new_state)` only when the offset crosses the
/// threshold, so subscribers are notified on transitions and never on
/// repeated same-side samples.
#[derive(Clone, Copy, Debug)]
pub struct ScrollFlag {
    threshold: f64,
    past: bool,
}

impl ScrollFlag {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, past: false }
    }

    /// Whether the last sample was past the threshold
    pub fn past(&self) -> bool {
        self.past
    }

    /// Feed one scroll offset; `Some` on a threshold crossing
    pub fn sample(&mut self, offset: f64) -> Option<bool> {
        let past = offset > self.threshold;
        if past == self.past {
            return None;
        }
        self.past = past;
        Some(past)
    }
}

/// Live window scroll listener (closure stays alive until released)
struct ScrollWatcher {
    window: web_sys::Window,
    handler: Closure<dyn FnMut()>,
}

impl ScrollWatcher {
    fn release(self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.handler.as_ref().unchecked_ref());
    }
}

thread_local! {
    /// Watchers for currently mounted pages, keyed by token
    static ACTIVE_WATCHERS: RefCell<HashMap<usize, ScrollWatcher>> = RefCell::new(HashMap::new());
}

static NEXT_WATCHER_TOKEN: AtomicUsize = AtomicUsize::new(0);

/// Subscribe to window scroll and expose a past-threshold signal.
///
/// The listener is attached once per mount and removed when the calling
/// component is cleaned up. Cleanup goes through a token into a
/// thread-local registry because the JS closure itself cannot cross the
/// `Send + Sync` bound `on_cleanup` requires.
pub fn use_scroll_flag(threshold: f64) -> ReadSignal<bool> {
    let (past, set_past) = signal(false);

    let Some(window) = web_sys::window() else {
        return past;
    };

    let mut flag = ScrollFlag::new(threshold);
    let sampled_window = window.clone();
    let handler = Closure::<dyn FnMut()>::new(move || {
        let offset = sampled_window.scroll_y().unwrap_or(0.0);
        if let Some(past_now) = flag.sample(offset) {
            set_past.set(past_now);
        }
    });
    let _ = window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());

    let token = NEXT_WATCHER_TOKEN.fetch_add(1, Ordering::Relaxed);
    ACTIVE_WATCHERS.with(|watchers| {
        watchers.borrow_mut().insert(token, ScrollWatcher { window, handler });
    });

    on_cleanup(move || {
        ACTIVE_WATCHERS.with(|watchers| {
            if let Some(watcher) = watchers.borrow_mut().remove(&token) {
                watcher.release();
            }
        });
    });

    past
}

// ========================
// Share menu state
// ========================

/// Where the share menu should appear, in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuAnchor {
    pub x: f64,
    pub y: f64,
}

/// Share menu state: open exactly when an anchor is recorded
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShareMenuState {
    anchor: Option<MenuAnchor>,
}

impl ShareMenuState {
    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<MenuAnchor> {
        self.anchor
    }

    pub fn open(&mut self, anchor: MenuAnchor) {
        self.anchor = Some(anchor);
    }

    /// Idempotent: closing a closed menu is a no-op
    pub fn close(&mut self) {
        self.anchor = None;
    }
}

/// Share menu state as a signal pair
#[derive(Clone, Copy)]
pub struct ShareMenuSignals {
    state: ReadSignal<ShareMenuState>,
    set_state: WriteSignal<ShareMenuState>,
}

pub fn create_share_menu() -> ShareMenuSignals {
    let (state, set_state) = signal(ShareMenuState::default());
    ShareMenuSignals { state, set_state }
}

impl ShareMenuSignals {
    /// Open anchored under the control that fired the event
    pub fn open_from_event(&self, ev: &web_sys::MouseEvent) {
        let anchor = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .map(|control| {
                let rect = control.get_bounding_client_rect();
                MenuAnchor { x: rect.left(), y: rect.bottom() }
            })
            .unwrap_or_default();
        self.set_state.update(|menu| menu.open(anchor));
    }

    pub fn close(&self) {
        self.set_state.update(|menu| menu.close());
    }

    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn anchor(&self) -> Option<MenuAnchor> {
        self.state.get().anchor()
    }
}

// ========================
// Clipboard
// ========================

/// Write `text` to the system clipboard.
///
/// Resolves once the browser accepts or rejects the write; the caller
/// decides how to surface either outcome. No state is held here.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_flag_tracks_offset_after_every_sample() {
        let mut flag = ScrollFlag::new(SCROLL_THRESHOLD_PX);
        for offset in [0.0, 50.0, 100.0, 101.0, 250.0, 99.9, 100.0, 100.1] {
            flag.sample(offset);
            assert_eq!(flag.past(), offset > SCROLL_THRESHOLD_PX, "offset {}", offset);
        }
    }

    #[test]
    fn scroll_flag_threshold_is_exclusive() {
        let mut flag = ScrollFlag::new(100.0);
        assert_eq!(flag.sample(100.0), None);
        assert!(!flag.past());
        assert_eq!(flag.sample(100.5), Some(true));
    }

    #[test]
    fn scroll_flag_emits_once_per_crossing() {
        let mut flag = ScrollFlag::new(100.0);
        assert!(!flag.past());

        let emitted: Vec<_> = [0.0, 150.0, 50.0, 200.0]
            .into_iter()
            .filter_map(|offset| flag.sample(offset))
            .collect();
        assert_eq!(emitted, vec![true, false, true]);

        // staying on the same side stays silent
        assert_eq!(flag.sample(180.0), None);
        assert_eq!(flag.sample(300.0), None);
        assert!(flag.past());
    }

    #[test]
    fn share_menu_starts_closed() {
        let menu = ShareMenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.anchor(), None);
    }

    #[test]
    fn share_menu_open_iff_anchored() {
        let mut menu = ShareMenuState::default();
        menu.open(MenuAnchor { x: 12.0, y: 34.0 });
        assert!(menu.is_open());
        assert_eq!(menu.anchor(), Some(MenuAnchor { x: 12.0, y: 34.0 }));

        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.anchor(), None);
    }

    #[test]
    fn share_menu_close_is_idempotent() {
        let mut menu = ShareMenuState::default();
        menu.open(MenuAnchor { x: 1.0, y: 2.0 });
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn share_menu_reopen_replaces_anchor() {
        let mut menu = ShareMenuState::default();
        menu.open(MenuAnchor { x: 1.0, y: 2.0 });
        menu.open(MenuAnchor { x: 3.0, y: 4.0 });
        assert_eq!(menu.anchor(), Some(MenuAnchor { x: 3.0, y: 4.0 }));
    }
}
