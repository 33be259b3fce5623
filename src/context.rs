//! Application Context
//!
//! Shared state provided via Leptos Context API. The only app-wide state
//! is the transient notice (toast): every error or confirmation in the
//! system surfaces through it and fades out on its own.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays visible
const NOTICE_MS: u32 = 3000;

/// One transient user-facing notice
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Distinguishes notices so a stale dismiss timer cannot clear a newer one
    pub id: u32,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current notice, if any - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Current notice - write
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>)) -> Self {
        Self {
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Show a notice and schedule its dismissal
    pub fn show_notice(&self, text: impl Into<String>) {
        let id = self
            .notice
            .get_untracked()
            .map(|current| current.id.wrapping_add(1))
            .unwrap_or(0);
        self.set_notice.set(Some(Notice { id, text: text.into() }));

        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            if notice.get_untracked().is_some_and(|current| current.id == id) {
                set_notice.set(None);
            }
        });
    }
}
