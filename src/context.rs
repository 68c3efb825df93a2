//! Application Context
//!
//! Configuration and notifications provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;

/// Success notices clear themselves after this long
const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message shown in the notice bar
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Startup configuration
    pub config: StoredValue<AppConfig>,
    /// Current notice - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Current notice - write
    set_notice: WriteSignal<Option<Notice>>,
    /// Last notice id handed out
    notice_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (notice, set_notice) = signal(None::<Notice>);
        Self {
            config: StoredValue::new(config),
            notice,
            set_notice,
            notice_seq: StoredValue::new(0),
        }
    }

    /// Snapshot of the configuration for async work
    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        let id = self.show(NoticeKind::Success, message.into());
        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            // Only clear if nothing newer replaced it
            if matches!(notice.try_get_untracked(), Some(Some(current)) if current.id == id) {
                set_notice.try_set(None);
            }
        });
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message.into());
    }

    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }

    fn show(&self, kind: NoticeKind, message: String) -> u32 {
        self.notice_seq.update_value(|seq| *seq += 1);
        let id = self.notice_seq.get_value();
        self.set_notice.set(Some(Notice { id, kind, message }));
        id
    }
}
