//! Transient success/error banners.
//!
//! Every view owns one [`NoticeHandle`] from [`use_notice`]. Showing a
//! notice schedules its dismissal after `ui.alert_dismiss_secs`; each notice
//! carries a sequence number so a timer started for an older notice never
//! hides a newer one.

use std::time::Duration;

use dioxus::prelude::*;

use crate::admin_store::use_admin_store;
use crate::components::AlertBanner;
use crate::timer::sleep;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert-success",
            NoticeKind::Error => "alert alert-danger",
            NoticeKind::Info => "alert alert-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// The banner currently shown and the sequence number it was shown with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    seq: u64,
    current: Option<Notice>,
}

impl NoticeSlot {
    /// Replace the banner; returns the id its dismissal timer must present.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Notice {
            kind,
            message: message.into(),
        });
        self.seq
    }

    /// Timer callback: clears the banner only if it is still notice `id`.
    pub fn expire(&mut self, id: u64) -> bool {
        if self.seq == id && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct NoticeHandle {
    slot: Signal<NoticeSlot>,
    dismiss_after: Duration,
}

impl NoticeHandle {
    pub fn show(&self, kind: NoticeKind, message: impl Into<String>) {
        let mut slot = self.slot;
        let id = slot.write().push(kind, message);
        let after = self.dismiss_after;
        spawn(async move {
            sleep(after).await;
            slot.write().expire(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(NoticeKind::Info, message);
    }

    pub fn clear(&self) {
        let mut slot = self.slot;
        slot.write().clear();
    }

    pub fn current(&self) -> Option<Notice> {
        self.slot.read().current().cloned()
    }
}

pub fn use_notice() -> NoticeHandle {
    let secs = use_admin_store().config().ui.alert_dismiss_secs;
    let slot = use_signal(NoticeSlot::default);
    NoticeHandle {
        slot,
        dismiss_after: Duration::from_secs(secs.max(1)),
    }
}

/// Renders the handle's banner, if any, with a close button.
#[component]
pub fn NoticeBanner(notice: NoticeHandle) -> Element {
    let Some(current) = notice.current() else {
        return rsx! {};
    };
    rsx! {
        AlertBanner {
            class: current.kind.class(),
            on_close: move |_| notice.clear(),
            "{current.message}"
        }
    }
}
