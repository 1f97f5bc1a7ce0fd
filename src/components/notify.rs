//! Transient, self-dismissing user notices.
//!
//! Every failure path routes through [`push_notice`]; each notice owns
//! its removal timer, so concurrent notices stack and disappear
//! independently.

use std::sync::atomic::{AtomicU64, Ordering};

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::NOTICE_DISMISS_MS;

/// A single visible notice.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Unique id, used as the render key and for removal
    pub id: u64,
    /// User-visible message text
    pub message: String,
}

fn next_notice_id() -> u64 {
    static NEXT_ID: AtomicU64 = AtomicU64::new(0);
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Shows `message` and schedules its removal after [`NOTICE_DISMISS_MS`].
///
/// No deduplication or queuing: every call adds one notice with its own
/// independent timer.
pub fn push_notice(set_notices: WriteSignal<Vec<Notice>>, message: &str) {
    let id = next_notice_id();
    set_notices.update(|notices| {
        notices.push(Notice {
            id,
            message: message.to_string(),
        });
    });

    spawn_local(async move {
        TimeoutFuture::new(NOTICE_DISMISS_MS).await;
        set_notices.update(|notices| notices.retain(|notice| notice.id != id));
    });
}

/// Fixed stack of currently visible notices.
#[component]
pub fn NoticeStack(notices: ReadSignal<Vec<Notice>>) -> impl IntoView {
    view! {
        <div class="notice-stack">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    view! {
                        <div class="error-message">{notice.message}</div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_ids_are_unique() {
        let a = next_notice_id();
        let b = next_notice_id();
        assert_ne!(a, b);
    }
}
