use composer_core::{ComposerAction, Post};
use leptos::{logging, spawn_local, RwSignal, SignalSet, SignalUpdate, SignalWithUntracked};
use platform_host::{next_monotonic_timestamp_ms, unix_time_ms_now};

use super::ComposerHostContext;
use crate::runtime_context::{ComposerRuntimeContext, Notice};

const POST_SCHEDULED_NOTICE: &str =
    "Post scheduled successfully! It will be shared across your selected platforms.";
const NOTICE_DISMISS_MS: u32 = 4_000;

pub(super) fn revoke_preview(host: &ComposerHostContext, url: &str) {
    if let Err(err) = host.media_previews.revoke_preview(url) {
        logging::warn!("media preview revoke failed for {url}: {err}");
    }
}

pub(super) fn publish_post(host: ComposerHostContext, runtime: ComposerRuntimeContext, post: Post) {
    runtime.feed.update(|feed| {
        feed.publish(post, unix_time_ms_now());
    });
    runtime.dispatch_action(ComposerAction::SubmissionHandled);
    show_notice(host, runtime.notice, POST_SCHEDULED_NOTICE, NOTICE_DISMISS_MS);
}

fn show_notice(
    host: ComposerHostContext,
    notice: RwSignal<Option<Notice>>,
    text: &'static str,
    dismiss_after_ms: u32,
) {
    let id = next_monotonic_timestamp_ms();
    notice.set(Some(Notice { id, text }));
    let timer = host.timer();
    spawn_local(async move {
        timer.sleep_ms(dismiss_after_ms).await;
        // A newer notice owns the slot now.
        if notice.with_untracked(|current| current.as_ref().map(|n| n.id) == Some(id)) {
            notice.set(None);
        }
    });
}
