use composer_core::{FeedEntry, MediaKind};
use leptos::*;

use crate::runtime_context::use_composer_runtime;

#[component]
/// Submitted posts, newest first.
pub fn RecentPosts() -> impl IntoView {
    let runtime = use_composer_runtime();
    let entries = create_memo(move |_| runtime.feed.with(|feed| feed.entries().to_vec()));

    view! {
        <Show when=move || entries.with(|entries| !entries.is_empty())>
            <section class="recent-posts">
                <h2>"Recent posts"</h2>
                <For each=move || entries.get() key=|entry| entry.id let:entry>
                    <PostCard entry />
                </For>
            </section>
        </Show>
    }
}

#[component]
fn PostCard(entry: FeedEntry) -> impl IntoView {
    let runtime = use_composer_runtime();
    let platform_names: Vec<String> = entry
        .post
        .platforms
        .iter()
        .map(|id| {
            runtime
                .catalog
                .get(id)
                .map_or_else(|| id.to_string(), |platform| platform.name.clone())
        })
        .collect();
    let media = entry.post.media.clone().map(|media| match media.kind {
        MediaKind::Image => view! { <img src=media.preview_url alt="Post media" /> }.into_view(),
        MediaKind::Video => view! { <video src=media.preview_url controls=true /> }.into_view(),
    });

    view! {
        <article class="post-card" data-post-id=entry.id>
            <p class="post-card-caption">{entry.post.caption}</p>
            {media.map(|media| view! { <div class="post-card-media">{media}</div> })}
            <ul class="post-card-platforms">
                {platform_names
                    .into_iter()
                    .map(|name| view! { <li class="platform-chip">{name}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
}
