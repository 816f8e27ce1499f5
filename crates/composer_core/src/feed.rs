//! In-memory list of submitted posts, newest first.

use serde::{Deserialize, Serialize};

use crate::composer::Post;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One submitted post.
pub struct FeedEntry {
    /// Monotonic entry id, starting at 1.
    pub id: u64,
    /// Submission time.
    pub created_at_unix_ms: u64,
    /// Submitted post.
    pub post: Post,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Recent posts feed.
pub struct PostFeed {
    entries: Vec<FeedEntry>,
    last_id: u64,
    last_timestamp_ms: u64,
}

impl PostFeed {
    /// Prepends `post` and returns the new entry.
    ///
    /// Timestamps never go backwards; a clock reading at or below the previous entry is bumped
    /// one millisecond past it.
    pub fn publish(&mut self, post: Post, now_unix_ms: u64) -> &FeedEntry {
        self.last_id += 1;
        self.last_timestamp_ms = now_unix_ms.max(self.last_timestamp_ms.saturating_add(1));
        self.entries.insert(
            0,
            FeedEntry {
                id: self.last_id,
                created_at_unix_ms: self.last_timestamp_ms,
                post,
            },
        );
        &self.entries[0]
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[FeedEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing was posted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::PlatformId;

    fn post(caption: &str) -> Post {
        Post {
            caption: caption.to_string(),
            media: None,
            platforms: vec![PlatformId::from_display_name("Reddit")],
        }
    }

    #[test]
    fn newest_post_comes_first_with_increasing_ids() {
        let mut feed = PostFeed::default();
        feed.publish(post("first"), 1_000);
        feed.publish(post("second"), 2_000);
        let captions: Vec<_> = feed.entries().iter().map(|e| e.post.caption.as_str()).collect();
        assert_eq!(captions, ["second", "first"]);
        assert_eq!(feed.entries()[0].id, 2);
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn timestamps_are_strictly_increasing_even_if_clock_stalls() {
        let mut feed = PostFeed::default();
        let first = feed.publish(post("a"), 5_000).created_at_unix_ms;
        let second = feed.publish(post("b"), 4_000).created_at_unix_ms;
        assert_eq!(first, 5_000);
        assert_eq!(second, 5_001);
    }
}
