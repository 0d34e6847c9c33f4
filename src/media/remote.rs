// SPDX-License-Identifier: MPL-2.0
//! Remote image cache.

use crate::catalog::ImageSource;
use crate::config::DEFAULT_IMAGE_CACHE_CAPACITY;
use crate::error::Result;
use crate::http;
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashMap;
use std::num::NonZeroUsize;

/// Downloads the encoded bytes of a remote image.
pub async fn fetch(url: String) -> Result<Vec<u8>> {
    http::get_bytes(&url).await
}

#[derive(Debug, Clone)]
enum Entry {
    Pending,
    Ready(Handle),
    Failed,
}

/// What the renderer should show for an image right now.
#[derive(Debug, Clone)]
pub enum Preview {
    Ready(Handle),
    Pending,
    Failed,
}

impl Preview {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Preview::Ready(_))
    }
}

/// Remote image handles keyed by URL.
///
/// Images of the cards on screen are pinned and never evicted. Once a card
/// goes away its images move to a bounded LRU, so switching back to a
/// recently seen category does not download them again.
pub struct ImageStore {
    visible: HashMap<String, Entry>,
    cache: LruCache<String, Entry>,
}

impl std::fmt::Debug for ImageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageStore")
            .field("visible", &self.visible.len())
            .field("cached", &self.cache.len())
            .field("cap", &self.cache.cap())
            .finish()
    }
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_CACHE_CAPACITY)
    }
}

impl ImageStore {
    /// Creates a store whose LRU holds at most `capacity` off-screen images
    /// (minimum one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            visible: HashMap::new(),
            cache: LruCache::new(capacity),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len() + self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.cache.is_empty()
    }

    /// Resolves a source to something drawable without touching LRU order.
    #[must_use]
    pub fn preview(&self, source: &ImageSource) -> Preview {
        match source {
            ImageSource::Local(path) => Preview::Ready(Handle::from_path(path.clone())),
            ImageSource::Remote(url) => {
                match self.visible.get(url).or_else(|| self.cache.peek(url)) {
                    Some(Entry::Ready(handle)) => Preview::Ready(handle.clone()),
                    Some(Entry::Failed) => Preview::Failed,
                    Some(Entry::Pending) | None => Preview::Pending,
                }
            }
        }
    }

    /// Pins the remote images of `sources` as the visible set and returns the
    /// URLs that need a download. Each URL is returned at most once.
    ///
    /// Images that were visible before and are not part of `sources` any more
    /// move to the LRU. Downloads still running for them are forgotten; their
    /// result lands in the LRU when it arrives.
    pub fn claim_visible<'a>(
        &mut self,
        sources: impl IntoIterator<Item = &'a ImageSource>,
    ) -> Vec<String> {
        let mut visible: HashMap<String, Entry> = HashMap::new();
        let mut claimed = Vec::new();
        for url in sources.into_iter().filter_map(ImageSource::as_url) {
            if visible.contains_key(url) {
                continue;
            }
            let known = self
                .visible
                .remove(url)
                .or_else(|| self.cache.pop(url));
            let entry = known.unwrap_or_else(|| {
                claimed.push(url.to_string());
                Entry::Pending
            });
            visible.insert(url.to_string(), entry);
        }

        for (url, entry) in std::mem::replace(&mut self.visible, visible) {
            if !matches!(entry, Entry::Pending) {
                self.cache.put(url, entry);
            }
        }
        claimed
    }

    /// Stores a finished download.
    pub fn complete(&mut self, url: String, result: Result<Vec<u8>>) {
        let entry = match result {
            Ok(bytes) => Entry::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!(%url, error = %err, "failed to fetch image");
                Entry::Failed
            }
        };
        match self.visible.get_mut(&url) {
            Some(slot) => *slot = entry,
            None => {
                self.cache.put(url, entry);
            }
        }
    }
}
