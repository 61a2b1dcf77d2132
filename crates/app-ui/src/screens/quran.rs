//! Quran browsing screens

use app_core::quran::{self, Surah};
use app_state::Observable;
use std::collections::BTreeSet;

use crate::coordinator::SharedCoordinator;
use crate::navigation::QuranTarget;
use crate::theme::ImageAsset;

/// View-model for the surah list and bookmarks
#[derive(Debug)]
pub struct QuranViewModel {
    coordinator: SharedCoordinator<QuranTarget>,
    /// Search text
    pub query: Observable<String>,
    /// Bookmarked surah numbers
    pub bookmarks: Observable<BTreeSet<u16>>,
}

impl QuranViewModel {
    /// Create with saved bookmarks
    pub fn new(
        coordinator: SharedCoordinator<QuranTarget>,
        bookmarks: impl IntoIterator<Item = u16>,
    ) -> Self {
        let bookmarks = bookmarks
            .into_iter()
            .filter(|n| quran::surah(*n).is_some())
            .collect();
        Self {
            coordinator,
            query: Observable::default(),
            bookmarks: Observable::new(bookmarks),
        }
    }

    /// Update the search text
    pub fn set_query(&self, query: impl Into<String>) {
        self.query.set(query.into());
    }

    /// Surahs matching the search text
    pub fn surahs(&self) -> Vec<Surah> {
        self.query.with(|q| quran::search(q))
    }

    /// Open a surah from the top
    pub fn open_surah(&self, number: u16) {
        self.coordinator.navigate(QuranTarget::Surah { number, ayah: None });
    }

    /// Open a surah at an ayah
    pub fn open_ayah(&self, number: u16, ayah: u16) {
        self.coordinator.navigate(QuranTarget::Surah {
            number,
            ayah: Some(ayah),
        });
    }

    /// Show the bookmarks list
    pub fn open_bookmarks(&self) {
        self.coordinator.navigate(QuranTarget::Bookmarks);
    }

    /// Whether a surah is bookmarked
    pub fn is_bookmarked(&self, number: u16) -> bool {
        self.bookmarks.with(|b| b.contains(&number))
    }

    /// Bookmark icon for a surah row
    pub fn bookmark_icon(&self, number: u16) -> ImageAsset {
        if self.is_bookmarked(number) {
            ImageAsset::BookmarkFilled
        } else {
            ImageAsset::Bookmark
        }
    }

    /// Add or remove a bookmark, returning whether it is now set
    pub fn toggle_bookmark(&self, number: u16) -> bool {
        if quran::surah(number).is_none() {
            tracing::warn!("Ignoring bookmark for unknown surah {}", number);
            return false;
        }
        let mut added = false;
        self.bookmarks.update(|b| {
            added = b.insert(number);
            if !added {
                b.remove(&number);
            }
        });
        added
    }

    /// Bookmarked surahs in mushaf order
    pub fn bookmarked_surahs(&self) -> Vec<Surah> {
        self.bookmarks
            .with(|b| b.iter().filter_map(|n| quran::surah(*n)).collect())
    }
}
