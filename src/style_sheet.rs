use crate::browser_profile::BrowserProfile;
use crate::media_list::MediaListView;
use crate::media_query::{MediaQuery, MediaQuerySequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleSheetId(pub(crate) usize);

impl StyleSheetId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Owner of a media query sequence. Only the parts a media list reads are modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    href: Option<String>,
    media: MediaQuerySequence,
}

impl StyleSheet {
    pub fn new(href: Option<&str>, queries: Vec<MediaQuery>) -> Self {
        Self {
            href: href.map(str::to_string),
            media: MediaQuerySequence::new(queries),
        }
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn queries(&self) -> &MediaQuerySequence {
        &self.media
    }

    /// The sheet's `media` object, bound to this sheet's own query sequence.
    pub fn media_list<'a>(&'a self, profile: &'a BrowserProfile) -> MediaListView<'a> {
        MediaListView::bind(self, &self.media, profile)
    }
}
