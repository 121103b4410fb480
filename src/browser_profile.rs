use std::collections::BTreeSet;
use std::fmt;

use crate::{Error, Result};

/// Emulation toggles that change what scripts observe on a `MediaList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BrowserFeature {
    /// Coercing a media list to a primitive yields `""`.
    MediaListEmptyString,
    /// Coercing a media list to a primitive yields `"all"`.
    MediaListAll,
    /// Scripts may call `new MediaList()`.
    MediaListConstructor,
}

impl BrowserFeature {
    pub const ALL: [BrowserFeature; 3] = [
        Self::MediaListEmptyString,
        Self::MediaListAll,
        Self::MediaListConstructor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::MediaListEmptyString => "JS_MEDIA_LIST_EMPTY_STRING",
            Self::MediaListAll => "JS_MEDIA_LIST_ALL",
            Self::MediaListConstructor => "JS_MEDIA_LIST_CONSTRUCTOR",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.name() == name.trim())
            .ok_or_else(|| Error::UnknownFeature(name.to_string()))
    }
}

impl fmt::Display for BrowserFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named set of feature toggles standing in for one target engine/version.
///
/// Profiles are plain values: a `MediaListView` borrows one and asks it on
/// every coercion, so swapping the profile between calls is observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserProfile {
    name: String,
    features: BTreeSet<BrowserFeature>,
}

impl BrowserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: BTreeSet::new(),
        }
    }

    pub fn with_feature(mut self, feature: BrowserFeature) -> Self {
        self.features.insert(feature);
        self
    }

    pub fn from_feature_names<S: AsRef<str>>(name: &str, features: &[S]) -> Result<Self> {
        let mut profile = Self::new(name);
        for feature in features {
            profile.features.insert(BrowserFeature::from_name(feature.as_ref())?);
        }
        Ok(profile)
    }

    pub fn chrome() -> Self {
        Self::new("chrome")
            .with_feature(BrowserFeature::MediaListEmptyString)
            .with_feature(BrowserFeature::MediaListConstructor)
    }

    pub fn edge() -> Self {
        Self::new("edge").with_feature(BrowserFeature::MediaListEmptyString)
    }

    pub fn firefox() -> Self {
        Self::new("firefox")
            .with_feature(BrowserFeature::MediaListEmptyString)
            .with_feature(BrowserFeature::MediaListConstructor)
    }

    pub fn firefox_68() -> Self {
        Self::new("firefox-68")
            .with_feature(BrowserFeature::MediaListEmptyString)
            .with_feature(BrowserFeature::MediaListConstructor)
    }

    pub fn internet_explorer() -> Self {
        Self::new("ie").with_feature(BrowserFeature::MediaListAll)
    }

    /// Looks up a preset by its short name (`chrome`, `ff68`, `ie`, ...).
    pub fn by_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(Self::chrome()),
            "edge" => Ok(Self::edge()),
            "firefox" | "ff" => Ok(Self::firefox()),
            "firefox-68" | "ff68" => Ok(Self::firefox_68()),
            "ie" | "internet-explorer" => Ok(Self::internet_explorer()),
            _ => Err(Error::UnknownBrowser(name.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_feature(&self, feature: BrowserFeature) -> bool {
        self.features.contains(&feature)
    }

    pub fn features(&self) -> impl Iterator<Item = BrowserFeature> + '_ {
        self.features.iter().copied()
    }
}
