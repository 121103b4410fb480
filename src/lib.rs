//! Deterministic `MediaList` host object for browser-runtime tests.
//!
//! A style sheet's `media` object exposes `length`, `item(index)` and
//! `mediaText`, and its implicit string conversion differs between engines:
//! some yield `""`, old IE yields `"all"`, and anything else falls back to
//! `"[object MediaList]"`. Which one a script sees is decided by the
//! [`BrowserProfile`] the view is bound to.
//!
//! ```
//! use browser_media_list::{BrowserProfile, MediaFeature, MediaQuery, PrimitiveHint, ScriptObject, StyleSheet};
//!
//! let sheet = StyleSheet::new(
//!     None,
//!     vec![
//!         MediaQuery::new("screen"),
//!         MediaQuery::new("print").and(MediaFeature::new("max-width", "600px")),
//!     ],
//! );
//! let ie = BrowserProfile::internet_explorer();
//! let media = sheet.media_list(&ie);
//! assert_eq!(media.length().unwrap(), 2);
//! assert_eq!(media.media_text().unwrap(), "screen, print and (max-width: 600px)");
//! assert_eq!(media.default_value(PrimitiveHint::String), "all");
//! ```

use std::error::Error as StdError;
use std::fmt;

mod browser_profile;
mod harness_api;
mod media_list;
mod media_query;
mod runtime_state;
mod script_value;
mod style_sheet;

pub use browser_profile::{BrowserFeature, BrowserProfile};
pub use harness_api::Harness;
pub use media_list::MediaListView;
pub use media_query::{MediaFeature, MediaQuery, MediaQuerySequence, MediaQuerySource, MediaRestrictor};
pub use script_value::{PrimitiveHint, ScriptObject, Value, generic_default_value};
pub use style_sheet::{StyleSheet, StyleSheetId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnboundMediaList(String),
    UnknownBrowser(String),
    UnknownFeature(String),
    StyleSheetNotFound(usize),
    ScriptRuntime(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundMediaList(operation) => {
                write!(f, "media list is not bound to a style sheet: {operation}")
            }
            Self::UnknownBrowser(name) => write!(f, "unknown browser profile: {name}"),
            Self::UnknownFeature(name) => write!(f, "unknown browser feature: {name}"),
            Self::StyleSheetNotFound(index) => write!(f, "style sheet not found: #{index}"),
            Self::ScriptRuntime(msg) => write!(f, "script runtime error: {msg}"),
        }
    }
}

impl StdError for Error {}
