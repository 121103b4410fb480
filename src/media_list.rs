use std::fmt;

use crate::browser_profile::{BrowserFeature, BrowserProfile};
use crate::media_query::MediaQuerySource;
use crate::script_value::{PrimitiveHint, ScriptObject, generic_default_value};
use crate::style_sheet::StyleSheet;
use crate::{Error, Result};

#[derive(Clone, Copy)]
enum Binding<'a> {
    /// Host-side placeholder: no parent sheet, no queries, no profile.
    Unbound,
    /// `new MediaList()` from script: has a prototype but wraps no queries.
    Constructed { profile: &'a BrowserProfile },
    Bound {
        parent: &'a StyleSheet,
        queries: &'a dyn MediaQuerySource,
        profile: &'a BrowserProfile,
    },
}

/// Script-facing `MediaList`: a read-only view over a style sheet's media queries.
///
/// A bound view borrows the queries and the browser profile, so it can neither
/// outlive nor modify them. Placeholder and script-constructed views only
/// support coercion; `length`, `item` and `mediaText` on them report
/// [`Error::UnboundMediaList`].
#[derive(Clone, Copy)]
pub struct MediaListView<'a> {
    binding: Binding<'a>,
}

impl<'a> MediaListView<'a> {
    pub fn placeholder() -> Self {
        Self {
            binding: Binding::Unbound,
        }
    }

    /// The instance a script gets from `new MediaList()`. Coercion follows the
    /// profile toggles even though no queries are attached.
    pub fn constructed(profile: &'a BrowserProfile) -> Self {
        Self {
            binding: Binding::Constructed { profile },
        }
    }

    pub fn bind(
        parent: &'a StyleSheet,
        queries: &'a dyn MediaQuerySource,
        profile: &'a BrowserProfile,
    ) -> Self {
        Self {
            binding: Binding::Bound {
                parent,
                queries,
                profile,
            },
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.binding, Binding::Bound { .. })
    }

    /// Whether the view has a script identity, i.e. coercion consults the profile.
    pub fn has_identity(&self) -> bool {
        self.profile().is_some()
    }

    fn profile(&self) -> Option<&'a BrowserProfile> {
        match self.binding {
            Binding::Bound { profile, .. } | Binding::Constructed { profile } => Some(profile),
            Binding::Unbound => None,
        }
    }

    pub fn parent_style_sheet(&self) -> Option<&'a StyleSheet> {
        match self.binding {
            Binding::Bound { parent, .. } => Some(parent),
            Binding::Constructed { .. } | Binding::Unbound => None,
        }
    }

    fn queries(&self, operation: &str) -> Result<&'a dyn MediaQuerySource> {
        match self.binding {
            Binding::Bound { queries, .. } => Ok(queries),
            Binding::Constructed { .. } | Binding::Unbound => {
                Err(Error::UnboundMediaList(operation.to_string()))
            }
        }
    }

    pub fn length(&self) -> Result<usize> {
        Ok(self.queries("length")?.len())
    }

    /// Canonical text of the query at `index`, or `None` when out of range.
    pub fn item(&self, index: i32) -> Result<Option<String>> {
        let queries = self.queries("item")?;
        let Ok(index) = usize::try_from(index) else {
            return Ok(None);
        };
        if index >= queries.len() {
            return Ok(None);
        }
        Ok(queries.query_at(index).map(ToString::to_string))
    }

    pub fn media_text(&self) -> Result<String> {
        Ok(self.queries("mediaText")?.serialized_text())
    }
}

impl Default for MediaListView<'_> {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl ScriptObject for MediaListView<'_> {
    fn class_name(&self) -> &'static str {
        "MediaList"
    }

    fn default_value(&self, _hint: PrimitiveHint) -> String {
        if let Some(profile) = self.profile() {
            if profile.has_feature(BrowserFeature::MediaListEmptyString) {
                return String::new();
            }
            if profile.has_feature(BrowserFeature::MediaListAll) {
                return "all".into();
            }
        }
        generic_default_value(self.class_name())
    }
}

impl fmt::Debug for MediaListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.binding {
            Binding::Unbound => f.write_str("MediaListView(unbound)"),
            Binding::Constructed { profile } => f
                .debug_struct("MediaListView")
                .field("constructed", &true)
                .field("profile", &profile.name())
                .finish(),
            Binding::Bound {
                parent,
                queries,
                profile,
            } => f
                .debug_struct("MediaListView")
                .field("href", &parent.href())
                .field("media_text", &queries.serialized_text())
                .field("profile", &profile.name())
                .finish(),
        }
    }
}
