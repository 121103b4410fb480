use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaRestrictor {
    Only,
    Not,
}

impl MediaRestrictor {
    fn keyword(self) -> &'static str {
        match self {
            Self::Only => "only",
            Self::Not => "not",
        }
    }
}

/// One `(name)` or `(name: value)` expression of a media query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFeature {
    pub name: String,
    pub value: Option<String>,
}

impl MediaFeature {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

impl fmt::Display for MediaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}: {}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// An already-parsed media query. Its `Display` output is the canonical text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaQuery {
    restrictor: Option<MediaRestrictor>,
    media_type: String,
    features: Vec<MediaFeature>,
}

impl MediaQuery {
    pub fn new(media_type: impl Into<String>) -> Self {
        Self {
            restrictor: None,
            media_type: media_type.into(),
            features: Vec::new(),
        }
    }

    /// A query with no explicit media type, e.g. `(color)`; renders as `all and (color)`.
    pub fn all() -> Self {
        Self::new("all")
    }

    pub fn only(mut self) -> Self {
        self.restrictor = Some(MediaRestrictor::Only);
        self
    }

    pub fn negated(mut self) -> Self {
        self.restrictor = Some(MediaRestrictor::Not);
        self
    }

    pub fn and(mut self, feature: MediaFeature) -> Self {
        self.features.push(feature);
        self
    }

    pub fn restrictor(&self) -> Option<MediaRestrictor> {
        self.restrictor
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn features(&self) -> &[MediaFeature] {
        &self.features
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(restrictor) = self.restrictor {
            write!(f, "{} ", restrictor.keyword())?;
        }
        f.write_str(&self.media_type)?;
        for feature in &self.features {
            write!(f, " and ({feature})")?;
        }
        Ok(())
    }
}

/// Read access a `MediaListView` needs from whatever owns the parsed queries.
pub trait MediaQuerySource {
    fn len(&self) -> usize;

    fn query_at(&self, index: usize) -> Option<&MediaQuery>;

    /// Full textual form of the list, in the owner's own joining convention.
    fn serialized_text(&self) -> String;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaQuerySequence {
    queries: Vec<MediaQuery>,
}

impl MediaQuerySequence {
    pub fn new(queries: Vec<MediaQuery>) -> Self {
        Self { queries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaQuery> {
        self.queries.iter()
    }
}

impl From<Vec<MediaQuery>> for MediaQuerySequence {
    fn from(queries: Vec<MediaQuery>) -> Self {
        Self::new(queries)
    }
}

impl MediaQuerySource for MediaQuerySequence {
    fn len(&self) -> usize {
        self.queries.len()
    }

    fn query_at(&self, index: usize) -> Option<&MediaQuery> {
        self.queries.get(index)
    }

    fn serialized_text(&self) -> String {
        let mut out = String::new();
        for (idx, query) in self.queries.iter().enumerate() {
            if idx > 0 {
                out.push_str(", ");
            }
            out.push_str(&query.to_string());
        }
        out
    }
}
