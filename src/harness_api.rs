use crate::browser_profile::{BrowserFeature, BrowserProfile};
use crate::media_list::MediaListView;
use crate::media_query::MediaQuery;
use crate::runtime_state::{DocumentState, TraceState};
use crate::script_value::{PrimitiveHint, ScriptObject, Value};
use crate::style_sheet::{StyleSheet, StyleSheetId};
use crate::{Error, Result};

/// Script-side entry point: owns the style sheets of one document and the
/// browser profile their `media` objects are evaluated under.
#[derive(Debug)]
pub struct Harness {
    pub(crate) document: DocumentState,
    pub(crate) trace_state: TraceState,
}

impl Harness {
    pub fn new(profile: BrowserProfile) -> Self {
        Self {
            document: DocumentState::new(profile),
            trace_state: TraceState::default(),
        }
    }

    pub fn for_browser(name: &str) -> Result<Self> {
        Ok(Self::new(BrowserProfile::by_name(name)?))
    }

    pub fn profile(&self) -> &BrowserProfile {
        &self.document.profile
    }

    pub fn set_profile(&mut self, profile: BrowserProfile) {
        self.trace_line(format!("[media] profile={}", profile.name()));
        self.document.profile = profile;
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace_state.enabled = enabled;
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.trace_state.logs.drain(..).collect()
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace_state.to_stderr = enabled;
    }

    pub fn set_trace_coercion(&mut self, enabled: bool) {
        self.trace_state.coercion = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::ScriptRuntime(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_state.log_limit = max_entries;
        while self.trace_state.logs.len() > max_entries {
            self.trace_state.logs.pop_front();
        }
        Ok(())
    }

    pub fn add_style_sheet(&mut self, href: Option<&str>, queries: Vec<MediaQuery>) -> StyleSheetId {
        let id = StyleSheetId(self.document.style_sheets.len());
        self.document.style_sheets.push(StyleSheet::new(href, queries));
        self.trace_line(format!("[media] sheet#{} added", id.0));
        id
    }

    pub fn style_sheet(&self, id: StyleSheetId) -> Result<&StyleSheet> {
        self.document
            .style_sheets
            .get(id.0)
            .ok_or(Error::StyleSheetNotFound(id.0))
    }

    pub fn style_sheet_count(&self) -> usize {
        self.document.style_sheets.len()
    }

    /// `sheet.media`, bound to the current profile.
    pub fn media_list(&self, id: StyleSheetId) -> Result<MediaListView<'_>> {
        Ok(self.style_sheet(id)?.media_list(&self.document.profile))
    }

    /// `new MediaList()`. Only profiles exposing the constructor allow it; the
    /// result wraps no queries but coerces under the profile's toggles.
    pub fn construct_media_list(&self) -> Result<MediaListView<'_>> {
        let profile = &self.document.profile;
        if !profile.has_feature(BrowserFeature::MediaListConstructor) {
            return Err(Error::ScriptRuntime(format!(
                "MediaList is not a constructor in {}",
                profile.name()
            )));
        }
        Ok(MediaListView::constructed(profile))
    }

    /// Reads `sheet.media[name]`. Names the object does not expose read as `undefined`.
    pub fn get_media_property(&mut self, id: StyleSheetId, name: &str) -> Result<Value> {
        let media = self.media_list(id)?;
        let value = match name {
            "length" => Value::Number(media.length()? as i64),
            "mediaText" => Value::String(media.media_text()?),
            _ => Value::Undefined,
        };
        self.trace_line(format!(
            "[media] sheet#{}.{name} -> {}",
            id.0,
            value.as_string()
        ));
        Ok(value)
    }

    /// Calls `sheet.media[name](...args)`.
    pub fn call_media_method(&mut self, id: StyleSheetId, name: &str, args: &[Value]) -> Result<Value> {
        let media = self.media_list(id)?;
        let value = match name {
            "item" => {
                let index = args.first().unwrap_or(&Value::Undefined).to_int32();
                Value::from(media.item(index)?)
            }
            _ => {
                return Err(Error::ScriptRuntime(format!(
                    "MediaList.{name} is not a function"
                )));
            }
        };
        self.trace_line(format!(
            "[media] sheet#{}.{name}() -> {}",
            id.0,
            value.as_string()
        ));
        Ok(value)
    }

    pub fn media_to_primitive(&mut self, id: StyleSheetId, hint: PrimitiveHint) -> Result<String> {
        let primitive = self.media_list(id)?.default_value(hint);
        if self.trace_state.coercion {
            self.trace_line(format!(
                "[media] sheet#{} to_primitive hint={hint:?} profile={} -> {primitive:?}",
                id.0,
                self.document.profile.name()
            ));
        }
        Ok(primitive)
    }

    /// `prefix + sheet.media`: string concatenation coerces with the default hint.
    pub fn concat_media(&mut self, id: StyleSheetId, prefix: &str) -> Result<String> {
        let primitive = self.media_to_primitive(id, PrimitiveHint::Default)?;
        Ok(format!("{prefix}{primitive}"))
    }

    fn trace_line(&mut self, line: String) {
        self.trace_state.push_line(line);
    }
}
