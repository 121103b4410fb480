use std::collections::VecDeque;

use crate::browser_profile::BrowserProfile;
use crate::style_sheet::StyleSheet;

#[derive(Debug)]
pub(crate) struct DocumentState {
    pub(crate) profile: BrowserProfile,
    pub(crate) style_sheets: Vec<StyleSheet>,
}

impl DocumentState {
    pub(crate) fn new(profile: BrowserProfile) -> Self {
        Self {
            profile,
            style_sheets: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct TraceState {
    pub(crate) enabled: bool,
    pub(crate) coercion: bool,
    pub(crate) logs: VecDeque<String>,
    pub(crate) log_limit: usize,
    pub(crate) to_stderr: bool,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: false,
            coercion: true,
            logs: VecDeque::new(),
            log_limit: 10_000,
            to_stderr: true,
        }
    }
}

impl TraceState {
    pub(crate) fn push_line(&mut self, line: String) {
        if !self.enabled {
            return;
        }
        if self.to_stderr {
            eprintln!("{line}");
        }
        while self.logs.len() >= self.log_limit {
            self.logs.pop_front();
        }
        self.logs.push_back(line);
    }
}
