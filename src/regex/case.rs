use super::Regex;
use crate::fragment::CaseMode;

impl Regex {
    /// Match the top fragment case-insensitively: `(?i)…(?-i)`.
    ///
    /// On an empty builder the scope covers everything appended afterwards.
    pub fn case_insensitive(self) -> Self {
        self.scope_case(CaseMode::Insensitive)
    }

    /// Match the top fragment case-sensitively: `(?-i)…(?i)`.
    pub fn case_sensitive(self) -> Self {
        self.scope_case(CaseMode::Sensitive)
    }

    /// [`case_insensitive`](Regex::case_insensitive), or its opposite when `enabled` is false.
    pub fn set_case_insensitive(self, enabled: bool) -> Self {
        if enabled {
            self.case_insensitive()
        } else {
            self.case_sensitive()
        }
    }

    pub fn set_case_sensitive(self, enabled: bool) -> Self {
        self.set_case_insensitive(!enabled)
    }

    fn scope_case(mut self, mode: CaseMode) -> Self {
        match self.stack.last_mut() {
            Some(top) => top.set_case(mode),
            None => self.case_mode = Some(mode),
        }
        self
    }
}
