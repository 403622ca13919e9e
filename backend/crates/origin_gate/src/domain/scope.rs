//! Path Scope
//!
//! Which request paths the gate runs on. Deployments either gate only the
//! API (`/api` and everything below it) or every path except static assets.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathScope {
    prefix: Option<String>,
    excluded_prefixes: Vec<String>,
    excluded_suffixes: Vec<String>,
}

impl PathScope {
    /// Every path
    pub fn all() -> Self {
        Self::default()
    }

    /// `prefix` itself and any path below it
    pub fn under(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let prefix = prefix.trim_end_matches('/');
        Self {
            prefix: (!prefix.is_empty()).then(|| prefix.to_string()),
            ..Self::default()
        }
    }

    pub fn excluding_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_prefixes
            .extend(prefixes.into_iter().map(Into::into));
        self
    }

    pub fn excluding_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_suffixes
            .extend(suffixes.into_iter().map(Into::into));
        self
    }

    pub fn matches(&self, path: &str) -> bool {
        if let Some(prefix) = &self.prefix {
            let below = path
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));
            if !below {
                return false;
            }
        }

        !self
            .excluded_prefixes
            .iter()
            .any(|p| path.starts_with(p.as_str()))
            && !self
                .excluded_suffixes
                .iter()
                .any(|s| path.ends_with(s.as_str()))
    }
}
