/// An origin pattern holding a single `*`, stored as the text on either side of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wildcard {
    prefix: String,
    suffix: String,
}

impl Wildcard {
    pub fn new<P, S>(prefix: P, suffix: S) -> Self
    where
        P: Into<String>,
        S: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Splits `pattern` at its first `*`. Returns `None` when there is no `*`.
    ///
    /// Any further `*` stays in the suffix verbatim and is then matched literally.
    pub fn parse(pattern: &str) -> Option<Self> {
        pattern
            .split_once('*')
            .map(|(prefix, suffix)| Self::new(prefix, suffix))
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Prefix and suffix must not overlap inside `candidate`, so `foo*oof`
    /// rejects `foof`.
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.len() >= self.prefix.len() + self.suffix.len()
            && candidate.starts_with(self.prefix.as_str())
            && candidate.ends_with(self.suffix.as_str())
    }
}

#[cfg(test)]
#[path = "wildcard_test.rs"]
mod wildcard_test;
