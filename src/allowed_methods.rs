use crate::constants::method;
use crate::util::normalize_upper;

/// Upper-cased methods a cross-origin request may use.
///
/// An empty list denies every method, `OPTIONS` included.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct AllowedMethods {
    methods: Vec<String>,
}

impl AllowedMethods {
    /// Builds from configuration; no methods means GET, POST and HEAD.
    pub(crate) fn from_config(methods: &[String]) -> Self {
        if methods.is_empty() {
            return Self::default();
        }

        Self::list(methods.iter().map(|value| normalize_upper(value)))
    }

    pub(crate) fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            methods: values.into_iter().map(Into::into).collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[String] {
        &self.methods
    }

    pub(crate) fn allows_method(&self, candidate: &str) -> bool {
        if self.methods.is_empty() {
            return false;
        }

        let candidate = normalize_upper(candidate);
        if candidate == method::OPTIONS {
            return true;
        }

        self.methods.iter().any(|allowed| *allowed == candidate)
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([method::GET, method::POST, method::HEAD])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
