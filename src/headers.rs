use std::collections::HashMap;

/// How a mutation lands on the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderOp {
    /// Add another value, keeping whatever is already there (`Vary`).
    Append,
    /// Replace any existing value.
    Set,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMutation {
    pub name: &'static str,
    pub value: String,
    pub op: HeaderOp,
}

/// Anything response headers can be written into.
pub trait HeaderSink {
    fn append_header(&mut self, name: &str, value: &str);
    fn set_header(&mut self, name: &str, value: &str);
}

impl HeaderSink for HashMap<String, Vec<String>> {
    fn append_header(&mut self, name: &str, value: &str) {
        self.entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    fn set_header(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), vec![value.to_string()]);
    }
}

/// Ordered header mutations produced for one request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    mutations: Vec<HeaderMutation>,
}

impl Headers {
    pub(crate) fn new() -> Self {
        Self::with_estimate(8)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            mutations: Vec::with_capacity(estimate),
        }
    }

    pub(crate) fn append<S: Into<String>>(&mut self, name: &'static str, value: S) {
        self.mutations.push(HeaderMutation {
            name,
            value: value.into(),
            op: HeaderOp::Append,
        });
    }

    pub(crate) fn set<S: Into<String>>(&mut self, name: &'static str, value: S) {
        let value = value.into();
        if let Some(existing) = self
            .mutations
            .iter_mut()
            .find(|mutation| mutation.op == HeaderOp::Set && mutation.name == name)
        {
            existing.value = value;
            return;
        }

        self.mutations.push(HeaderMutation {
            name,
            value,
            op: HeaderOp::Set,
        });
    }

    pub(crate) fn extend(&mut self, other: Headers) {
        for mutation in other.mutations {
            match mutation.op {
                HeaderOp::Append => self.append(mutation.name, mutation.value),
                HeaderOp::Set => self.set(mutation.name, mutation.value),
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeaderMutation> {
        self.mutations.iter()
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    /// Every value recorded for `name`, in order. Names compare ignoring ASCII case.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.mutations
            .iter()
            .filter(move |mutation| mutation.name.eq_ignore_ascii_case(name))
            .map(|mutation| mutation.value.as_str())
    }

    /// The values recorded for `name` joined with `", "`, the way they read on the wire.
    pub fn get(&self, name: &str) -> Option<String> {
        let values = self.values(name).collect::<Vec<_>>();
        if values.is_empty() {
            None
        } else {
            Some(values.join(", "))
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values(name).next().is_some()
    }

    /// Replays the mutations onto `sink` in order.
    pub fn apply_to<S: HeaderSink + ?Sized>(&self, sink: &mut S) {
        for mutation in &self.mutations {
            match mutation.op {
                HeaderOp::Append => sink.append_header(mutation.name, &mutation.value),
                HeaderOp::Set => sink.set_header(mutation.name, &mutation.value),
            }
        }
    }
}

impl IntoIterator for Headers {
    type Item = HeaderMutation;
    type IntoIter = std::vec::IntoIter<HeaderMutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.mutations.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a HeaderMutation;
    type IntoIter = std::slice::Iter<'a, HeaderMutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.mutations.iter()
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
