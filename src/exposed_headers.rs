use crate::header_name::canonicalize_header_name;

/// Canonical names for `Access-Control-Expose-Headers`, in configured order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub(crate) struct ExposedHeaders {
    values: Vec<String>,
}

impl ExposedHeaders {
    pub(crate) fn from_config(values: &[String]) -> Self {
        Self {
            values: values
                .iter()
                .map(|value| canonicalize_header_name(value))
                .collect(),
        }
    }

    pub(crate) fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(", "))
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
