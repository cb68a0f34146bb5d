//! Request descriptions for the requester.

use serde_json::Value;

use crate::error::{ClientError, Result};

/// One GET request: an endpoint path plus ordered query parameters.
///
/// Parameters keep insertion order on the wire. Values are JSON scalars so
/// callers can pass strings, numbers, or booleans directly; anything that has
/// no plain string form is rejected when the request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub endpoint: String,
    pub parameters: Vec<(String, Value)>,
}

impl Query {
    /// Creates a query for the given endpoint with no parameters.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            parameters: Vec::new(),
        }
    }

    /// Appends a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.push((key.into(), value.into()));
        self
    }

    /// Renders every parameter as a `(key, value)` string pair.
    ///
    /// Fails with [`ClientError::InvalidParameter`] on the first value that is
    /// `null`, an array, or an object.
    pub fn query_pairs(&self) -> Result<Vec<(&str, String)>> {
        self.parameters
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(ClientError::InvalidParameter {
                            key: key.clone(),
                            value: other.to_string(),
                        })
                    }
                };
                Ok((key.as_str(), rendered))
            })
            .collect()
    }
}
