//! Query string access shared by the handlers.

/// Raw `key=value` pairs of a request, in the order they were sent.
///
/// Extracted as `Query<Vec<(String, String)>>`, which cannot be rejected for
/// repeated keys, so every bad request still gets a JSON `error` body.
#[derive(Debug, Default)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// First value sent for `key`, `None` when absent or blank.
    pub fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

impl From<Vec<(String, String)>> for QueryPairs {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}
