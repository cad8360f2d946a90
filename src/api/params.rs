/// Ordered query parameters with explicit inclusion rules. Optional fields
/// that are absent or empty never reach the wire.
#[derive(Debug, Default)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required field, always sent.
    pub fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.pairs.push((name, value.into()));
    }

    /// Optional field, omitted when absent or empty.
    pub fn push_opt(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            if !value.is_empty() {
                self.pairs.push((name, value.to_string()));
            }
        }
    }

    /// Boolean field, sent as "true" only when set.
    pub fn push_flag(&mut self, name: &'static str, on: bool) {
        if on {
            self.pairs.push((name, "true".to_string()));
        }
    }

    /// Multi-valued field, joined with ", " in the order supplied; omitted
    /// when empty.
    pub fn push_list(&mut self, name: &'static str, items: &[String]) {
        if !items.is_empty() {
            self.pairs.push((name, items.join(", ")));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}
