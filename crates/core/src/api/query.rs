use std::fmt::Display;

/// Ordered list of query parameters for a list request.
///
/// Every builder method skips its value when it carries no information: unset,
/// empty, or equal to the filter's neutral default. Default-filtered requests
/// therefore stay minimal and their cache keys stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` when the value is present.
    pub fn opt<T: Display>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    /// Add a text value unless it is missing or blank. The value is trimmed.
    pub fn text(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.push(key, v);
        }
        self
    }

    /// Add the value unless it equals `neutral`.
    pub fn non_default<T: Display + PartialEq>(
        &mut self,
        key: &str,
        value: Option<T>,
        neutral: T,
    ) -> &mut Self {
        match value {
            Some(v) if v != neutral => self.push(key, v),
            _ => self,
        }
    }

    /// Lower bound of a range: skipped when at or below the range floor.
    pub fn above<T: Display + PartialOrd>(&mut self, key: &str, value: Option<T>, floor: T) -> &mut Self {
        match value {
            Some(v) if v > floor => self.push(key, v),
            _ => self,
        }
    }

    /// Upper bound of a range: skipped when at or above the range ceiling.
    pub fn below<T: Display + PartialOrd>(&mut self, key: &str, value: Option<T>, ceiling: T) -> &mut Self {
        match value {
            Some(v) if v < ceiling => self.push(key, v),
            _ => self,
        }
    }

    /// Multi-select value, sent as one repeated key per entry.
    pub fn many<T: Display>(&mut self, key: &str, values: &[T]) -> &mut Self {
        for v in values {
            self.push(key, v);
        }
        self
    }

    /// Tri-state feature flag: only sent when explicitly set.
    pub fn flag(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        self.opt(key, value)
    }

    fn push<T: Display>(&mut self, key: &str, value: T) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// First value sent for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// `application/x-www-form-urlencoded` rendering, in insertion order.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// `path?query`, or just `path` when there is nothing to send.
    /// Also used as the cache key of the request.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.to_query_string())
        }
    }
}
