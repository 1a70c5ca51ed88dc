//! Sparse query-string construction shared by every list and item fetch.
//!
//! Parameters are kept in insertion order. Entries whose value is
//! [`QueryValue::Null`] are retained in the map (so they can override a
//! default filter) but never rendered onto the wire.

use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl QueryValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Rendered form, or `None` for null values.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Null => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

macro_rules! int_query_value {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(value: $t) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

int_query_value!(i32, i64, u32);

/// Values past `i64::MAX` are sent as their decimal text.
macro_rules! wide_query_value {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(value: $t) -> Self {
                i64::try_from(value)
                    .map(Self::Int)
                    .unwrap_or_else(|_| Self::Str(value.to_string()))
            }
        })*
    };
}

wide_query_value!(u64, usize);

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<QueryValue>,
    ) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Overlay `other` on top of `self`; `other` wins on conflicting keys.
    pub fn merge(&mut self, other: &QueryParams) {
        for (key, value) in &other.entries {
            self.insert(key.clone(), value.clone());
        }
    }

    pub fn merged(mut self, other: &QueryParams) -> Self {
        self.merge(other);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key/value pairs that will actually be sent.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.render().map(|rendered| (k.as_str(), rendered)))
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// `path` with the rendered query appended, if any.
    pub fn append_to(&self, path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_entries_never_reach_the_wire() {
        let params = QueryParams::new()
            .with("search", None::<String>)
            .with("page", 0)
            .with("typeId", QueryValue::Null)
            .with("size", 10);

        let query = params.to_query_string();
        assert_eq!(query, "page=0&size=10");
        assert!(!query.contains("null"));
        assert!(!query.contains("search"));
    }

    #[test]
    fn replacing_a_key_keeps_its_position() {
        let mut params = QueryParams::new().with("a", 1).with("b", 2);
        params.insert("a", 3);
        assert_eq!(params.to_query_string(), "a=3&b=2");
    }

    #[test]
    fn merge_prefers_the_overlay() {
        let base = QueryParams::new().with("userId", 4).with("value", "ana");
        let overlay = QueryParams::new().with("value", "joão").with("sort", "name,asc");
        let merged = base.merged(&overlay);
        assert_eq!(
            merged.to_query_string(),
            "userId=4&value=jo%C3%A3o&sort=name%2Casc"
        );
    }

    #[test]
    fn null_overlay_suppresses_a_default() {
        let base = QueryParams::new().with("typeId", 2);
        let merged = base.merged(&QueryParams::new().with("typeId", QueryValue::Null));
        assert_eq!(merged.to_query_string(), "");
    }

    #[test]
    fn empty_params_leave_path_untouched() {
        assert_eq!(QueryParams::new().append_to("/farmer"), "/farmer");
        assert_eq!(
            QueryParams::new().with("id", 7).append_to("/family-group/cultivation/7"),
            "/family-group/cultivation/7?id=7"
        );
    }

    #[test]
    fn unsigned_values_past_i64_keep_their_digits() {
        assert_eq!(QueryValue::from(u64::MAX), QueryValue::Str(u64::MAX.to_string()));
        assert_eq!(
            QueryParams::new().with("id", u64::MAX).to_query_string(),
            "id=18446744073709551615"
        );
        assert_eq!(QueryValue::from(42_usize), QueryValue::Int(42));
    }

    #[test]
    fn collects_from_pairs() {
        let params: QueryParams = [("page", 1), ("size", 50)].into_iter().collect();
        assert_eq!(params.to_query_string(), "page=1&size=50");
    }
}
