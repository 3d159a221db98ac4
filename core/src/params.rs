//! Request parameters collected before canonicalization.

/// The value of one request parameter.
///
/// A `List` is expanded into one query entry per element at serialization
/// time, all sharing the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// A single scalar value.
    Single(String),
    /// Repeated values for the same key, in caller order.
    List(Vec<String>),
}

impl ParamValue {
    /// Iterate the values this parameter expands to.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let s: &[String] = match self {
            ParamValue::Single(v) => std::slice::from_ref(v),
            ParamValue::List(vs) => vs.as_slice(),
        };
        s.iter().map(String::as_str)
    }

    /// Get the scalar value, `None` for lists.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ParamValue::Single(v) => Some(v),
            ParamValue::List(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Single(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Single(v)
    }
}

impl From<&String> for ParamValue {
    fn from(v: &String) -> Self {
        ParamValue::Single(v.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Single(if v { "true" } else { "false" }.to_string())
    }
}

macro_rules! impl_param_value_for_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(v: $t) -> Self {
                    ParamValue::Single(v.to_string())
                }
            }
        )*
    };
}

impl_param_value_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<T: Into<String>> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        ParamValue::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(v: &[&str]) -> Self {
        ParamValue::List(v.iter().map(|s| s.to_string()).collect())
    }
}

/// RequestParameters is the ordered set of named parameters of one request.
///
/// Keys are not unique: pushing the same key twice yields two query entries.
/// Use [`RequestParameters::set`] to replace instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    pairs: Vec<(String, ParamValue)>,
}

impl RequestParameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, keeping any existing entry with the same key.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(key, value);
        self
    }

    /// Replace every entry with `key` by a single new one.
    ///
    /// The new entry takes the position of the first replaced entry, or goes
    /// to the end if `key` was absent.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| *k == key) {
            Some(idx) => {
                self.pairs[idx].1 = value;
                let mut seen = false;
                self.pairs.retain(|(k, _)| {
                    if *k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.pairs.push((key, value)),
        }
    }

    /// Append every pair from `other`.
    pub fn append(&mut self, other: RequestParameters) {
        self.pairs.extend(other.pairs);
    }

    /// Get the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Check whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Remove every entry with `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Number of (unexpanded) entries.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate entries with list values expanded into repeated keys.
    pub fn expanded(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .flat_map(|(k, v)| v.values().map(move |v| (k.as_str(), v)))
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for RequestParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RequestParameters::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for RequestParameters {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.push(k, v);
        }
    }
}
