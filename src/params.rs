use std::collections::BTreeMap;
use std::fmt;

/// A value supplied for one path parameter: a single scalar or an ordered
/// list of scalars.
///
/// Scalars convert from strings and integers, lists from vectors and slices,
/// so parameter bags can usually be built without naming this type:
///
/// ```
/// use urlgen::Params;
///
/// let mut params = Params::new();
/// params.insert("id", 42);
/// params.insert("slug", vec!["a", "b"]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParamValue {
    /// A single path segment value.
    Value(String),
    /// An ordered list of path segment values, one per rendered segment.
    List(Vec<String>),
}

impl ParamValue {
    /// Returns `true` for a scalar that is the empty string.
    ///
    /// Empty scalars are indistinguishable from absent values when rendered,
    /// so the renderer treats them as missing.
    pub(crate) fn is_empty_scalar(&self) -> bool {
        matches!(self, ParamValue::Value(value) if value.is_empty())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Value(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Value(value)
    }
}

macro_rules! param_from_int {
    ($($ty:ty),*) => {$(
        impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                ParamValue::Value(value.to_string())
            }
        }
    )*};
}

param_from_int!(i32, i64, u32, u64, usize);

impl<T> From<Vec<T>> for ParamValue
where
    T: Into<String>,
{
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        ParamValue::List(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(values: [&str; N]) -> Self {
        ParamValue::List(values.iter().map(|v| (*v).to_owned()).collect())
    }
}

/// A bag of path parameter values, keyed by parameter name.
///
/// Iteration order is deterministic (sorted by name), though the renderer
/// only ever looks parameters up by the names its template declares; extra
/// entries are ignored.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Params {
    inner: BTreeMap<String, ParamValue>,
}

impl Params {
    /// Creates an empty parameter bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value for the given parameter name, replacing any previous
    /// value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.inner.insert(name.into(), value.into());
    }

    /// Returns the value registered under the given name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.inner.get(name)
    }

    /// Returns `true` if the bag contains no values.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of values in the bag.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator over the names and values in the bag.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}
