use std::collections::BTreeMap;
use std::fmt;

use crate::encode::encode;

/// A single query parameter value: a string, a number, a boolean, a big
/// integer, or an explicit null.
///
/// Scalars render the way they read: `true` as `true`, `null` as `null`,
/// numbers as their decimal digits. Nested structures are not representable.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryScalar {
    /// A string value. Empty strings render as `key=`.
    Str(String),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// A boolean, rendered as `true`/`false`.
    Bool(bool),
    /// A big integer, rendered as its decimal digits without a suffix.
    BigInt(i128),
    /// An explicit null, rendered as the literal `null`.
    Null,
}

impl fmt::Display for QueryScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryScalar::Str(value) => f.write_str(value),
            QueryScalar::Int(value) => write!(f, "{}", value),
            QueryScalar::UInt(value) => write!(f, "{}", value),
            QueryScalar::Float(value) => write!(f, "{}", value),
            QueryScalar::Bool(value) => write!(f, "{}", value),
            QueryScalar::BigInt(value) => write!(f, "{}", value),
            QueryScalar::Null => f.write_str("null"),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident($conv:expr)),* $(,)?) => {$(
        impl From<$ty> for QueryScalar {
            fn from(value: $ty) -> Self {
                QueryScalar::$variant($conv(value))
            }
        }

        impl From<$ty> for QueryValue {
            fn from(value: $ty) -> Self {
                QueryValue::Scalar(value.into())
            }
        }
    )*};
}

scalar_from! {
    &str => Str(str::to_owned),
    String => Str(std::convert::identity),
    i32 => Int(i64::from),
    i64 => Int(std::convert::identity),
    u32 => UInt(u64::from),
    u64 => UInt(std::convert::identity),
    f64 => Float(std::convert::identity),
    bool => Bool(std::convert::identity),
    i128 => BigInt(std::convert::identity),
}

/// A value in a query bag: one scalar, or an ordered list of scalars that
/// expands into one `key=value` pair per element.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// A single `key=value` pair.
    Scalar(QueryScalar),
    /// One `key=value` pair per element, in element order.
    List(Vec<QueryScalar>),
}

impl From<QueryScalar> for QueryValue {
    fn from(value: QueryScalar) -> Self {
        QueryValue::Scalar(value)
    }
}

impl<T> From<Vec<T>> for QueryValue
where
    T: Into<QueryScalar>,
{
    fn from(values: Vec<T>) -> Self {
        QueryValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for QueryValue
where
    T: Into<QueryScalar>,
{
    fn from(values: [T; N]) -> Self {
        QueryValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// A bag of query parameters.
///
/// Serialization is canonical: pairs are emitted sorted by key
/// (byte-lexicographic, stable), so two bags with the same contents always
/// produce the same string regardless of insertion order. List values stay
/// contiguous and in element order under their shared key.
///
/// ```
/// use urlgen::Queries;
///
/// let mut queries = Queries::new();
/// queries.insert("z", "last");
/// queries.insert("a", "first");
/// queries.insert("array", vec!["1", "2"]);
///
/// assert_eq!(queries.to_query_string(), "a=first&array=1&array=2&z=last");
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Queries {
    inner: BTreeMap<String, QueryValue>,
}

impl Queries {
    /// Creates an empty query bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value for the given key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.inner.insert(key.into(), value.into());
    }

    /// Returns the value registered under the given key.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.inner.get(key)
    }

    /// Returns `true` if the bag contains no values.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of keys in the bag.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Serializes the bag into a percent-encoded query string.
    ///
    /// An empty bag serializes to the empty string; the leading `?` is the
    /// caller's to add (and to omit when the bag is empty).
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        for (key, value) in &self.inner {
            match value {
                QueryValue::Scalar(scalar) => {
                    pairs.push(format!("{}={}", encode(key), encode(&scalar.to_string())));
                }
                QueryValue::List(scalars) => {
                    for scalar in scalars {
                        pairs.push(format!("{}={}", encode(key), encode(&scalar.to_string())));
                    }
                }
            }
        }
        pairs.join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for Queries
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Queries {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Debug for Queries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}
