//! Dynamic value model for runtime shape checks
//!
//! Every predicate and assertion in this crate inspects a [`Value`]: a tagged
//! representation of a dynamically typed value (null, boolean, number, string,
//! symbol, array, keyed object, or callable). Values are built once and never
//! mutated by any predicate.
//!
//! # Examples
//!
//! ```
//! use attest::Value;
//!
//! let v = Value::from("hello");
//! assert_eq!(v.type_name(), "string");
//! assert!(v.is_truthy());
//!
//! let empty = Value::from("");
//! assert!(!empty.is_truthy());
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A unique, unforgeable token usable as an object key or standalone value.
///
/// Symbols are minted from a process-wide counter; two symbols compare equal
/// only if one was cloned from the other. The optional description is purely
/// diagnostic and does not participate in identity.
///
/// # Example
///
/// ```
/// use attest::Symbol;
///
/// let a = Symbol::new();
/// let b = Symbol::new();
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
#[derive(Clone, Debug)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

impl Symbol {
    /// Mint a fresh symbol with no description.
    pub fn new() -> Self {
        Symbol {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: None,
        }
    }

    /// Mint a fresh symbol carrying a diagnostic description.
    pub fn with_description(description: impl Into<String>) -> Self {
        Symbol {
            description: Some(description.into()),
            ..Symbol::new()
        }
    }

    /// The diagnostic description, if one was supplied at creation.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol::new()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(d) => write!(f, "Symbol({})", d),
            None => write!(f, "Symbol()"),
        }
    }
}

/// An object property key: a string or a symbol.
///
/// Numeric property keys are coerced to their canonical string form (see
/// [`Key::from_value`]), so `1.0` and `"1"` address the same property.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// A string key.
    Str(String),
    /// A symbol key.
    Sym(Symbol),
}

impl Key {
    /// Convert a property-key value into a lookup key.
    ///
    /// Returns `None` when the value is not a valid property key: only
    /// non-empty strings, non-NaN non-zero numbers, and symbols qualify.
    /// Numbers are rendered in canonical form (`1.0` → `"1"`, `-1.5` →
    /// `"-1.5"`).
    pub fn from_value(value: &Value) -> Option<Key> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Key::Str(s.clone())),
            Value::Number(n) if !n.is_nan() && *n != 0.0 => {
                Some(Key::Str(canonical_number(*n)))
            }
            Value::Symbol(s) => Some(Key::Sym(s.clone())),
            _ => None,
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<Symbol> for Key {
    fn from(s: Symbol) -> Self {
        Key::Sym(s)
    }
}

/// Render a number the way it would appear as a property key.
///
/// Integral values drop the fractional part (`3.0` → `"3"`); everything else
/// uses the shortest round-trippable decimal form.
fn canonical_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// A callable value.
///
/// Wraps a native Rust closure behind an `Arc`; cloning is cheap and two
/// callables compare equal only when they share the same allocation.
#[derive(Clone)]
pub struct NativeFn(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl NativeFn {
    /// Wrap a closure as a callable value.
    pub fn new(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Self {
        NativeFn(Arc::new(f))
    }

    /// Invoke the callable with the given arguments.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.0)(args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFn(..)")
    }
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A dynamically typed value.
///
/// This is the subject type of every predicate in the crate. The variant set
/// covers the shapes the predicates distinguish: scalars, symbols, arrays,
/// plain keyed objects, and callables.
///
/// # Example
///
/// ```
/// use attest::Value;
///
/// let v = Value::array(vec![Value::from(1), Value::from("two")]);
/// assert_eq!(v.type_name(), "array");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. NaN is representable but rejected by the numeric predicates.
    Number(f64),
    /// A string.
    String(String),
    /// A unique token.
    Symbol(Symbol),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A plain keyed object.
    Object(BTreeMap<Key, Value>),
    /// A callable.
    Function(NativeFn),
}

impl Value {
    /// Build an array value from any iterator of values.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Value {
        Value::Array(items.into_iter().collect())
    }

    /// Build a plain object from key/value pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::Value;
    ///
    /// let obj = Value::object([("name", Value::from("ada"))]);
    /// assert_eq!(obj.type_name(), "object");
    /// ```
    pub fn object<K, I>(entries: I) -> Value
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Build a callable value from a closure.
    ///
    /// # Example
    ///
    /// ```
    /// use attest::Value;
    ///
    /// let f = Value::function(|_args| Value::Null);
    /// assert_eq!(f.type_name(), "function");
    /// ```
    pub fn function(f: impl Fn(&[Value]) -> Value + Send + Sync + 'static) -> Value {
        Value::Function(NativeFn::new(f))
    }

    /// Whether the value is truthy.
    ///
    /// Falsy values are `Null`, `Bool(false)`, zero and NaN numbers, and the
    /// empty string. Every symbol, array, object, and function is truthy,
    /// including empty containers.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) | Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    /// The name of the value's runtime type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
        }
    }

    /// Look up a property by key value.
    ///
    /// Returns `None` when the value is not an object, the key value is not a
    /// valid property key, or the property is absent.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(&Key::from_value(key)?),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Symbol(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<BTreeMap<Key, Value>> for Value {
    fn from(map: BTreeMap<Key, Value>) -> Self {
        Value::Object(map)
    }
}
