//! The closed set of value kinds a list can tag and extract by.

use crate::error::ListError;
use std::fmt;

/// The runtime type tag of a stored value.
///
/// Extraction and membership-by-kind compare tags exactly; there is no
/// notion of one kind being a subtype of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Int,
    Float,
    Bool,
    Char,
    Text,
    Empty,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Int => "Int",
            Kind::Float => "Float",
            Kind::Bool => "Bool",
            Kind::Char => "Char",
            Kind::Text => "Text",
            Kind::Empty => "Empty",
        })
    }
}

/// A value that can live in a [`List`](crate::List).
///
/// The kind and the printed form together make up the identity key of the
/// occurrence index, so two values that print the same and share a kind are
/// indistinguishable to [`List::approx_contains`](crate::List::approx_contains).
pub trait Element: fmt::Display {
    fn kind(&self) -> Kind;
}

impl<T: Element + ?Sized> Element for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

macro_rules! impl_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                #[inline]
                fn kind(&self) -> Kind {
                    Kind::$kind
                }
            }
        )*
    };
}

impl_element! {
    i32 => Int,
    i64 => Int,
    f64 => Float,
    bool => Bool,
    char => Char,
    String => Text,
    str => Text,
}

/// A dynamically-kinded value.
///
/// # Examples
///
/// ```
/// use cursor_list::{Kind, Value};
///
/// let v = Value::from("abc");
/// assert_eq!(v.kind(), Kind::Text);
/// assert_eq!(v.try_as::<str>(), Ok("abc"));
/// assert!(v.try_as::<i64>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Text(String),
    Empty,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::Char(_) => Kind::Char,
            Value::Text(_) => Kind::Text,
            Value::Empty => Kind::Empty,
        }
    }

    /// Borrow the payload as `V`, or report which kind was actually stored.
    pub fn try_as<V: FromValue + ?Sized>(&self) -> Result<&V, ListError> {
        V::from_value(self).ok_or(ListError::TypeMismatch {
            expected: V::KIND,
            found: self.kind(),
        })
    }
}

impl Element for Value {
    #[inline]
    fn kind(&self) -> Kind {
        Value::kind(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => fmt::Display::fmt(v, f),
            Value::Float(v) => fmt::Display::fmt(v, f),
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::Char(v) => fmt::Display::fmt(v, f),
            Value::Text(v) => fmt::Display::fmt(v, f),
            Value::Empty => f.write_str("EMPTY"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

/// Typed access into a [`Value`].
pub trait FromValue {
    const KIND: Kind;

    fn from_value(value: &Value) -> Option<&Self>;
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                const KIND: Kind = Kind::$variant;

                fn from_value(value: &Value) -> Option<&Self> {
                    match value {
                        Value::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_value! {
    i64 => Int,
    f64 => Float,
    bool => Bool,
    char => Char,
    String => Text,
}

impl FromValue for str {
    const KIND: Kind = Kind::Text;

    fn from_value(value: &Value) -> Option<&Self> {
        match value {
            Value::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, Kind, Value};
    use crate::error::ListError;

    #[test]
    fn value_kinds() {
        assert_eq!(Value::from(1).kind(), Kind::Int);
        assert_eq!(Value::from(1.5).kind(), Kind::Float);
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from('x').kind(), Kind::Char);
        assert_eq!(Value::from("x").kind(), Kind::Text);
        assert_eq!(Value::Empty.kind(), Kind::Empty);
        assert_eq!(Element::kind(&&Value::from(3)), Kind::Int);
        assert_eq!(Element::kind("plain"), Kind::Text);
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::from(-4).to_string(), "-4");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::Empty.to_string(), "EMPTY");
    }

    #[test]
    fn typed_access() {
        let v = Value::from(7);
        assert_eq!(v.try_as::<i64>(), Ok(&7));
        assert_eq!(
            v.try_as::<String>(),
            Err(ListError::TypeMismatch {
                expected: Kind::Text,
                found: Kind::Int
            })
        );
        assert_eq!(Value::from('q').try_as::<char>(), Ok(&'q'));
    }
}
