use crate::value::{Element, Kind};
use std::collections::HashMap;
use std::fmt;

/// The structural identity of a value: its kind plus its printed form.
///
/// # Examples
///
/// ```
/// use cursor_list::IdentityKey;
///
/// let key = IdentityKey::of(&42_i64);
/// assert_eq!(key.to_string(), "Int::42");
/// assert_eq!(key, IdentityKey::of(&42_i32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    kind: Kind,
    printed: String,
}

impl IdentityKey {
    pub fn of<T: Element + ?Sized>(value: &T) -> Self {
        Self {
            kind: value.kind(),
            printed: value.to_string(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn printed(&self) -> &str {
        &self.printed
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.kind, self.printed)
    }
}

/// Occurrence counts of every identity key held by a list.
///
/// A key is present exactly while its count is positive.
#[derive(Debug, Clone, Default)]
pub(crate) struct Database {
    counts: HashMap<IdentityKey, usize>,
}

impl Database {
    pub(crate) fn insert(&mut self, key: IdentityKey) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Decrement the count of `key`, returning `false` if it was not held.
    pub(crate) fn remove(&mut self, key: &IdentityKey) -> bool {
        match self.counts.get_mut(key) {
            Some(count) if *count > 1 => {
                *count -= 1;
                true
            }
            Some(_) => {
                self.counts.remove(key);
                true
            }
            None => false,
        }
    }

    pub(crate) fn count(&self, key: &IdentityKey) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub(crate) fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub(crate) fn clear(&mut self) {
        self.counts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{Database, IdentityKey};
    use crate::value::Value;

    #[test]
    fn database_counts() {
        let mut db = Database::default();
        let one = IdentityKey::of(&Value::from(1));
        let text_one = IdentityKey::of(&Value::from("1"));
        assert_ne!(one, text_one);

        db.insert(one.clone());
        db.insert(one.clone());
        db.insert(text_one.clone());
        assert_eq!(db.count(&one), 2);
        assert_eq!(db.distinct(), 2);

        assert!(db.remove(&one));
        assert_eq!(db.count(&one), 1);
        assert!(db.remove(&one));
        assert_eq!(db.count(&one), 0);
        assert!(!db.remove(&one));
        assert_eq!(db.distinct(), 1);

        db.clear();
        assert_eq!(db.count(&text_one), 0);
    }
}
