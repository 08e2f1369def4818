use indexmap::IndexMap;
use itertools::Itertools;
use std::any::{type_name, Any};
use std::fmt;

/// Width handed to the host when nobody overrides it.
pub const DEFAULT_WIDTH: &str = "50%";

/// A stored value plus the name of its concrete type.
struct Slot {
    value: Box<dyn Any>,
    type_name: &'static str,
}

/// Named bag of heterogeneous parameters passed from a host to its content.
///
/// Values are stored type-erased and checked against the requested type on
/// retrieval. A missing key and a value of the wrong type look the same to
/// a reader: `get` yields the type's default, `get_ref` yields `None` and
/// `try_get` returns `false`. Nothing here returns an error.
///
/// Entries iterate in insertion order. Overwriting a key keeps its slot.
pub struct ModalOptions {
    /// Size descriptor for the host (`"50%"`, `"640px"`, ...). Never interpreted here.
    pub width: String,
    entries: IndexMap<String, Slot>,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH.to_string(),
            entries: IndexMap::new(),
        }
    }
}

impl ModalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    pub fn width(&self) -> &str {
        &self.width
    }

    pub fn set_width(&mut self, width: impl Into<String>) {
        self.width = width.into();
    }

    /// Store `value` under `key`.
    ///
    /// Returns `true` if the key was new (appended at the end), `false` if an
    /// existing value was replaced in place.
    pub fn set<K, T>(&mut self, key: K, value: T) -> bool
    where
        K: Into<String>,
        T: Any,
    {
        let key = key.into();
        let slot = Slot {
            value: Box::new(value),
            type_name: type_name::<T>(),
        };
        match self.entries.get_mut(&key) {
            Some(existing) => {
                tracing::trace!(key = %key, ty = slot.type_name, "overwriting option");
                *existing = slot;
                false
            }
            None => {
                tracing::trace!(key = %key, ty = slot.type_name, "inserting option");
                self.entries.insert(key, slot);
                true
            }
        }
    }

    /// Value under `key` if it is a `T`, else `T::default()`.
    pub fn get<T: Any + Clone + Default>(&self, key: &str) -> T {
        self.get_ref::<T>(key).cloned().unwrap_or_default()
    }

    /// Borrow the value under `key` if it is a `T`.
    pub fn get_ref<T: Any>(&self, key: &str) -> Option<&T> {
        let slot = self.entries.get(key)?;
        let value = slot.value.downcast_ref::<T>();
        if value.is_none() {
            log_mismatch::<T>(key, slot.type_name);
        }
        value
    }

    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        let slot = self.entries.get_mut(key)?;
        let stored = slot.type_name;
        let value = slot.value.downcast_mut::<T>();
        if value.is_none() {
            log_mismatch::<T>(key, stored);
        }
        value
    }

    /// Write the value under `key` into `value` and return `true` if it is a
    /// `T`. Otherwise write `T::default()` and return `false`, whether the key
    /// is absent or holds another type.
    pub fn try_get<T: Any + Clone + Default>(&self, key: &str, value: &mut T) -> bool {
        match self.get_ref::<T>(key) {
            Some(found) => {
                *value = found.clone();
                true
            }
            None => {
                *value = T::default();
                false
            }
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Name of the concrete type stored under `key`.
    pub fn type_name_of(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).map(|slot| slot.type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

fn log_mismatch<T>(key: &str, stored: &'static str) {
    tracing::debug!(
        key,
        requested = type_name::<T>(),
        stored,
        "option type mismatch, falling back to default"
    );
}

/// Iterator over `(key, value)` pairs of a [`ModalOptions`].
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, Slot>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a dyn Any);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, slot)| (key.as_str(), slot.value.as_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a ModalOptions {
    type Item = (&'a str, &'a dyn Any);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for ModalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self
            .entries
            .iter()
            .map(|(key, slot)| format!("{key}: {}", slot.type_name))
            .join(", ");
        write!(f, "ModalOptions {{ width: {:?}, entries: [{entries}] }}", self.width)
    }
}
