use std::ops::Deref;
use std::sync::Arc;

/// An ordered, immutable sequence of child nodes.
///
/// The elements live in a shared slice, so cloning a `NodeList` (e.g. when a
/// parent node is shallow-copied during an edit) never copies the children.
/// Indexing, iteration and slicing come from `Deref<Target = [T]>`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct NodeList<T>(Arc<[T]>);

impl<T> NodeList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self(items.into())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }
}

impl<T: Clone> NodeList<T> {
    /// Copies the elements into a `Vec` for building an edited list.
    pub fn to_vec(&self) -> Vec<T> {
        self.0.to_vec()
    }
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for NodeList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for NodeList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
