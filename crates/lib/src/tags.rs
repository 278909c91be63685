use std::collections::BTreeSet;

/// Distinct tags across every post of a catalog. Matching is exact and
/// case-sensitive, so `Rust` and `rust` are two tags.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagIndex {
    inner: BTreeSet<String>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<'a>(&mut self, tags: impl IntoIterator<Item = &'a String>) {
        self.inner.extend(tags.into_iter().cloned());
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.inner.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.inner.iter().cloned().collect()
    }
}
