use std::fmt;
use std::sync::Arc;

use super::next_id;

/// The unit that contains every suite of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestBundle {
    id: u64,
    name: Arc<str>,
    path: Option<Arc<str>>,
}

impl TestBundle {
    /// Creates a bundle handle with a fresh id.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            id: next_id(),
            name: name.into(),
            path: None,
        }
    }

    /// Attaches the on-disk location the bundle was loaded from.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<Arc<str>>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

impl fmt::Display for TestBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_is_optional() {
        let plain = TestBundle::new("Foo");
        assert_eq!(plain.path(), None);

        let loaded = TestBundle::new("Foo").with_path("/tmp/Foo.bundle");
        assert_eq!(loaded.name(), "Foo");
        assert_eq!(loaded.path(), Some("/tmp/Foo.bundle"));
        assert_eq!(loaded.to_string(), "Foo");
        assert_ne!(plain.id(), loaded.id());
    }

    #[test]
    fn test_clone_keeps_path_and_identity() {
        let b = TestBundle::new("Foo").with_path("a/b");
        let c = b.clone();
        assert_eq!(b, c);
        assert_eq!(c.path(), Some("a/b"));
    }
}
