//! Child-registry delegation used by generated registries.

use std::fmt;

use crate::traits::Registry;

/// Ordered list of child registries consulted when a local lookup misses.
///
/// Children are queried in registration order and the first hit wins.
/// Registering the same registry type twice is legal: each registration is
/// a separate instance and is queried separately.
pub struct ChildRegistries<F: ?Sized> {
    children: Vec<Box<dyn Registry<F>>>,
}

impl<F: ?Sized> ChildRegistries<F> {
    pub const fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Register a child. Only called while the owning registry is being built.
    pub fn add<R>(&mut self, registry: R)
    where
        R: Registry<F> + 'static,
    {
        self.children.push(Box::new(registry));
    }

    /// Query each child in registration order, returning the first hit.
    pub fn lookup(&self, type_name: &str) -> Option<Box<F>> {
        self.children
            .iter()
            .find_map(|child| child.lookup(type_name))
    }

    /// Number of registered children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<F: ?Sized> Default for ChildRegistries<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ?Sized> fmt::Debug for ChildRegistries<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildRegistries")
            .field("len", &self.children.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::traits::Factory;

    struct Named(&'static str);

    impl Factory for Named {
        fn target_type(&self) -> &'static str {
            self.0
        }

        fn create(&self) -> Box<dyn Any + Send> {
            Box::new(self.0)
        }
    }

    /// Knows a single type name and counts how often it is asked.
    struct Single {
        name: &'static str,
        calls: Arc<AtomicUsize>,
    }

    impl Single {
        fn new(name: &'static str) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    name,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    impl Registry<dyn Factory> for Single {
        fn lookup(&self, type_name: &str) -> Option<Box<dyn Factory>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if type_name == self.name {
                Some(Box::new(Named(self.name)))
            } else {
                None
            }
        }
    }

    #[test]
    fn empty_children_find_nothing() {
        let children: ChildRegistries<dyn Factory> = ChildRegistries::new();
        assert!(children.is_empty());
        assert!(children.lookup("a.B").is_none());
    }

    #[test]
    fn first_match_wins_in_registration_order() {
        let (first, first_calls) = Single::new("a.B");
        let (second, second_calls) = Single::new("a.B");

        let mut children: ChildRegistries<dyn Factory> = ChildRegistries::new();
        children.add(first);
        children.add(second);

        let hit = children.lookup("a.B").unwrap();
        assert_eq!(hit.target_type(), "a.B");
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn misses_fall_through_every_child() {
        let (first, first_calls) = Single::new("a.B");
        let (second, second_calls) = Single::new("a.C");

        let mut children: ChildRegistries<dyn Factory> = ChildRegistries::new();
        children.add(first);
        children.add(second);

        assert_eq!(children.lookup("a.C").unwrap().target_type(), "a.C");
        assert!(children.lookup("a.D").is_none());
        assert_eq!(first_calls.load(Ordering::SeqCst), 2);
        assert_eq!(second_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn duplicate_children_are_both_queried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut children: ChildRegistries<dyn Factory> = ChildRegistries::new();
        for _ in 0..2 {
            children.add(Single {
                name: "a.B",
                calls: calls.clone(),
            });
        }

        assert_eq!(children.len(), 2);
        assert!(children.lookup("a.Missing").is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn lookups_from_many_threads() {
        let (child, calls) = Single::new("a.B");
        let mut children: ChildRegistries<dyn Factory> = ChildRegistries::new();
        children.add(child);
        let children = Arc::new(children);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let children = children.clone();
                std::thread::spawn(move || children.lookup("a.B").is_some())
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
