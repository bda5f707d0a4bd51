//! Capabilities shared by generated registries and the helpers they build.

use std::any::Any;

/// Resolves a type identifier to a freshly constructed helper.
///
/// Generated registries implement this for `dyn Factory` or
/// `dyn MemberInjector`. `None` means neither this registry nor any of its
/// children knows the type; callers decide whether that is fatal.
///
/// Implementations are immutable once constructed, so `lookup` can be called
/// from any number of threads without locking.
pub trait Registry<F: ?Sized>: Send + Sync {
    /// Look up a helper by type identifier.
    ///
    /// The identifier may be dot-separated, use `$` for nested types, or be a
    /// Rust path as returned by [`std::any::type_name`].
    fn lookup(&self, type_name: &str) -> Option<Box<F>>;

    /// Look up the helper for `T` using its Rust type name.
    ///
    /// The key is [`std::any::type_name`], whose output is only a best-effort
    /// description and may change between compiler releases. It matches
    /// registries keyed by crate paths today; persistent or cross-build keys
    /// should go through [`Registry::lookup`] with an explicit name.
    fn lookup_type<T: ?Sized>(&self) -> Option<Box<F>>
    where
        Self: Sized,
    {
        self.lookup(std::any::type_name::<T>())
    }
}

/// Generated per-type factory.
pub trait Factory: Any + Send + Sync {
    /// Dot-normalized name of the type this factory builds.
    fn target_type(&self) -> &'static str;

    /// Build a new instance of the target type.
    fn create(&self) -> Box<dyn Any + Send>;
}

impl dyn Factory {
    /// Build a new instance and downcast it to `T`.
    ///
    /// Returns `None` when `T` is not the factory's target type.
    pub fn create_as<T: Any>(&self) -> Option<Box<T>> {
        self.create().downcast::<T>().ok()
    }
}

/// Generated per-type member injector.
pub trait MemberInjector: Any + Send + Sync {
    /// Dot-normalized name of the type this injector fills in.
    fn target_type(&self) -> &'static str;

    /// Inject members into `target`.
    ///
    /// Targets of another type are left untouched.
    fn inject(&self, target: &mut dyn Any);
}

impl<F: ?Sized, R: Registry<F> + ?Sized> Registry<F> for Box<R> {
    fn lookup(&self, type_name: &str) -> Option<Box<F>> {
        (**self).lookup(type_name)
    }
}

impl<F: ?Sized, R: Registry<F> + ?Sized> Registry<F> for std::sync::Arc<R> {
    fn lookup(&self, type_name: &str) -> Option<Box<F>> {
        (**self).lookup(type_name)
    }
}
