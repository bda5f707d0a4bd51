// @generated by factory-registry-build. Do not edit.

/// Member injector registry generated for package `injection`.
pub struct MemberInjectorRegistry {
    children: ::factory_registry::ChildRegistries<dyn ::factory_registry::MemberInjector>,
}

impl MemberInjectorRegistry {
    /// Fully qualified name of this registry.
    pub const NAME: &'static str = "injection.MemberInjectorRegistry";

    /// Number of dispatch buckets.
    pub const BUCKET_COUNT: usize = 0;

    pub fn new() -> Self {
        Self {
            children: ::factory_registry::ChildRegistries::new(),
        }
    }
}

impl ::core::default::Default for MemberInjectorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ::factory_registry::Registry<dyn ::factory_registry::MemberInjector> for MemberInjectorRegistry {
    #[allow(clippy::erasing_op, clippy::match_single_binding)]
    fn lookup(&self, type_name: &str) -> Option<Box<dyn ::factory_registry::MemberInjector>> {
        let type_name = ::factory_registry::normalize_type_name(type_name);
        let bucket = ::factory_registry::type_name_hash(&type_name) & -1;
        match bucket {
            _ => self.children.lookup(&type_name),
        }
    }
}
