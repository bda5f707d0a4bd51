// @generated by factory-registry-build. Do not edit.

/// Member injector registry generated for package `injection`.
pub struct MemberInjectorRegistry {
    children: ::factory_registry::ChildRegistries<dyn ::factory_registry::MemberInjector>,
}

impl MemberInjectorRegistry {
    /// Fully qualified name of this registry.
    pub const NAME: &'static str = "injection.MemberInjectorRegistry";

    /// Number of dispatch buckets.
    pub const BUCKET_COUNT: usize = 1;

    pub fn new() -> Self {
        let mut children = ::factory_registry::ChildRegistries::new();
        children.add(injection::MemberInjectorRegistry::new());
        children.add(injection::MemberInjectorRegistry::new());
        Self { children }
    }

    fn member_injector_bucket_0(&self, type_name: &str) -> Option<Box<dyn ::factory_registry::MemberInjector>> {
        match type_name {
            "test.TestARegistry" => Some(Box::new(test::TestARegistry__MemberInjector::default())),
            _ => self.children.lookup(type_name),
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
        let bucket = ::factory_registry::type_name_hash(&type_name) & 0;
        match bucket {
            0 => self.member_injector_bucket_0(&type_name),
            _ => self.children.lookup(&type_name),
        }
    }
}
