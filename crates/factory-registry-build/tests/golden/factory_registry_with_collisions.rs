// @generated by factory-registry-build. Do not edit.

/// Factory registry generated for package `app`.
pub struct FactoryRegistry {
    children: ::factory_registry::ChildRegistries<dyn ::factory_registry::Factory>,
}

impl FactoryRegistry {
    /// Fully qualified name of this registry.
    pub const NAME: &'static str = "app.FactoryRegistry";

    /// Number of dispatch buckets.
    pub const BUCKET_COUNT: usize = 4;

    pub fn new() -> Self {
        let mut children = ::factory_registry::ChildRegistries::new();
        children.add(dep::FactoryRegistry::new());
        Self { children }
    }

    fn factory_bucket_0(&self, type_name: &str) -> Option<Box<dyn ::factory_registry::Factory>> {
        self.children.lookup(type_name)
    }

    fn factory_bucket_1(&self, type_name: &str) -> Option<Box<dyn ::factory_registry::Factory>> {
        match type_name {
            "app.model.User" => Some(Box::new(app::model::User__Factory::default())),
            _ => self.children.lookup(type_name),
        }
    }

    fn factory_bucket_2(&self, type_name: &str) -> Option<Box<dyn ::factory_registry::Factory>> {
        match type_name {
            "app.model.Order.Line" => Some(Box::new(app::model::Order_Line__Factory::default())),
            "app.model.Cart" => Some(Box::new(app::model::Cart__Factory::default())),
            _ => self.children.lookup(type_name),
        }
    }

    fn factory_bucket_3(&self, type_name: &str) -> Option<Box<dyn ::factory_registry::Factory>> {
        self.children.lookup(type_name)
    }
}

impl ::core::default::Default for FactoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ::factory_registry::Registry<dyn ::factory_registry::Factory> for FactoryRegistry {
    #[allow(clippy::erasing_op, clippy::match_single_binding)]
    fn lookup(&self, type_name: &str) -> Option<Box<dyn ::factory_registry::Factory>> {
        let type_name = ::factory_registry::normalize_type_name(type_name);
        let bucket = ::factory_registry::type_name_hash(&type_name) & 3;
        match bucket {
            0 => self.factory_bucket_0(&type_name),
            1 => self.factory_bucket_1(&type_name),
            2 => self.factory_bucket_2(&type_name),
            3 => self.factory_bucket_3(&type_name),
            _ => self.children.lookup(&type_name),
        }
    }
}
