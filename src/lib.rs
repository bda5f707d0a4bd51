//! # Factory registries (factory-registry)
//!
//! Runtime side of generated factory registries. A registry maps a type
//! identifier to a freshly constructed helper object (a [`Factory`] or a
//! [`MemberInjector`]) that was generated for that type ahead of time.
//!
//! Registries themselves are generated at build time by
//! `factory-registry-build` (or inline with `factory-registry-macro`). This
//! crate only holds what the generated code calls into.
//!
//! ## Dispatch
//!
//! Lookup is a two-level exact match:
//!
//! ```text
//! type name ──normalize──► "app.model.User"
//!           ──type_name_hash & mask──► bucket N
//!           ──match on exact name in bucket N──► Some(Box::new(User__Factory::default()))
//!                                       └─miss──► children, in registration order
//! ```
//!
//! ## Composition
//!
//! Each independently built crate generates its own registry and lists the
//! registries of the crates it depends on as children. Adding a new crate
//! only requires regenerating the registries that name it.
//!
//! ```ignore
//! use factory_registry::{Factory, Registry};
//!
//! mod generated {
//!     include!(concat!(env!("OUT_DIR"), "/factory_registry.rs"));
//! }
//!
//! let registry = generated::FactoryRegistry::new();
//! let factory = registry.lookup("app.model.User").expect("no factory for User");
//! let user = factory.create_as::<app::model::User>();
//! ```

pub mod hash;
pub mod name;
pub mod registry;
pub mod traits;

pub use hash::{bucket_of, type_name_hash, HASH_MULTIPLIER};
pub use name::{normalize_type_name, NESTED_SEPARATOR, NORMALIZED_SEPARATOR};
pub use registry::ChildRegistries;
pub use traits::{Factory, MemberInjector, Registry};
