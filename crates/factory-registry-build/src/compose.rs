//! Registry composition: wraps the dispatch in a complete generated unit.

use crate::def::RegistryDef;
use crate::dispatch::{synthesize_accessors, synthesize_lookup, DispatchContext, CHILDREN_FIELD};
use crate::naming::{registry_name, rust_path};
use crate::partition::Partition;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// @generated by factory-registry-build. Do not edit.";

/// Generate the registry source for `def`.
///
/// The definition is consumed: the generated text is all that survives a
/// generation pass. Identical definitions produce byte-identical output.
pub fn compose(def: RegistryDef) -> String {
    let ctx = DispatchContext::new(&def.runtime_crate, def.kind);
    let partition = Partition::new(def.entries(), def.max_entries_per_bucket);
    let ty = def.kind.registry_type();

    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push_str("\n\n");

    // Struct
    out.push_str(&format!(
        "/// {} registry generated for package `{}`.\n",
        def.kind.label(),
        def.package
    ));
    out.push_str(&format!("pub struct {ty} {{\n"));
    out.push_str(&format!(
        "    {CHILDREN_FIELD}: {}<{}>,\n",
        ctx.runtime_item("ChildRegistries"),
        ctx.product()
    ));
    out.push_str("}\n\n");

    // Inherent impl: constants, constructor, bucket accessors
    out.push_str(&format!("impl {ty} {{\n"));
    out.push_str("    /// Fully qualified name of this registry.\n");
    out.push_str(&format!("    pub const NAME: &'static str = {:?};\n\n", def.name()));
    out.push_str("    /// Number of dispatch buckets.\n");
    out.push_str(&format!(
        "    pub const BUCKET_COUNT: usize = {};\n\n",
        partition.bucket_count()
    ));
    out.push_str(&constructor(&def, &ctx));
    out.push_str(&synthesize_accessors(&partition, &ctx));
    out.push_str("}\n\n");

    out.push_str(&format!("impl ::core::default::Default for {ty} {{\n"));
    out.push_str("    fn default() -> Self {\n");
    out.push_str("        Self::new()\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");

    // Registry impl
    out.push_str(&format!(
        "impl {}<{}> for {ty} {{\n",
        ctx.runtime_item("Registry"),
        ctx.product()
    ));
    out.push_str(&synthesize_lookup(&partition, &ctx));
    out.push_str("}\n");

    tracing::debug!(
        registry = %def.name(),
        entries = def.entries().len(),
        buckets = partition.bucket_count(),
        children = def.children.len(),
        "composed registry"
    );

    out
}

/// `new()`: registers one instance per child name, in order, duplicates kept.
fn constructor(def: &RegistryDef, ctx: &DispatchContext) -> String {
    let mut out = String::new();
    out.push_str("    pub fn new() -> Self {\n");
    if def.children.is_empty() {
        out.push_str("        Self {\n");
        out.push_str(&format!(
            "            {CHILDREN_FIELD}: {}::new(),\n",
            ctx.runtime_item("ChildRegistries")
        ));
        out.push_str("        }\n");
    } else {
        out.push_str(&format!(
            "        let mut {CHILDREN_FIELD} = {}::new();\n",
            ctx.runtime_item("ChildRegistries")
        ));
        for child in &def.children {
            out.push_str(&format!(
                "        {CHILDREN_FIELD}.add({}::new());\n",
                rust_path(&registry_name(child, def.kind))
            ));
        }
        out.push_str(&format!("        Self {{ {CHILDREN_FIELD} }}\n"));
    }
    out.push_str("    }\n");
    out
}
