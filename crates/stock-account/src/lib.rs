//! Stock-account operating-unit wiring module.
//!
//! Declaration-only packaging unit: it ties inventory accounting and the
//! sales-to-stock linkage together with the operating-unit base module so the
//! three load as one feature. It contributes no behavior of its own; the
//! [`MANIFEST`] is the whole of its contract.

use opunit_core::ModuleManifest;

/// Module metadata for this wiring unit.
pub const MANIFEST: ModuleManifest = ModuleManifest {
    name: "stock-account-operating-unit",
    summary: "Operating-unit aware stock accounting",
    version: "1.0.0",
    depends: &["stock-account", "sale-stock", "operating-unit"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_wires_the_three_base_modules() {
        assert_eq!(MANIFEST.name, "stock-account-operating-unit");
        assert!(MANIFEST.depends_on("stock-account"));
        assert!(MANIFEST.depends_on("sale-stock"));
        assert!(MANIFEST.depends_on("operating-unit"));
        assert_eq!(MANIFEST.depends.len(), 3);
    }
}
