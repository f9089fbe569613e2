//! Test fixtures - a spec directory covering every node state.
//!
//! ```text
//! spx/
//! ├── demo.product.md
//! ├── 15-storage.adr.md            valid (decision)
//! ├── 21-core.enabler/             valid (lock matches)
//! └── 32-api.outcome/              needs-work (no lock)
//!     └── 21-auth.outcome/         stale (lock out of date)
//! ```

use std::path::Path;

use spec_tree::domain::value_objects::ContentHash;

pub const PRODUCT_SPEC: &str = "# Demo\n\nDemo product for tests\n";
pub const CORE_SPEC: &str = "# Core\n\nCore services\n";
pub const CORE_TEST: &str = "fn core_works() {}\n";

/// Rolled-up status of the fixture in plain ASCII
pub const FIXTURE_STATUS: &str = "\
[WARN] demo.product.md (stale)
|-- [OK] 15-storage.adr.md (valid)
|-- [OK] 21-core.enabler/ (valid)
`-- [WARN] 32-api.outcome/ (stale)
    `-- [WARN] 21-auth.outcome/ (stale)

5 nodes: 2 valid, 3 stale, 0 needs work
";

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn lock_yaml(spec: &ContentHash, tests: &ContentHash) -> String {
    format!("version: 1\nspec: {}\ntests: {}\n", spec, tests)
}

/// Write the fixture tree under `dir`
pub fn write_spec_tree(dir: &Path) {
    write(&dir.join("demo.product.md"), PRODUCT_SPEC);
    write(&dir.join("15-storage.adr.md"), "# Storage\n\nUse SQLite.\n");

    let core = dir.join("21-core.enabler");
    write(&core.join("core.md"), CORE_SPEC);
    write(&core.join("tests/core_test.rs"), CORE_TEST);
    write(
        &core.join("spx-lock.yaml"),
        &lock_yaml(
            &ContentHash::from_bytes(CORE_SPEC.as_bytes()),
            &ContentHash::from_named_contents([("core_test.rs", CORE_TEST)]),
        ),
    );

    let api = dir.join("32-api.outcome");
    write(&api.join("api.md"), "# API\n\nPublic API\n");

    let auth = api.join("21-auth.outcome");
    write(&auth.join("auth.md"), "# Auth\n\nLogin works\n");
    write(
        &auth.join("spx-lock.yaml"),
        &lock_yaml(
            &ContentHash::from_bytes(b"an older spec"),
            &ContentHash::from_named_contents(Vec::<(String, String)>::new()),
        ),
    );
}
