use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Catalog constant name -> file under catalogs/
const CATALOGS: &[(&str, &str)] = &[
    ("COMMANDS_CONFIG", "commands_cfg.yaml"),
    ("CUSTOM_COMMANDS_CONFIG", "custom_commands_cfg.yaml"),
];

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR missing"));
    let catalogs_root = manifest_dir.join("catalogs");

    if !catalogs_root.exists() {
        panic!("Catalogs directory not found: {}", catalogs_root.display());
    }

    let mut out = String::new();
    for (const_name, file_name) in CATALOGS {
        let path = catalogs_root.join(file_name);
        println!("cargo:rerun-if-changed={}", path.display());
        out.push_str(&generate_const(const_name, &path));
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR missing"));
    fs::write(out_dir.join("generated_catalogs.rs"), out)
        .expect("Failed to write generated_catalogs.rs");
}

fn generate_const(const_name: &str, path: &Path) -> String {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("Failed to read {}: {}", path.display(), err));

    format!(
        "pub(crate) static {}: &str = {:?};\n",
        const_name, content
    )
}
