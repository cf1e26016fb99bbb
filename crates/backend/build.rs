//! Copies `config.toml` from the crate directory next to the built binary,
//! where `shared::config::load_config` looks for it first.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.toml");
    if !source_config.exists() {
        println!("cargo:warning=config.toml not found at {:?}, embedded defaults will be used", source_config);
        return;
    }

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=Could not locate target profile directory, config.toml not copied");
        return;
    };

    let dest_config = target_dir.join("config.toml");
    fs::copy(&source_config, &dest_config)
        .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
}

// OUT_DIR looks like target/<profile>/build/backend-xxx/out
fn profile_dir() -> Option<PathBuf> {
    let out_dir = env::var("OUT_DIR").ok()?;
    let profile = env::var("PROFILE").ok()?;
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
