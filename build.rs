//! Build script for the `tinyc` compiler.
//!
//! Records the path to the `tinyc-runtime` staticlib (built as a sibling
//! workspace member) so integration tests — which run as their own
//! executable, not as `tinyc` itself — can find it without replicating the
//! driver's sibling-of-executable lookup (`src/linker.rs`).

use std::env;
use std::path::PathBuf;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .expect("CARGO_MANIFEST_DIR not set. This build script must be run by Cargo.");
    let workspace_root = PathBuf::from(&manifest_dir);

    let profile =
        env::var("PROFILE").expect("PROFILE not set. This build script must be run by Cargo.");

    let runtime_lib = workspace_root
        .join("target")
        .join(&profile)
        .join("libtinyc_runtime.a");

    println!("cargo:rustc-env=TINYC_RUNTIME_PATH={}", runtime_lib.display());
    println!("cargo::rerun-if-changed=runtime/src/lib.rs");
    println!("cargo::rerun-if-changed=runtime/Cargo.toml");
}
