use std::env;
use std::fs;
use std::path::Path;

/// Copy config.toml and migrations/ from the workspace root next to the binary
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../migrations");

    // OUT_DIR is typically target/<profile>/build/backend-xxx/out
    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    if source_config.exists() {
        fs::copy(&source_config, target_dir.join("config.toml"))
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!("cargo:warning=config.toml not found at {:?}, using default config", source_config);
    }

    let source_migrations = workspace_root.join("migrations");
    if let Ok(entries) = fs::read_dir(&source_migrations) {
        let dest = target_dir.join("migrations");
        fs::create_dir_all(&dest).unwrap_or_else(|e| panic!("Failed to create {:?}: {}", dest, e));
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "sql") {
                fs::copy(&path, dest.join(entry.file_name()))
                    .unwrap_or_else(|e| panic!("Failed to copy {:?}: {}", path, e));
            }
        }
    }
}
