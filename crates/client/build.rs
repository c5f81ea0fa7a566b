use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => dir,
        Err(_) => return,
    };
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());

    // OUT_DIR looks like target/<profile>/build/client-xxx/out
    let out_path = Path::new(&out_dir);
    let Some(target_dir) = out_path.ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=Could not find target profile directory, config.toml not copied");
        return;
    };

    let Some(workspace_root) = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
    else {
        return;
    };

    let source_config = workspace_root.join("config.toml");
    let dest_config = target_dir.join("config.toml");

    if source_config.exists() {
        if let Err(e) = fs::copy(&source_config, &dest_config) {
            println!("cargo:warning=Failed to copy config.toml: {}", e);
        }
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }
}
