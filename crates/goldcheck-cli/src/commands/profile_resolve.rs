use goldcheck_registry::{load_registry, resolve_profile};
use std::path::{Path, PathBuf};

pub fn run(registry: String, root: Option<String>, file: String) {
    let registry_path = PathBuf::from(registry);
    let root_path = root.map(PathBuf::from);

    let registry = load_registry(&registry_path).unwrap_or_else(|err| {
        eprintln!("error: profile-resolve failed: {err}");
        std::process::exit(2);
    });

    let resolution = resolve_profile(&registry, Path::new(&file), root_path.as_deref())
        .unwrap_or_else(|err| {
            eprintln!("error: profile-resolve failed: {err}");
            std::process::exit(2);
        });

    let rendered = serde_json::to_string_pretty(&resolution).unwrap_or_else(|err| {
        eprintln!("error: failed to render resolution JSON: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}
