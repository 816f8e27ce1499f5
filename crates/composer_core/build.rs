use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[path = "src/catalog_schema.rs"]
mod catalog_schema;

use catalog_schema::{
    hyphen_slug, CATEGORY_TOKENS, HASHTAG_PLACEMENT_TOKENS, HASHTAG_STYLE_TOKENS, KIND_TOKENS,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HashtagGuidance {
    supported: bool,
    min: u32,
    max: u32,
    optimal: u32,
    style: String,
    placement: String,
    notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlatformEntry {
    name: String,
    icon: String,
    kind: String,
    category: String,
    hashtags: HashtagGuidance,
}

#[derive(Debug, Deserialize)]
struct PlatformManifest {
    schema_version: u32,
    platform: Vec<PlatformEntry>,
}

fn check_token(path: &Path, platform: &str, field: &str, value: &str, allowed: &[&str]) {
    if !allowed.contains(&value) {
        panic!(
            "platform `{platform}` has unknown {field} `{value}` in {}; expected one of {}",
            path.display(),
            allowed.join(", ")
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("platforms.toml");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-changed=src/catalog_schema.rs");

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: PlatformManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "platform catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut ids = BTreeSet::new();
    for entry in &manifest.platform {
        if entry.name.trim().is_empty() || entry.icon.trim().is_empty() {
            panic!("platform entry with blank name or icon in {}", path.display());
        }
        let id = hyphen_slug(&entry.name);
        if id.is_empty() || !ids.insert(id.clone()) {
            panic!(
                "platform `{}` maps to duplicate id `{id}` in {}",
                entry.name,
                path.display()
            );
        }
        let tags = &entry.hashtags;
        check_token(&path, &entry.name, "kind", &entry.kind, &KIND_TOKENS);
        check_token(&path, &entry.name, "category", &entry.category, &CATEGORY_TOKENS);
        check_token(&path, &entry.name, "hashtags.style", &tags.style, &HASHTAG_STYLE_TOKENS);
        check_token(
            &path,
            &entry.name,
            "hashtags.placement",
            &tags.placement,
            &HASHTAG_PLACEMENT_TOKENS,
        );
        if tags.supported && !(tags.min <= tags.optimal && tags.optimal <= tags.max) {
            panic!(
                "platform `{}` has inconsistent hashtag range {}..{} (optimal {})",
                entry.name, tags.min, tags.max, tags.optimal
            );
        }
    }

    let json =
        serde_json::to_string_pretty(&manifest.platform).expect("serialize platform catalog");
    let generated = format!(
        "/// Build-time generated platform catalog JSON.\n\
pub const BUILTIN_PLATFORM_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("platform_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
