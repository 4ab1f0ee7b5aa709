// src/intake/config.rs
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const ENV_PATH: &str = "PLATFORM_WHITELIST_PATH";

/// Platforms accepted when no whitelist file is configured.
pub const DEFAULT_PLATFORMS: [&str; 5] = ["Instagram", "Facebook", "TikTok", "YouTube", "News"];

/// Built-in platform set as an owned list.
pub fn default_platforms() -> Vec<String> {
    DEFAULT_PLATFORMS.iter().map(|s| s.to_string()).collect()
}

/// Load the platform whitelist from an explicit path. Supports TOML or JSON.
pub fn load_platforms_from(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading platform whitelist from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_platforms(&content, ext.as_str())
}

/// Load the whitelist using env var + fallbacks:
/// 1) $PLATFORM_WHITELIST_PATH
/// 2) config/platforms.toml
/// 3) config/platforms.json
/// 4) built-in default set
pub fn load_platforms_default() -> Result<Vec<String>> {
    if let Ok(p) = std::env::var(ENV_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_platforms_from(&pb);
        } else {
            return Err(anyhow!("PLATFORM_WHITELIST_PATH points to non-existent path"));
        }
    }
    let toml_p = PathBuf::from("config/platforms.toml");
    if toml_p.exists() {
        return load_platforms_from(&toml_p);
    }
    let json_p = PathBuf::from("config/platforms.json");
    if json_p.exists() {
        return load_platforms_from(&json_p);
    }
    Ok(default_platforms())
}

fn parse_platforms(s: &str, hint_ext: &str) -> Result<Vec<String>> {
    // Try TOML first if hinted or content looks like toml.
    let try_toml = hint_ext == "toml" || s.contains("platforms");
    if try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    // Try JSON array
    if let Ok(v) = parse_json(s) {
        return Ok(v);
    }
    // Fallback: also try TOML if not attempted
    if !try_toml {
        if let Ok(v) = parse_toml(s) {
            return Ok(v);
        }
    }
    Err(anyhow!("unsupported whitelist format"))
}

fn parse_toml(s: &str) -> Result<Vec<String>> {
    #[derive(serde::Deserialize)]
    struct TomlWl {
        platforms: Vec<String>,
    }
    let v: TomlWl = toml::from_str(s)?;
    Ok(clean_list(v.platforms))
}

fn parse_json(s: &str) -> Result<Vec<String>> {
    let v: Vec<String> = serde_json::from_str(s)?;
    Ok(clean_list(v))
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    use std::collections::BTreeSet;
    let mut set = BTreeSet::new();
    for it in items {
        let t = it.trim();
        if !t.is_empty() {
            set.insert(t.to_string());
        }
    }
    set.into_iter().collect()
}
