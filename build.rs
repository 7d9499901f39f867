use std::env;
use std::fs;
use std::path::Path;

/// Keys the app reads with `option_env!` (see `src/config.rs`).
const FORWARDED_KEYS: &[&str] = &["BLOG_API_URL", "ENABLE_LOGGING", "LOG_LEVEL"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        // No .env: compiled-in defaults apply
        return;
    };

    for (number, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=.env line {} ignored (expected KEY=VALUE)", number + 1);
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !FORWARDED_KEYS.contains(&key) {
            println!("cargo:warning=.env key {} is not used by wave-blog", key);
            continue;
        }

        // Real environment wins over .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
