//! Source-tree scanning for layering rules.

use std::fs;
use std::path::{Path, PathBuf};

/// Import prefixes a source directory must never mention.
pub struct LayerRule {
    pub dir: &'static str,
    pub forbidden: &'static [&'static str],
}

/// Domain types know nothing outside themselves.
pub const DOMAIN: LayerRule = LayerRule {
    dir: "src/domain",
    forbidden: &[
        "crate::adapter",
        "crate::application",
        "crate::infrastructure",
        "crate::port",
        "axum::",
        "diesel::",
        "tokio::",
    ],
};

/// Use cases reach storage only through the store ports.
pub const APPLICATION: LayerRule = LayerRule {
    dir: "src/application",
    forbidden: &["crate::adapter", "crate::infrastructure", "axum::", "diesel::"],
};

/// Route handlers go through the record service, never the database.
pub const HTTP_ADAPTER: LayerRule = LayerRule {
    dir: "src/adapter/inbound/http",
    forbidden: &["adapter::outbound", "diesel::"],
};

/// A rule violation or non-export line: `(path, line number, line)`.
pub type Hit = (String, usize, String);

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Every `.rs` file under `dir`, sorted, with its path relative to the crate.
fn sources(dir: &str) -> Vec<(String, String)> {
    let root = manifest_dir();
    let mut pending = vec![root.join(dir)];
    let mut files = Vec::new();

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).expect("read source dir") {
            let path = entry.expect("read dir entry").path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }

    files.sort();
    files
        .into_iter()
        .map(|path| {
            let content = fs::read_to_string(&path).expect("read source file");
            (display(&root, &path), content)
        })
        .collect()
}

fn display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Lines under `rule.dir` that mention a forbidden prefix.
pub fn violations(rule: &LayerRule) -> Vec<Hit> {
    sources(rule.dir)
        .into_iter()
        .flat_map(|(file, content)| {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| rule.forbidden.iter().any(|p| line.contains(p)))
                .map(|(idx, line)| (file.clone(), idx + 1, line.to_string()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Lines in `mod.rs` files that are neither comments nor module declarations.
pub fn mod_rs_content(dir: &str) -> Vec<Hit> {
    sources(dir)
        .into_iter()
        .filter(|(file, _)| file.ends_with("/mod.rs"))
        .flat_map(|(file, content)| {
            content
                .lines()
                .enumerate()
                .filter(|(_, line)| {
                    let line = line.trim();
                    !(line.is_empty()
                        || line.starts_with("//")
                        || line.starts_with("pub mod ")
                        || line.starts_with("mod "))
                })
                .map(|(idx, line)| (file.clone(), idx + 1, line.to_string()))
                .collect::<Vec<_>>()
        })
        .collect()
}
