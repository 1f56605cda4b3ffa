use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use fluent::FluentResource;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "spendwise_ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

const FALLBACK: &str = "en";

/// Simple parser: extract message IDs from a Fluent file.
/// Any line of the form `<identifier> =` counts as a message definition.
/// Comments, terms (`-` prefix), attributes and blank lines are ignored.
fn parse_ftl_keys(content: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let id = line[..eq_pos].trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.push(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Extract every `fl!(loader, "...")` literal key under `src/`.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];
    let needle = "fl!(loader, \"";

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}

fn collect_locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .expect("i18n directory readable")
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .collect();
    dirs.sort();
    dirs
}

fn read_locale(i18n_root: &Path, locale: &str) -> String {
    let path = i18n_root.join(locale).join(FTL_FILENAME);
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("Locale folder {locale:?} missing {path:?}: {err}"))
}

fn i18n_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(I18N_DIR)
}

#[test]
fn ftl_filename_is_normalized_crate_name() {
    let expected = format!("{}.ftl", env!("CARGO_PKG_NAME").replace('-', "_"));
    assert_eq!(FTL_FILENAME, expected);
    let root = i18n_root();
    for locale in collect_locale_dirs(&root) {
        assert!(
            root.join(&locale).join(FTL_FILENAME).is_file(),
            "{locale} has no {FTL_FILENAME}"
        );
    }
}

#[test]
fn every_locale_parses_as_fluent() {
    let root = i18n_root();
    for locale in collect_locale_dirs(&root) {
        let src = read_locale(&root, &locale);
        if let Err((_, errors)) = FluentResource::try_new(src) {
            panic!("{locale}/{FTL_FILENAME} has Fluent syntax errors: {errors:?}");
        }
    }
}

#[test]
fn no_duplicate_keys() {
    let root = i18n_root();
    for locale in collect_locale_dirs(&root) {
        let mut seen = HashSet::new();
        let dups: BTreeSet<_> = parse_ftl_keys(&read_locale(&root, &locale))
            .into_iter()
            .filter(|k| !seen.insert(k.clone()))
            .collect();
        assert!(dups.is_empty(), "Duplicate keys in {locale}: {dups:?}");
    }
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let root = i18n_root();

    // 1. Fallback locale must exist and define keys.
    let fallback_keys: BTreeSet<String> = parse_ftl_keys(&read_locale(&root, FALLBACK))
        .into_iter()
        .collect();
    assert!(!fallback_keys.is_empty(), "No message keys in fallback FTL");

    // 2. Every key the loader reads must exist in the fallback.
    let referenced = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(!referenced.is_empty(), "No fl! lookups found in sources");
    let mut missing_in_fallback: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .collect();
    missing_in_fallback.sort();
    assert!(
        missing_in_fallback.is_empty(),
        "Referenced translation keys missing in fallback: {missing_in_fallback:?}"
    );

    // 3. Each locale defines every fallback key.
    let mut per_locale_missing: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in collect_locale_dirs(&root) {
        let keys: HashSet<String> = parse_ftl_keys(&read_locale(&root, &locale))
            .into_iter()
            .collect();
        let missing: Vec<_> = fallback_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .cloned()
            .collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }
    if !per_locale_missing.is_empty() {
        panic!(
            "Locales with missing translations relative to {FALLBACK}:\n{per_locale_missing:#?}\n\
             Hint: copy the missing keys from {FALLBACK}, then translate."
        );
    }

    // 4. Unused fallback keys are dead copy.
    let unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !referenced.contains(*k))
        .collect();
    assert!(unused.is_empty(), "Fallback keys never read: {unused:?}");
}

#[test]
fn table_codes_match_locale_folders() {
    let codes: Vec<&str> = ui::i18n::translations().codes().collect();
    assert_eq!(codes, collect_locale_dirs(&i18n_root()));
}

/// `fluent` only validates FTL syntax here; runtime lookups go through `i18n-embed`.
#[test]
fn fluent_is_a_dev_dependency_only() {
    let manifest = fs::read_to_string(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml"))
        .expect("Cargo.toml readable");
    let mut section = "";
    for line in manifest.lines().map(str::trim) {
        if line.starts_with('[') {
            section = line;
            continue;
        }
        if line.starts_with("fluent ") || line.starts_with("fluent=") {
            assert_eq!(section, "[dev-dependencies]", "fluent declared under {section}");
        }
    }
}
