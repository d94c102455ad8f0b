//! Catalog file discovery and parsing helpers.

use std::collections::{
    BTreeMap,
    HashSet,
};
use std::fmt::Write as _;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::LazyLock;

use ignore::WalkBuilder;
use serde_json::Value;

use crate::config::{
    CONFIG_FILE_NAME,
    FileMatcher,
};
use crate::locale::Locale;

/// ISO 639-1 language codes
static LANGUAGE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    "aa ab ae af ak am an ar as av ay az ba be bg bh bi bm bn bo br bs ca ce ch co cr cs cu \
     cv cy da de dv dz ee el en eo es et eu fa ff fi fj fo fr fy ga gd gl gn gu gv ha he hi \
     ho hr ht hu hy hz ia id ie ig ii ik io is it iu ja jv ka kg ki kj kk kl km kn ko kr ks \
     ku kv kw ky la lb lg li ln lo lt lu lv mg mh mi mk ml mn mr ms mt my na nb nd ne ng nl \
     nn no nr nv ny oc oj om or os pa pi pl ps pt qu rm rn ro ru rw sa sc sd se sg si sk sl \
     sm sn so sq sr ss st su sv sw ta te tg th ti tk tl tn to tr ts tt tw ty ug uk ur uz ve \
     vi vo wa wo xh yi yo za zh zu"
        .split_whitespace()
        .collect()
});

/// Collects the messages of a catalog document, keyed by their separator-joined path.
///
/// Array items are addressed as `key[i]`. Numbers and booleans become their JSON text,
/// `null` entries are not messages and are skipped, as is a document that is a bare scalar.
///
/// ```
/// use serde_json::json;
/// use translation_inspector::catalog::flatten_messages;
///
/// let messages = flatten_messages(&json!({ "menu": { "home": "Home", "items": ["A"] } }), ".");
/// let keys: Vec<_> = messages.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["menu.home", "menu.items[0]"]);
/// ```
#[must_use]
pub fn flatten_messages(document: &Value, separator: &str) -> BTreeMap<String, String> {
    let mut messages = BTreeMap::new();
    collect_messages(document, separator, &mut String::new(), &mut messages);
    messages
}

/// `path` is the key of `value`; it is restored before returning.
fn collect_messages(
    value: &Value,
    separator: &str,
    path: &mut String,
    messages: &mut BTreeMap<String, String>,
) {
    let message = match value {
        Value::Object(entries) => {
            for (name, child) in entries {
                let parent_len = path.len();
                if !path.is_empty() {
                    path.push_str(separator);
                }
                path.push_str(name);
                collect_messages(child, separator, path, messages);
                path.truncate(parent_len);
            }
            return;
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                let parent_len = path.len();
                let _ = write!(path, "[{index}]");
                collect_messages(child, separator, path, messages);
                path.truncate(parent_len);
            }
            return;
        }
        Value::Null => return,
        Value::String(text) => text.clone(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
    };

    if !path.is_empty() {
        messages.insert(path.clone(), message);
    }
}

/// Returns true for tags like `en`, `fr_CA`, `pt-BR`, `zh-Hant` or `es-419`.
fn looks_like_locale(segment: &str) -> bool {
    let mut parts = segment.split(['-', '_']);
    let Some(language) = parts.next() else {
        return false;
    };
    if !LANGUAGE_CODES.contains(language.to_ascii_lowercase().as_str()) {
        return false;
    }

    parts.all(|part| match part.len() {
        2 | 4 => part.chars().all(|c| c.is_ascii_alphabetic()),
        3 => part.chars().all(|c| c.is_ascii_digit()),
        _ => false,
    })
}

/// Detect locale from a catalog file path.
///
/// Splits the path by separators and '.', then searches backwards for a part
/// that looks like a locale tag.
///
/// # Examples
/// - `locales/en.json` → `en`
/// - `messages/fr-CA.json` → `fr_CA`
/// - `locales/de/app.json` → `de`
/// - `app.json` → root locale
pub(crate) fn detect_locale_from_path(file_path: &Path) -> Locale {
    let path_str = file_path.to_string_lossy();

    path_str
        .split(['/', '\\', '.'])
        .rev()
        .find(|part| looks_like_locale(part))
        .map_or_else(Locale::root, Locale::new)
}

/// Finds catalog files under the matcher's root, sorted by path.
///
/// The settings file never counts as a catalog, even when the include patterns match it.
pub(crate) fn find_catalog_files(matcher: &FileMatcher) -> Vec<PathBuf> {
    let root = matcher.root();
    let mut found_files = Vec::new();

    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(?err, "Failed to read directory entry");
                continue;
            }
        };

        let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
        if !is_file || entry.file_name() == CONFIG_FILE_NAME {
            continue;
        }

        if matcher.is_catalog_file(entry.path()) {
            found_files.push(entry.into_path());
        }
    }

    found_files.sort();
    found_files
}
