use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for the `fieldwalk` crate as seen
/// from the caller's Cargo.toml.
///
/// The invoking crate may have renamed the dependency, so the macro cannot
/// hard-code `::fieldwalk`; the builder's manifest is scanned instead.
///
/// # Resolution rules
///
/// 1. If `fieldwalk` is listed in `dependencies` (directly, or renamed via
///    `package = "fieldwalk"`), return the name it is visible under.
/// 2. Repeat step 1 in `dev-dependencies`.
/// 3. Otherwise, fall back to the absolute path `::fieldwalk`. Inside the
///    `fieldwalk` crate itself this resolves through its
///    `extern crate self as fieldwalk;` alias.
///
/// The manifest is cached per path and re-read when the file changes:
/// proc-macro servers can outlive a single crate build, and
/// `CARGO_MANIFEST_DIR` moves with the crate being compiled.
#[derive(Debug)]
pub(crate) struct Manifest {
    path: PathBuf,
    modified_time: SystemTime,
    manifest: Document<Box<str>>,
}

static MANIFEST: RwLock<Option<Manifest>> = RwLock::new(None);

impl Manifest {
    // Try get `Cargo.toml` path.
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let mut path = env::var_os("CARGO_MANIFEST_DIR")
            .map(PathBuf::from)
            .expect("`CARGO_MANIFEST_DIR` is not set in the build environment");
        path.push("Cargo.toml");
        path
    }

    fn read(path: PathBuf, modified_time: SystemTime) -> Self {
        let content = fs::read_to_string(&path).expect("failed to read `Cargo.toml`");
        let manifest =
            Document::parse(content.into_boxed_str()).expect("failed to parse `Cargo.toml`");

        Self {
            path,
            modified_time,
            manifest,
        }
    }

    /// Runs `f` with the cached manifest, re-reading it first when the file
    /// on disk is not the one that was cached.
    pub fn shared<R>(f: impl FnOnce(&Manifest) -> R) -> R {
        let path = Self::manifest_path();
        let modified_time = fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        let mut guard = MANIFEST.write().unwrap_or_else(PoisonError::into_inner);

        let stale = match guard.as_ref() {
            Some(cached) => cached.path != path || cached.modified_time != modified_time,
            None => true,
        };
        if stale {
            *guard = Some(Self::read(path, modified_time));
        }

        f(guard.as_ref().expect("manifest cache was just filled"))
    }

    /// Returns the path the given crate is accessible under, following the
    /// resolution rules above.
    pub fn crate_path(&self, crate_name: &str) -> syn::Path {
        for table_name in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(table)) = self.manifest.get(table_name) {
                if let Some(name) = find_dependency(table, crate_name) {
                    let ident = syn::Ident::new(&name, Span::call_site());
                    return syn::parse_quote!(::#ident);
                }
            }
        }

        let ident = syn::Ident::new(crate_name, Span::call_site());
        syn::parse_quote!(::#ident)
    }
}

// A dependency either uses the crate's own name as its key, or renames it
// and points back with `package = "..."`.
fn find_dependency(table: &Table, crate_name: &str) -> Option<String> {
    for (key, item) in table.iter() {
        if key == crate_name {
            return Some(key.to_string());
        }

        let package = item
            .as_table_like()
            .and_then(|dep| dep.get("package"))
            .and_then(Item::as_str);
        if package == Some(crate_name) {
            return Some(key.to_string());
        }
    }

    None
}
