//! Folder layout conventions mapping a source path to product and type tokens.

use std::path::{Component, Path};
use crate::utils::{SquarerError, SquarerResult};

/// Product token used when nothing usable can be read from the path
pub const FALLBACK_PRODUCT: &str = "product";
/// Type token used when the layout has no type folder
pub const FALLBACK_KIND: &str = "image";
/// Type folders the catalog team uses today. Others pass through unchanged.
pub const KNOWN_KINDS: [&str; 3] = ["description", "obsidian", "selenite"];

const MAX_TOKEN_LEN: usize = 50;

/// Product and type tokens, already normalized for use in a filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPath {
    pub product: String,
    pub kind: String,
}

impl ProductPath {
    pub fn new(product: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            kind: kind.into(),
        }
    }
}

/// Maps a file location to its product and type.
///
/// Implementations decide how the folder layout is read; the squaring engine
/// never sees them.
pub trait ProductPathConvention {
    /// Resolves tokens for `path`, or reports a
    /// [`SquarerError::NamingConventionMismatch`] when the layout does not fit.
    fn resolve(&self, path: &Path, source_root: &Path) -> SquarerResult<ProductPath>;

    /// Tokens used after `resolve` reported a mismatch. Never empty.
    fn fallback(&self, path: &Path, source_root: &Path) -> ProductPath;
}

/// `<source_root>/<product>/<type>[/<more>...]/<file>` layout.
///
/// Folders below the type folder are appended to the type with `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderConvention;

impl FolderConvention {
    fn folders(path: &Path, source_root: &Path) -> SquarerResult<Vec<String>> {
        let relative = path.strip_prefix(source_root).map_err(|_| {
            SquarerError::naming_mismatch(
                path,
                format!("not inside source root {}", source_root.display()),
            )
        })?;

        Ok(relative
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .filter_map(|c| match c {
                        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}

impl ProductPathConvention for FolderConvention {
    fn resolve(&self, path: &Path, source_root: &Path) -> SquarerResult<ProductPath> {
        let folders = Self::folders(path, source_root)?;

        match folders.as_slice() {
            [] => Err(SquarerError::naming_mismatch(
                path,
                "file sits directly in the source root, expected <product>/<type>/<file>",
            )),
            [_] => Err(SquarerError::naming_mismatch(
                path,
                "no type folder under the product folder",
            )),
            [product, kind, deeper @ ..] => {
                let product = normalize_token(product);
                let kind = std::iter::once(kind)
                    .chain(deeper)
                    .map(|part| normalize_token(part))
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join("-");
                let kind = truncate_token(&kind);

                if product.is_empty() {
                    return Err(SquarerError::naming_mismatch(
                        path,
                        "product folder name has no usable characters",
                    ));
                }
                if kind.is_empty() {
                    return Err(SquarerError::naming_mismatch(
                        path,
                        "type folder name has no usable characters",
                    ));
                }

                Ok(ProductPath::new(product, kind))
            }
        }
    }

    fn fallback(&self, path: &Path, source_root: &Path) -> ProductPath {
        let from_folder = Self::folders(path, source_root)
            .ok()
            .and_then(|folders| folders.first().map(|f| normalize_token(f)))
            .filter(|token| !token.is_empty());

        let from_root = || {
            source_root
                .file_name()
                .map(|name| normalize_token(&name.to_string_lossy()))
                .filter(|token| !token.is_empty())
        };

        let product = from_folder
            .or_else(from_root)
            .unwrap_or_else(|| FALLBACK_PRODUCT.to_string());

        ProductPath::new(product, FALLBACK_KIND)
    }
}

/// Whether `kind` is one of the catalog's standard type folders
pub fn is_known_kind(kind: &str) -> bool {
    KNOWN_KINDS.contains(&kind)
}

/// Lower-cases and restricts a folder name to `[a-z0-9-]`.
///
/// Other characters become `-`, runs of `-` collapse, edges are trimmed and
/// the token is capped at 50 characters. May return an empty string.
pub fn normalize_token(raw: &str) -> String {
    let mut token = String::with_capacity(raw.len());
    for ch in raw.to_lowercase().chars() {
        let ch = if ch.is_ascii_lowercase() || ch.is_ascii_digit() { ch } else { '-' };
        if ch == '-' && token.ends_with('-') {
            continue;
        }
        token.push(ch);
    }
    truncate_token(&token)
}

fn truncate_token(token: &str) -> String {
    let token = token.trim_matches('-');
    // ASCII only at this point, so byte slicing is safe
    let capped = if token.len() > MAX_TOKEN_LEN { &token[..MAX_TOKEN_LEN] } else { token };
    capped.trim_end_matches('-').to_string()
}
