use std::path::Path;
use tracing::{debug, warn};
use super::convention::{
    FALLBACK_KIND, FALLBACK_PRODUCT, FolderConvention, ProductPathConvention, is_known_kind,
    normalize_token,
};
use super::filename::GeneratedName;
use super::id::IdGenerator;

/// Derives catalog filenames from where a file sits in the source tree.
pub struct NamingDeriver {
    convention: Box<dyn ProductPathConvention>,
    ids: IdGenerator,
}

impl NamingDeriver {
    /// Folder convention with OS-seeded ids
    pub fn new() -> Self {
        Self::with_convention(Box::new(FolderConvention), IdGenerator::new())
    }

    pub fn with_convention(convention: Box<dyn ProductPathConvention>, ids: IdGenerator) -> Self {
        Self { convention, ids }
    }

    /// Builds the output name for `path`.
    ///
    /// Layout mismatches are logged and resolved with the convention's
    /// fallback tokens, so a name is always produced. Tokens are normalized
    /// again here, whatever the convention returned.
    pub fn derive(&mut self, path: &Path, source_root: &Path, width: u32) -> GeneratedName {
        let tokens = match self.convention.resolve(path, source_root) {
            Ok(tokens) => tokens,
            Err(e) => {
                let tokens = self.convention.fallback(path, source_root);
                warn!("{}; using {}_{}", e, tokens.product, tokens.kind);
                tokens
            }
        };

        let product = clean_token(&tokens.product, FALLBACK_PRODUCT);
        let kind = clean_token(&tokens.kind, FALLBACK_KIND);

        if !is_known_kind(&kind) {
            debug!("Non-standard type folder '{}' for {}", kind, path.display());
        }

        let name = GeneratedName {
            product,
            kind,
            random_id: self.ids.next_id(),
            width,
        };
        debug!("Generated name: {}", name);

        name
    }
}

fn clean_token(raw: &str, fallback: &str) -> String {
    let token = normalize_token(raw);
    if token.is_empty() { fallback.to_string() } else { token }
}

impl Default for NamingDeriver {
    fn default() -> Self {
        Self::new()
    }
}
