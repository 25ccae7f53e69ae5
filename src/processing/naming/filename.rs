use std::fmt;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Marker token identifying processed catalog output
pub const SUFFIX: &str = "SLY";
/// Every squared output is a JPEG
pub const OUTPUT_EXTENSION: &str = "jpg";

lazy_static! {
    static ref NAME_PATTERN: Regex =
        Regex::new(r"^([a-z0-9-]+)_([a-z0-9-]+)_([A-Z0-9]{7})_SLY_(\d+)\.jpg$")
            .expect("filename pattern is valid");
}

/// E-commerce filename `<product>_<type>_<id>_SLY_<width>.jpg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedName {
    pub product: String,
    /// The type token (`description`, `obsidian`, ...)
    pub kind: String,
    pub random_id: String,
    pub width: u32,
}

impl GeneratedName {
    pub fn suffix(&self) -> &'static str {
        SUFFIX
    }

    pub fn file_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeneratedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}_{}.{}",
            self.product, self.kind, self.random_id, SUFFIX, self.width, OUTPUT_EXTENSION
        )
    }
}

/// Whether `name` follows the catalog naming convention
pub fn is_valid_filename(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Splits a conforming filename back into its parts.
pub fn parse_filename(name: &str) -> Option<GeneratedName> {
    let caps = NAME_PATTERN.captures(name)?;
    Some(GeneratedName {
        product: caps[1].to_string(),
        kind: caps[2].to_string(),
        random_id: caps[3].to_string(),
        width: caps[4].parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeneratedName {
        GeneratedName {
            product: "sigg-gourde".to_string(),
            kind: "obsidian".to_string(),
            random_id: "1AGH457".to_string(),
            width: 750,
        }
    }

    #[test]
    fn test_display() {
        let name = sample();
        assert_eq!(name.file_name(), "sigg-gourde_obsidian_1AGH457_SLY_750.jpg");
        assert_eq!(name.suffix(), "SLY");
        assert!(is_valid_filename(&name.file_name()));
    }

    #[test]
    fn test_parse_filename() {
        assert_eq!(parse_filename("sigg-gourde_obsidian_1AGH457_SLY_750.jpg"), Some(sample()));
    }

    #[test]
    fn test_rejects_nonconforming_names() {
        for name in [
            "IMG_0001.jpg",
            "sigg_obsidian_1agh457_SLY_750.jpg",
            "sigg_obsidian_1AGH457_SLY_750.png",
            "Sigg_obsidian_1AGH457_SLY_750.jpg",
            "sigg_obsidian_1AGH45_SLY_750.jpg",
            "sigg_obsidian_1AGH457_sly_750.jpg",
            "sigg_gourde_obsidian_1AGH457_SLY_750.jpg",
        ] {
            assert!(!is_valid_filename(name), "{name} should be rejected");
            assert!(parse_filename(name).is_none());
        }
    }

    #[test]
    fn test_width_overflow_does_not_parse() {
        assert!(parse_filename("a_b_ABCDEFG_SLY_99999999999.jpg").is_none());
    }
}
