use std::path::PathBuf;
use clap::Args;
use crate::core::TargetSize;
use crate::processing::{describe_image, parse_filename};
use crate::utils::{SquarerError, SquarerResult, validate_input_file, validate_target_size};

#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Image to inspect
    pub file: PathBuf,

    /// Target canvas size used to pick the strategy [default: 750 750]
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub size: Option<Vec<u32>>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Describes one image and returns the printed report.
pub fn inspect_image(args: &InspectArgs) -> SquarerResult<String> {
    let target = match args.size.as_deref() {
        None => TargetSize::default(),
        Some([width, height]) => TargetSize::new(*width, *height),
        Some(_) => return Err(SquarerError::config("--size takes WIDTH HEIGHT")),
    };

    validate_target_size(target)?;
    validate_input_file(&args.file)?;
    let info = describe_image(&args.file, target)?;
    let name = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(parse_filename);

    if args.json {
        let report = serde_json::json!({
            "file": args.file,
            "target": target,
            "info": info,
            "name": name,
        });
        return serde_json::to_string_pretty(&report)
            .map_err(|e| SquarerError::IO(e.to_string()));
    }

    let mut lines = vec![
        format!("File:     {}", args.file.display()),
        format!("Format:   {:?}", info.format),
        format!("Size:     {}x{} ({} bytes)", info.width, info.height, info.size_bytes),
        format!("Color:    {}", info.color),
        format!(
            "Strategy: {} onto {} (content {}x{})",
            info.strategy, target, info.scaled_size.0, info.scaled_size.1
        ),
    ];

    match name {
        Some(name) => lines.push(format!(
            "Name:     product={} type={} id={} width={}",
            name.product, name.kind, name.random_id, name.width
        )),
        None => lines.push("Name:     not a catalog filename".to_string()),
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn test_inspect_catalog_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("mug_obsidian_AB12CD3_SLY_750.jpg");
        RgbImage::from_pixel(750, 750, Rgb([255, 255, 255])).save(&file).unwrap();

        let args = InspectArgs { file, size: None, json: false };
        let report = inspect_image(&args).unwrap();
        assert!(report.contains("750x750"));
        assert!(report.contains("square"));
        assert!(report.contains("product=mug type=obsidian id=AB12CD3 width=750"));
    }

    #[test]
    fn test_inspect_json() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("photo.png");
        RgbImage::from_pixel(40, 20, Rgb([0, 0, 0])).save(&file).unwrap();

        let args = InspectArgs { file, size: Some(vec![100, 100]), json: true };
        let value: serde_json::Value = serde_json::from_str(&inspect_image(&args).unwrap()).unwrap();
        assert_eq!(value["info"]["width"], 40);
        assert_eq!(value["info"]["strategy"], "horizontal");
        assert!(value["name"].is_null());
    }

    #[test]
    fn test_inspect_rejects_zero_size() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("photo.png");
        RgbImage::from_pixel(40, 20, Rgb([0, 0, 0])).save(&file).unwrap();

        let args = InspectArgs { file, size: Some(vec![0, 0]), json: false };
        assert!(matches!(inspect_image(&args), Err(SquarerError::Validation(_))));
    }

    #[test]
    fn test_inspect_missing_file() {
        let args = InspectArgs { file: PathBuf::from("/no/such/file.png"), size: None, json: false };
        assert!(matches!(inspect_image(&args), Err(SquarerError::Validation(_))));
    }
}
