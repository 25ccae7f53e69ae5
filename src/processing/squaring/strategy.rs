//! Squaring strategy selection.

use std::fmt;
use serde::Serialize;
use tracing::debug;
use crate::core::TargetSize;

/// Relative aspect deviation still treated as "already square" for the target.
pub const SQUARE_TOLERANCE: f64 = 0.01;

/// How an image is fitted onto the target canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SquaringStrategy {
    /// Wider than the canvas: fit width, letterbox top and bottom
    Horizontal,
    /// Taller than the canvas: fit height, pillarbox left and right
    Vertical,
    /// Same aspect as the canvas: direct resize, no bands
    Square,
}

impl SquaringStrategy {
    /// Picks the strategy from the source aspect relative to the target aspect.
    ///
    /// A zero edge on either side has no aspect and is treated as square.
    pub fn classify(width: u32, height: u32, target: TargetSize) -> Self {
        if width == 0 || height == 0 || target.width == 0 || target.height == 0 {
            return Self::Square;
        }

        let source_aspect = width as f64 / height as f64;
        let relative = source_aspect / target.aspect();

        let strategy = if (relative - 1.0).abs() <= SQUARE_TOLERANCE {
            Self::Square
        } else if relative > 1.0 {
            Self::Horizontal
        } else {
            Self::Vertical
        };

        debug!(
            "{}x{} (aspect {:.4}) vs target {} (aspect {:.4}) -> {}",
            width,
            height,
            source_aspect,
            target,
            target.aspect(),
            strategy
        );

        strategy
    }

    /// Size the source is scaled to before it is placed on the canvas.
    ///
    /// The scaled edge never exceeds the target edge and is at least 1 when
    /// the target edge allows it.
    pub fn scaled_dimensions(&self, width: u32, height: u32, target: TargetSize) -> (u32, u32) {
        match self {
            Self::Square => (target.width, target.height),
            Self::Horizontal => {
                let scaled_h = scale_edge(height, target.width, width);
                (target.width, scaled_h.max(1).min(target.height))
            }
            Self::Vertical => {
                let scaled_w = scale_edge(width, target.height, height);
                (scaled_w.max(1).min(target.width), target.height)
            }
        }
    }
}

/// `edge * numerator / denominator`, rounded; 0 when the denominator is 0
fn scale_edge(edge: u32, numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (edge as f64 * numerator as f64 / denominator as f64).round() as u32
}

impl fmt::Display for SquaringStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Square => "square",
        };
        f.write_str(name)
    }
}
