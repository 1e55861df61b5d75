//! Resolution classification: named aspect ratios, megapixel tiers, and the
//! human-readable summary report.
//!
//! Everything here is computed fresh per query — nothing is cached or
//! persisted.

use core::fmt;

/// Named reference ratios for aspect classification, in tie-break order.
///
/// Classification picks the minimum |w/h − reference| entry. Exact ties take
/// the earlier entry; with these reference values ties are not reachable from
/// integer dimensions in practice.
static NAMED_RATIOS: &[(u32, u32, &str)] = &[
    (1, 1, "1:1 (square)"),
    (4, 3, "4:3"),
    (3, 2, "3:2"),
    (16, 9, "16:9"),
    (2, 3, "2:3"),
    (3, 4, "3:4"),
    (9, 16, "9:16"),
    (21, 9, "21:9 (ultrawide)"),
];

/// Closest named ratio for the given dimensions. Both must be ≥ 1.
pub fn closest_aspect_name(width: u32, height: u32) -> &'static str {
    debug_assert!(width >= 1 && height >= 1);
    let aspect = width as f64 / height as f64;
    let mut best = NAMED_RATIOS[0];
    let mut best_delta = f64::INFINITY;
    for &entry in NAMED_RATIOS {
        let (rw, rh, _) = entry;
        let delta = (rw as f64 / rh as f64 - aspect).abs();
        if delta < best_delta {
            best = entry;
            best_delta = delta;
        }
    }
    best.2
}

/// Coarse resolution tier from fixed megapixel breakpoints.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionTier {
    /// Below 0.3 MP.
    VeryLow,
    /// 0.3–0.9 MP.
    Low,
    /// 0.9–2.0 MP.
    Sd,
    /// 2.0–3.7 MP.
    Hd,
    /// 3.7–8.3 MP.
    Qhd,
    /// 8.3–14.7 MP.
    Uhd,
    /// 14.7 MP and above.
    UltraHigh,
}

impl ResolutionTier {
    /// Bucket a megapixel count.
    pub fn from_megapixels(megapixels: f64) -> Self {
        if megapixels < 0.3 {
            Self::VeryLow
        } else if megapixels < 0.9 {
            Self::Low
        } else if megapixels < 2.0 {
            Self::Sd
        } else if megapixels < 3.7 {
            Self::Hd
        } else if megapixels < 8.3 {
            Self::Qhd
        } else if megapixels < 14.7 {
            Self::Uhd
        } else {
            Self::UltraHigh
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "very low",
            Self::Low => "low",
            Self::Sd => "SD",
            Self::Hd => "HD",
            Self::Qhd => "2K/2.5K",
            Self::Uhd => "4K",
            Self::UltraHigh => "ultra high",
        }
    }
}

impl fmt::Display for ResolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Read-only summary of a resolution. See [`ResolutionInfo::compute`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResolutionInfo {
    pub width: u32,
    pub height: u32,
    pub total_pixels: u64,
    /// Megapixels, rounded to 2 decimals.
    pub megapixels: f64,
    /// `width / height`, rounded to 3 decimals.
    pub aspect_ratio: f64,
    /// Closest entry of the named-ratio table.
    pub aspect_name: &'static str,
    pub tier: ResolutionTier,
    pub is_landscape: bool,
    pub is_portrait: bool,
    pub is_square: bool,
}

impl ResolutionInfo {
    /// Summarize the given dimensions. Both must be ≥ 1 — the host's widget
    /// bounds guarantee ≥ 64.
    pub fn compute(width: u32, height: u32) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        let total_pixels = width as u64 * height as u64;
        let megapixels = total_pixels as f64 / 1_000_000.0;
        Self {
            width,
            height,
            total_pixels,
            megapixels: (megapixels * 100.0).round() / 100.0,
            aspect_ratio: (width as f64 / height as f64 * 1000.0).round() / 1000.0,
            aspect_name: closest_aspect_name(width, height),
            tier: ResolutionTier::from_megapixels(megapixels),
            is_landscape: width > height,
            is_portrait: height > width,
            is_square: width == height,
        }
    }

    fn orientation(&self) -> &'static str {
        if self.is_square {
            "square"
        } else if self.is_landscape {
            "landscape"
        } else {
            "portrait"
        }
    }

    /// Multi-line human-readable summary. Not machine-parsed.
    pub fn report(&self) -> String {
        format!(
            "Resolution: {}x{} ({:.2} MP)\n\
             Tier: {}\n\
             Aspect: {}, {}\n\
             Estimated generation time: {}",
            self.width,
            self.height,
            self.megapixels,
            self.tier,
            self.aspect_name,
            self.orientation(),
            generation_estimate(self.megapixels),
        )
    }
}

/// Coarse generation-time bucket. Intentionally vague — hardware varies by
/// an order of magnitude.
fn generation_estimate(megapixels: f64) -> &'static str {
    if megapixels < 0.5 {
        "very fast"
    } else if megapixels < 1.5 {
        "fast"
    } else if megapixels < 4.0 {
        "moderate"
    } else if megapixels < 9.0 {
        "slow"
    } else {
        "very slow"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_hd_summary() {
        let info = ResolutionInfo::compute(1920, 1080);
        assert_eq!(info.total_pixels, 2_073_600);
        assert_eq!(info.megapixels, 2.07);
        assert_eq!(info.aspect_ratio, 1.778);
        assert_eq!(info.aspect_name, "16:9");
        assert_eq!(info.tier, ResolutionTier::Hd);
        assert!(info.is_landscape);
        assert!(!info.is_portrait);
        assert!(!info.is_square);
    }

    #[test]
    fn square_orientation() {
        let info = ResolutionInfo::compute(1024, 1024);
        assert_eq!(info.aspect_name, "1:1 (square)");
        assert!(info.is_square);
        assert!(!info.is_landscape);
        assert!(!info.is_portrait);
    }

    #[test]
    fn portrait_classification() {
        let info = ResolutionInfo::compute(832, 1216);
        assert_eq!(info.aspect_name, "2:3");
        assert!(info.is_portrait);
    }

    #[test]
    fn ultrawide_classification() {
        assert_eq!(closest_aspect_name(2560, 1080), "21:9 (ultrawide)");
    }

    #[test]
    fn tier_breakpoints() {
        assert_eq!(ResolutionTier::from_megapixels(0.29), ResolutionTier::VeryLow);
        assert_eq!(ResolutionTier::from_megapixels(0.3), ResolutionTier::Low);
        assert_eq!(ResolutionTier::from_megapixels(0.9), ResolutionTier::Sd);
        assert_eq!(ResolutionTier::from_megapixels(2.0), ResolutionTier::Hd);
        assert_eq!(ResolutionTier::from_megapixels(3.7), ResolutionTier::Qhd);
        assert_eq!(ResolutionTier::from_megapixels(8.3), ResolutionTier::Uhd);
        assert_eq!(
            ResolutionTier::from_megapixels(14.7),
            ResolutionTier::UltraHigh
        );
    }

    #[test]
    fn tier_bucketing_uses_unrounded_megapixels() {
        // 1999×1000 = 1.999 MP displays as 2.00 but stays in the SD bucket.
        let info = ResolutionInfo::compute(1999, 1000);
        assert_eq!(info.megapixels, 2.0);
        assert_eq!(info.tier, ResolutionTier::Sd);
    }

    #[test]
    fn report_lines() {
        let report = ResolutionInfo::compute(1920, 1080).report();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Resolution: 1920x1080 (2.07 MP)");
        assert_eq!(lines[1], "Tier: HD");
        assert_eq!(lines[2], "Aspect: 16:9, landscape");
        assert_eq!(lines[3], "Estimated generation time: moderate");
    }
}
