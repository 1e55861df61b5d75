//! Preset resolution catalogs and the per-family selection resolver.
//!
//! Static tables of named `(width, height)` entries grouped by model family,
//! plus [`PresetSelection`] — one optional choice per family, resolved to a
//! single size by scanning families in declared order. All tables are
//! process-wide read-only data; every dimension is a multiple of 8.
//!
//! # Example
//!
//! ```
//! use zensize::presets::{PresetFamily, PresetSelection};
//! use zensize::sizing::Size;
//!
//! let mut selection = PresetSelection::default();
//! selection.select(PresetFamily::Sdxl, "3:2 (1216x832)").unwrap();
//!
//! assert_eq!(selection.resolve(), Size::new(1216, 832));
//! assert_eq!(PresetSelection::default().resolve(), Size::new(1024, 1024));
//! ```

use thiserror::Error;

use crate::sizing::{DEFAULT_SIZE, Size};

/// A named, fixed resolution entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Preset {
    /// Host-facing label, unique within its family.
    pub label: &'static str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Preset {
    const fn new(label: &'static str, width: u32, height: u32) -> Self {
        Self {
            label,
            width,
            height,
        }
    }

    /// The entry's dimensions.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// SDXL's official training buckets.
pub static SDXL_PRESETS: &[Preset] = &[
    Preset::new("1:1 (1024x1024)", 1024, 1024),
    Preset::new("9:7 (1152x896)", 1152, 896),
    Preset::new("7:9 (896x1152)", 896, 1152),
    Preset::new("3:2 (1216x832)", 1216, 832),
    Preset::new("2:3 (832x1216)", 832, 1216),
    Preset::new("7:4 (1344x768)", 1344, 768),
    Preset::new("4:7 (768x1344)", 768, 1344),
    Preset::new("12:5 (1536x640)", 1536, 640),
    Preset::new("5:12 (640x1536)", 640, 1536),
];

/// FLUX works well between 1 and 2 megapixels.
pub static FLUX_PRESETS: &[Preset] = &[
    Preset::new("1:1 (1024x1024)", 1024, 1024),
    Preset::new("1:1 (1408x1408)", 1408, 1408),
    Preset::new("4:3 (1408x1056)", 1408, 1056),
    Preset::new("3:4 (1056x1408)", 1056, 1408),
    Preset::new("16:9 (1344x768)", 1344, 768),
    Preset::new("9:16 (768x1344)", 768, 1344),
    Preset::new("16:9 (1920x1088)", 1920, 1088),
    Preset::new("9:16 (1088x1920)", 1088, 1920),
];

/// SD 1.5's 512-base set.
pub static SD15_PRESETS: &[Preset] = &[
    Preset::new("1:1 (512x512)", 512, 512),
    Preset::new("1:1 (768x768)", 768, 768),
    Preset::new("3:2 (768x512)", 768, 512),
    Preset::new("2:3 (512x768)", 512, 768),
    Preset::new("16:9 (912x512)", 912, 512),
    Preset::new("9:16 (512x912)", 512, 912),
];

/// Model family a preset table targets.
///
/// Declaration order is the resolver's scan order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PresetFamily {
    Sdxl,
    Flux,
    Sd15,
}

impl PresetFamily {
    /// All families in resolver scan order.
    pub const ALL: [PresetFamily; 3] = [Self::Sdxl, Self::Flux, Self::Sd15];

    /// Host-facing family name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sdxl => "SDXL",
            Self::Flux => "FLUX",
            Self::Sd15 => "SD 1.5",
        }
    }

    /// The family's preset table.
    pub fn presets(self) -> &'static [Preset] {
        match self {
            Self::Sdxl => SDXL_PRESETS,
            Self::Flux => FLUX_PRESETS,
            Self::Sd15 => SD15_PRESETS,
        }
    }

    /// Look an entry up by its label.
    pub fn find(self, label: &str) -> Option<&'static Preset> {
        self.presets().iter().find(|preset| preset.label == label)
    }
}

/// Preset resolution error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PresetError {
    /// The label is not in the family's table. The label sets are closed
    /// enumerations, so this is a host-configuration fault, not user input.
    #[error("unknown preset label {label:?} for family {family:?}")]
    UnknownLabel {
        family: PresetFamily,
        label: String,
    },
}

/// One optional preset choice per family.
///
/// `None` means the family is not selected (the original UI's "off" entry).
/// [`resolve`](Self::resolve) scans families in [`PresetFamily::ALL`] order
/// and takes the first selection; with nothing selected it falls back to
/// [`DEFAULT_SIZE`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PresetSelection {
    pub sdxl: Option<&'static Preset>,
    pub flux: Option<&'static Preset>,
    pub sd15: Option<&'static Preset>,
}

impl PresetSelection {
    /// Select a family's entry by label. Unknown labels are a fault.
    pub fn select(&mut self, family: PresetFamily, label: &str) -> Result<(), PresetError> {
        let preset = family.find(label).ok_or_else(|| PresetError::UnknownLabel {
            family,
            label: label.to_owned(),
        })?;
        *self.slot_mut(family) = Some(preset);
        Ok(())
    }

    /// Deselect a family.
    pub fn clear(&mut self, family: PresetFamily) {
        *self.slot_mut(family) = None;
    }

    /// The current choice for a family.
    pub fn get(&self, family: PresetFamily) -> Option<&'static Preset> {
        match family {
            PresetFamily::Sdxl => self.sdxl,
            PresetFamily::Flux => self.flux,
            PresetFamily::Sd15 => self.sd15,
        }
    }

    fn slot_mut(&mut self, family: PresetFamily) -> &mut Option<&'static Preset> {
        match family {
            PresetFamily::Sdxl => &mut self.sdxl,
            PresetFamily::Flux => &mut self.flux,
            PresetFamily::Sd15 => &mut self.sd15,
        }
    }

    /// Resolve to a single size: first selected family in scan order,
    /// or [`DEFAULT_SIZE`] when nothing is selected.
    pub fn resolve(&self) -> Size {
        self.sdxl
            .or(self.flux)
            .or(self.sd15)
            .map(Preset::size)
            .unwrap_or(DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_resolves_to_default() {
        assert_eq!(PresetSelection::default().resolve(), DEFAULT_SIZE);
    }

    #[test]
    fn first_selected_family_wins() {
        let mut selection = PresetSelection::default();
        selection
            .select(PresetFamily::Sd15, "1:1 (512x512)")
            .unwrap();
        selection
            .select(PresetFamily::Flux, "16:9 (1344x768)")
            .unwrap();
        // FLUX precedes SD 1.5 in scan order.
        assert_eq!(selection.resolve(), Size::new(1344, 768));

        selection
            .select(PresetFamily::Sdxl, "12:5 (1536x640)")
            .unwrap();
        assert_eq!(selection.resolve(), Size::new(1536, 640));
    }

    #[test]
    fn clear_restores_fallthrough() {
        let mut selection = PresetSelection::default();
        selection
            .select(PresetFamily::Sdxl, "1:1 (1024x1024)")
            .unwrap();
        selection
            .select(PresetFamily::Sd15, "2:3 (512x768)")
            .unwrap();
        selection.clear(PresetFamily::Sdxl);
        assert_eq!(selection.resolve(), Size::new(512, 768));
    }

    #[test]
    fn unknown_label_is_a_fault() {
        let mut selection = PresetSelection::default();
        let err = selection
            .select(PresetFamily::Sdxl, "1:1 (640x640)")
            .unwrap_err();
        assert!(matches!(err, PresetError::UnknownLabel { .. }));
        assert_eq!(selection, PresetSelection::default());
    }

    #[test]
    fn labels_are_unique_within_each_family() {
        for family in PresetFamily::ALL {
            let presets = family.presets();
            for (i, a) in presets.iter().enumerate() {
                for b in &presets[i + 1..] {
                    assert_ne!(a.label, b.label, "duplicate label in {family:?}");
                }
            }
        }
    }

    #[test]
    fn all_catalog_dimensions_are_step_aligned() {
        for family in PresetFamily::ALL {
            for preset in family.presets() {
                assert_eq!(preset.width % 8, 0, "{}", preset.label);
                assert_eq!(preset.height % 8, 0, "{}", preset.label);
            }
        }
    }
}
