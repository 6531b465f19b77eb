// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Adhesive material tags.
//!
//! Every finalized group is tagged with one of four materials so that
//! simultaneous actuation never cross-triggers adjacent groups. The four
//! values are two families, each with a base and an offset variant; the
//! offset variant mounts one layer closer to the surface, which only the
//! external world adapter cares about. For the planner the tags are opaque
//! apart from the coloring constraint and the preference order.

use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// One of the four adhesive materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCountMacro, EnumIter)]
pub enum Material {
    Resin,
    ResinOffset,
    Gum,
    GumOffset,
}

/// An adhesive family, ignoring the base/offset distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialFamily {
    Resin,
    Gum,
}

/// Candidate order used by the material assigner: both base variants are
/// tried before either offset variant.
pub const PREFERRED_ORDER: [Material; 4] = [
    Material::Resin,
    Material::Gum,
    Material::ResinOffset,
    Material::GumOffset,
];

impl Material {
    pub fn family(self) -> MaterialFamily {
        match self {
            Material::Resin | Material::ResinOffset => MaterialFamily::Resin,
            Material::Gum | Material::GumOffset => MaterialFamily::Gum,
        }
    }

    /// Whether this is the offset variant of its family.
    pub fn is_offset(self) -> bool {
        matches!(self, Material::ResinOffset | Material::GumOffset)
    }

    /// Two-character glyph for diagnostic rendering.
    pub fn glyph(self) -> &'static str {
        match self {
            Material::Resin => "r ",
            Material::ResinOffset => "R ",
            Material::Gum => "g ",
            Material::GumOffset => "G ",
        }
    }
}
