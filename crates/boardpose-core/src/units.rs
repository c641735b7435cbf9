use serde::{Deserialize, Serialize};

/// Length unit tag carried by every [`Location`](crate::Location).
///
/// The tag travels through all geometry unchanged; no conversion between
/// units is performed anywhere in this workspace. Arithmetic between two
/// locations with differing tags fails fast instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeters,
    Centimeters,
    Meters,
    Inches,
    Feet,
    Mils,
}

impl LengthUnit {
    /// Conventional short name, e.g. `"mm"` for millimeters.
    pub fn short_name(&self) -> &'static str {
        match self {
            LengthUnit::Millimeters => "mm",
            LengthUnit::Centimeters => "cm",
            LengthUnit::Meters => "m",
            LengthUnit::Inches => "in",
            LengthUnit::Feet => "ft",
            LengthUnit::Mils => "mil",
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
