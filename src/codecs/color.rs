use serde::Serialize;
use std::fmt;

/// Color space codes used by spot-color and display-info entries.
///
/// Payloads keep the raw `u16`; this is a view for display and for building
/// new entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColorSpace {
    Rgb,
    Hsb,
    Cmyk,
    /// Lab based
    Pantone,
    /// CMYK based
    Focoltone,
    /// CMYK based
    Trumatch,
    /// Lab based
    Toyo,
    Lab,
    Grayscale,
    /// CMYK based
    Hks,
    /// Lab based
    Dic,
    /// Lab based
    Anpa,
}

impl ColorSpace {
    pub fn from_raw(raw: u16) -> Option<Self> {
        Some(match raw {
            0 => Self::Rgb,
            1 => Self::Hsb,
            2 => Self::Cmyk,
            3 => Self::Pantone,
            4 => Self::Focoltone,
            5 => Self::Trumatch,
            6 => Self::Toyo,
            7 => Self::Lab,
            8 => Self::Grayscale,
            10 => Self::Hks,
            11 => Self::Dic,
            3000 => Self::Anpa,
            _ => return None,
        })
    }

    pub fn raw(&self) -> u16 {
        match self {
            Self::Rgb => 0,
            Self::Hsb => 1,
            Self::Cmyk => 2,
            Self::Pantone => 3,
            Self::Focoltone => 4,
            Self::Trumatch => 5,
            Self::Toyo => 6,
            Self::Lab => 7,
            Self::Grayscale => 8,
            Self::Hks => 10,
            Self::Dic => 11,
            Self::Anpa => 3000,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Hsb => "HSB",
            Self::Cmyk => "CMYK",
            Self::Pantone => "Pantone",
            Self::Focoltone => "Focoltone",
            Self::Trumatch => "Trumatch",
            Self::Toyo => "Toyo",
            Self::Lab => "Lab",
            Self::Grayscale => "Grayscale",
            Self::Hks => "HKS",
            Self::Dic => "DIC",
            Self::Anpa => "ANPA",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders a raw color space code, by name when it is a known one.
pub(crate) struct RawColorSpace(pub u16);

impl fmt::Display for RawColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ColorSpace::from_raw(self.0) {
            Some(cs) => write!(f, "{cs}"),
            None => write!(f, "#{}", self.0),
        }
    }
}

/// How a display-info channel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisplayKind {
    Selected,
    Protected,
    Spot,
}

impl DisplayKind {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Selected),
            1 => Some(Self::Protected),
            2 => Some(Self::Spot),
            _ => None,
        }
    }

    pub fn raw(&self) -> u8 {
        match self {
            Self::Selected => 0,
            Self::Protected => 1,
            Self::Spot => 2,
        }
    }
}
