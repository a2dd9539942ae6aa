use std::fmt;

/// The single dimension a gradient is edited along.
///
/// Positions are measured from the rect's start edge: top for `Vertical`,
/// left for `Horizontal`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    /// Parses the lowercase names used in scripts and config.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "horizontal" => Some(Axis::Horizontal),
            "vertical" => Some(Axis::Vertical),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
