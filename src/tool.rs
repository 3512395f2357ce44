use serde::{Deserialize, Serialize};

/// The drawing tool currently selected in the toolbar
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolMode {
    /// Freehand drawing, committed segment by segment while dragging
    #[default]
    FreeLine,
    /// Straight segment from pointer-down to pointer-up
    Line,
    Rectangle,
    Oval,
    /// Freehand drawing in the background color
    Eraser,
}

impl ToolMode {
    /// All modes in toolbar order
    pub const ALL: [ToolMode; 5] = [
        ToolMode::Rectangle,
        ToolMode::Oval,
        ToolMode::FreeLine,
        ToolMode::Line,
        ToolMode::Eraser,
    ];

    /// Stable name used for mode selection by name and toolbar labels
    pub fn name(self) -> &'static str {
        match self {
            Self::FreeLine => "freeLine",
            Self::Line => "line",
            Self::Rectangle => "rect",
            Self::Oval => "oval",
            Self::Eraser => "eraser",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.name() == name)
    }

    /// Freehand modes draw on every drag event instead of on pointer-up
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::FreeLine | Self::Eraser)
    }
}

impl std::fmt::Display for ToolMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
