use std::borrow::Cow;
use std::fmt;

/// Mnemonic direction names for the low axes, negative sense first.
/// Axes past these fall back to the generic `pos-k`/`neg-k` labels.
const AXIS_NAMES: [[&str; 2]; 4] = [
    ["west", "east"],
    ["north", "south"],
    ["up", "down"],
    ["kata", "ana"],
];

/// A signed unit move along one axis of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub axis: usize,
    pub positive: bool,
}

impl Direction {
    pub fn positive(axis: usize) -> Self {
        Self {
            axis,
            positive: true,
        }
    }

    pub fn negative(axis: usize) -> Self {
        Self {
            axis,
            positive: false,
        }
    }

    /// The opposite direction. Involutive: `d.antipode().antipode() == d`.
    pub fn antipode(self) -> Self {
        Self {
            axis: self.axis,
            positive: !self.positive,
        }
    }

    pub fn label(&self) -> Cow<'static, str> {
        match AXIS_NAMES.get(self.axis) {
            Some(pair) => Cow::Borrowed(pair[self.positive as usize]),
            None => Cow::Owned(format!(
                "{}-{}",
                if self.positive { "pos" } else { "neg" },
                self.axis
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
