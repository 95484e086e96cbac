use serde::{Deserialize, Serialize};

/// Physical dimensions of an enclosure, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(length: u32, width: u32, height: u32) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}
