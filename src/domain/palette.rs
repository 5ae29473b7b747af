//! Color schemes
//!
//! Shapes store a color *index*; the actual color resolves through whichever
//! scheme is current, so a click recolors the whole field at once.

/// Shape colors per scheme (0xRRGGBB)
pub const COLOR_SCHEMES: [[u32; 3]; 4] = [
    [0x4080ff, 0x40d0ff, 0x40ffe0],
    [0x8a1538, 0xc01f5e, 0xff2975],
    [0x8040ff, 0xc040ff, 0xff40d0],
    [0xff6b6b, 0xff9e7a, 0xffa69e],
];

/// Background color paired with each scheme
pub const BG_COLOR_SCHEMES: [u32; 4] = [0x050510, 0x100508, 0x100510, 0x100808];

pub const COLORS_PER_SCHEME: usize = 3;

/// Cyclic index into `COLOR_SCHEMES`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColorCycle {
    index: usize,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next scheme, wrapping around
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % COLOR_SCHEMES.len();
        self.index
    }

    pub fn shape_color(&self, color_index: usize) -> u32 {
        let scheme = &COLOR_SCHEMES[self.index];
        scheme[color_index % scheme.len()]
    }

    pub fn background(&self) -> u32 {
        BG_COLOR_SCHEMES[self.index]
    }
}

/// Format as `#rrggbb` for the host renderer
pub fn hex(color: u32) -> String {
    format!("#{:06x}", color & 0x00ff_ffff)
}
