use crate::error::Result;
use crate::Cell;

/// 16-bit framebuffer colour: 5 bits red, 6 bits green, 5 bits blue.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let r = (self.0 >> 11) & 0x1f;
        let g = (self.0 >> 5) & 0x3f;
        let b = self.0 & 0x1f;

        (scale(r, 0x1f), scale(g, 0x3f), scale(b, 0x1f))
    }
}

fn scale(channel: u16, max: u16) -> u8 {
    (channel as u32 * 255 / max as u32) as u8
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub snake_head: Rgb565,
    pub snake_body: Rgb565,
    pub feed: Rgb565,
    pub frame: Rgb565,
}

/// Drawing surface for the board and the text overlay.
///
/// Cells are grid coordinates, not pixels; the implementation owns the
/// cell-to-screen mapping. Nothing has to be visible before `flush`.
pub trait Renderer {
    fn draw_cell(&mut self, cell: Cell, color: Rgb565) -> Result<()>;

    /// Paints `cell` with the background colour.
    fn clear_cell(&mut self, cell: Cell) -> Result<()>;

    fn draw_frame(&mut self) -> Result<()>;

    /// Fills the whole board with the background colour.
    fn draw_background(&mut self) -> Result<()>;

    fn print_score(&mut self, score: u32) -> Result<()>;

    /// Clears everything and shows the end banner with the final score.
    fn draw_game_over(&mut self, score: u32) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_expand_to_full_channels() {
        assert_eq!(Rgb565(0xf800).to_rgb(), (255, 0, 0));
        assert_eq!(Rgb565(0x07e0).to_rgb(), (0, 255, 0));
        assert_eq!(Rgb565(0x001f).to_rgb(), (0, 0, 255));
        assert_eq!(Rgb565(0xffff).to_rgb(), (255, 255, 255));
        assert_eq!(Rgb565(0x0000).to_rgb(), (0, 0, 0));
    }

    #[test]
    fn feed_colour_is_red_dominant() {
        let (r, g, b) = Rgb565(0xe882).to_rgb();
        assert_eq!((r, g, b), (238, 16, 16));
    }
}
