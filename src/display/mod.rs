//! Display surface primitives: independently styled text regions drawn
//! onto any RGB target.

pub mod fonts;

use core::fmt;

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyleBuilder},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

/// Panel size.
pub const SCREEN_W: u32 = 240;
pub const SCREEN_H: u32 = 240;

/// Visual styling for one region, fixed at creation time.
#[derive(Clone, Copy)]
pub struct RegionStyle {
    pub foreground: Rgb565,
    pub background: Rgb565,
    pub alignment: Alignment,
    pub font: &'static MonoFont<'static>,
}

/// A rectangular text region with an owned, fixed-size text buffer.
///
/// The buffer is overwritten in place on every refresh and never grows.
/// Only the single event-dispatch context ever mutates it.
pub struct TextRegion<const N: usize> {
    bounds: Rectangle,
    style: RegionStyle,
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> TextRegion<N> {
    /// Create a region showing `placeholder` until the first refresh.
    pub fn new(bounds: Rectangle, style: RegionStyle, placeholder: &str) -> Self {
        let mut region = Self {
            bounds,
            style,
            buf: [0; N],
            len: 0,
        };
        region.set_text(format_args!("{}", placeholder));
        region
    }

    /// Overwrite the region text.
    ///
    /// Output longer than the backing buffer blanks the region instead of
    /// leaving a torn prefix; callers size their formats to fit.
    pub fn set_text(&mut self, args: fmt::Arguments<'_>) {
        match format_no_std::show(&mut self.buf, args) {
            Ok(text) => self.len = text.len(),
            Err(_) => self.len = 0,
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Region bounds.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Paint the region background, then the current text.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(self.style.background))
            .draw(target)?;

        let character_style = MonoTextStyleBuilder::new()
            .font(self.style.font)
            .text_color(self.style.foreground)
            .background_color(self.style.background)
            .build();
        let text_style = TextStyleBuilder::new()
            .alignment(self.style.alignment)
            .baseline(Baseline::Top)
            .build();

        let top = self.bounds.top_left;
        let anchor = match self.style.alignment {
            Alignment::Left => top,
            Alignment::Center => Point::new(top.x + self.bounds.size.width as i32 / 2, top.y),
            Alignment::Right => Point::new(top.x + self.bounds.size.width as i32, top.y),
        };

        Text::with_text_style(self.text(), anchor, character_style, text_style).draw(target)?;
        Ok(())
    }
}
