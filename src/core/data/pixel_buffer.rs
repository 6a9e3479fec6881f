use crate::core::data::colour::Colour;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn viewport_to_buffer_size(viewport: Viewport) -> usize {
    viewport.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        viewport: Viewport,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { x, y, viewport } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} viewport",
                    x,
                    y,
                    viewport.width(),
                    viewport.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Row-major RGBA raster, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    viewport: Viewport,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            buffer: vec![0; viewport_to_buffer_size(viewport)],
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    fn offset(&self, x: u32, y: u32) -> Result<usize, PixelBufferError> {
        if x >= self.viewport.width() || y >= self.viewport.height() {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                viewport: self.viewport,
            });
        }

        Ok((y as usize * self.viewport.width() as usize + x as usize) * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.offset(x, y)?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<Colour, PixelBufferError> {
        let index = self.offset(x, y)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
            a: self.buffer[index + 3],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: u32, height: u32) -> Viewport {
        Viewport::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let buffer = PixelBuffer::new(viewport(10, 10));

        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_writes_at_row_major_offset() {
        let mut buffer = PixelBuffer::new(viewport(3, 3));
        let colour = Colour::opaque(10, 20, 30);

        buffer.set_pixel(2, 1, colour).unwrap();

        // (1 * 3 + 2) * 4 = 20
        assert_eq!(&buffer.buffer()[20..24], &[10, 20, 30, 255]);
        assert_eq!(buffer.pixel(2, 1).unwrap(), colour);
        assert_eq!(buffer.pixel(1, 2).unwrap(), Colour { r: 0, g: 0, b: 0, a: 0 });
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(viewport(3, 3));

        assert_eq!(
            buffer.set_pixel(3, 0, Colour::BLACK),
            Err(PixelBufferError::PixelOutsideBounds {
                x: 3,
                y: 0,
                viewport: viewport(3, 3)
            })
        );
        assert!(buffer.pixel(0, 3).is_err());
    }
}
