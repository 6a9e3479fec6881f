use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6) writer. Alpha is dropped.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to(&self, buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
        let viewport = buffer.viewport();

        // P6 means binary RGB, then width, height and max_colour
        writeln!(out, "P6")?;
        writeln!(out, "{} {}", viewport.width(), viewport.height())?;
        writeln!(out, "255")?;
        out.write_all(&rgba_to_rgb(buffer.buffer()))?;

        Ok(())
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        self.write_to(buffer, &mut file)?;
        file.flush()?;

        log::info!("Saved {}", filepath.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::viewport::Viewport;

    #[test]
    fn test_write_to_emits_header_and_rgb_body() {
        let mut buffer = PixelBuffer::new(Viewport::new(2, 2).unwrap());
        buffer.set_pixel(1, 0, Colour::opaque(9, 8, 7)).unwrap();
        let mut out = Vec::new();

        PpmFilePresenter::new().write_to(&buffer, &mut out).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(out.len(), header.len() + 2 * 2 * 3);
        assert_eq!(&out[header.len() + 3..header.len() + 6], &[9, 8, 7]);
    }

    #[test]
    fn test_present_writes_file() {
        let path = std::env::temp_dir().join("mandelbrot_explorer_ppm_test.ppm");
        let buffer = PixelBuffer::new(Viewport::new(3, 2).unwrap());

        PpmFilePresenter::new().present(&buffer, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 18);
    }
}
