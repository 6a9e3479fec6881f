use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::api::render;
use crate::core::data::complex_bounds::ComplexBounds;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use std::path::Path;
use std::time::Instant;

/// Renders the home view once and hands it to a file presenter. Headless
/// counterpart of the interactive viewport.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    viewport: Viewport,
    bounds: ComplexBounds,
    max_iterations: IterationBudget,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(config: &ExplorerConfig, presenter: P) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            presenter,
            viewport: config.viewport()?,
            bounds: config.home_bounds()?,
            max_iterations: config.initial_budget(),
            buffer: None,
        })
    }

    pub fn generate(&mut self) -> &PixelBuffer {
        log::info!(
            "Rendering {}x{} snapshot at {} iterations",
            self.viewport.width(),
            self.viewport.height(),
            self.max_iterations.get()
        );

        let start = Instant::now();
        let buffer = render(self.bounds, self.viewport, self.max_iterations);
        log::info!("Duration: {:?}", start.elapsed());

        self.buffer.insert(buffer)
    }

    /// Writes the last generated frame. Does nothing before [`Self::generate`].
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        match &self.buffer {
            Some(buffer) => self.presenter.present(buffer, filepath.as_ref()),
            None => {
                log::warn!("Nothing generated yet; skipping write");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        writes: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.writes
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            width: 16,
            height: 9,
            ..ExplorerConfig::default()
        }
    }

    #[test]
    fn test_write_before_generate_is_a_no_op() {
        let presenter = RecordingPresenter::default();
        let controller = SnapshotController::new(&small_config(), &presenter).unwrap();

        controller.write("out.ppm").unwrap();

        assert!(presenter.writes.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_home_view() {
        let presenter = RecordingPresenter::default();
        let config = small_config();
        let mut controller = SnapshotController::new(&config, &presenter).unwrap();

        let frame = controller.generate().clone();
        controller.write("out.ppm").unwrap();

        assert_eq!(
            frame,
            render(
                config.home_bounds().unwrap(),
                config.viewport().unwrap(),
                config.initial_budget()
            )
        );
        assert_eq!(
            presenter.writes.borrow().as_slice(),
            &[(PathBuf::from("out.ppm"), 16 * 9 * 4)]
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let presenter = RecordingPresenter::default();
        let config = ExplorerConfig {
            height: 0,
            ..small_config()
        };

        assert!(SnapshotController::new(&config, &presenter).is_err());
    }
}
