use mandelbrot_explorer::{ExplorerConfig, PpmFilePresenter, SnapshotController};
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ExplorerConfig::from_env()?;
    let filepath = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

    if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut controller = SnapshotController::new(&config, PpmFilePresenter::new())?;
    controller.generate();
    controller.write(&filepath)?;

    Ok(())
}
