fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = mandelbrot_explorer::ExplorerConfig::from_env()?;

    mandelbrot_explorer::run_gui(&config)
}
