use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::viewport::data::frame_data::FrameData;
use crate::controllers::viewport::events::InputEvent;
use crate::controllers::viewport::ports::frame_sink::FrameSink;
use crate::controllers::viewport::state::{Transition, ViewportRules, ViewportState};
use crate::core::data::complex_bounds::ComplexBounds;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use std::time::Instant;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

/// Owns the viewport state and renders a frame into its sink after every accepted
/// transition. Single-threaded: each event is handled to completion, render
/// included, before the next one is looked at.
pub struct ViewportController<S: FrameSink> {
    rules: ViewportRules,
    state: ViewportState,
    sink: S,
}

impl<S: FrameSink> ViewportController<S> {
    pub fn new(config: &ExplorerConfig, sink: S) -> Result<Self, ConfigError> {
        let rules = ViewportRules::from_config(config)?;
        let state = ViewportState::new(rules.home_bounds, config.initial_budget());

        Ok(Self { rules, state, sink })
    }

    /// Renders the home view so the window is never blank.
    pub fn start(&mut self) {
        log::debug!(
            "Initial view {:?} with {} iterations",
            self.state.bounds,
            self.state.max_iterations.get()
        );
        self.render_current();
    }

    /// Applies one input event. Renders exactly once for every reset, precision
    /// change and committed zoom; ignored keys, rejected zooms and close never render.
    pub fn handle_event(&mut self, event: &InputEvent) -> ControlFlow {
        match self.state.next(event, &self.rules) {
            Transition::Redraw(next) => {
                log::debug!(
                    "{:?}: bounds {:?}, {} iterations, zoom level {}",
                    event,
                    next.bounds,
                    next.max_iterations.get(),
                    next.zoom_level
                );
                self.state = next;
                self.render_current();
                ControlFlow::Continue
            }
            Transition::Unchanged => ControlFlow::Continue,
            Transition::Rejected(err) => {
                log::warn!("Ignoring zoom: {}", err);
                ControlFlow::Continue
            }
            Transition::Exit => {
                log::debug!("Close requested");
                ControlFlow::Exit
            }
        }
    }

    fn render_current(&mut self) {
        let start = Instant::now();
        let pixel_buffer = render_view(
            self.state.bounds,
            self.rules.viewport,
            self.state.max_iterations,
        );
        let render_duration = start.elapsed();

        log::info!(
            "Rendered {}x{} frame at {} iterations in {:?}",
            self.rules.viewport.width(),
            self.rules.viewport.height(),
            self.state.max_iterations.get(),
            render_duration
        );

        self.sink.present(FrameData {
            pixel_buffer,
            zoom_factor: self.zoom_factor(),
            max_iterations: self.state.max_iterations.get(),
        });
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[must_use]
    pub fn bounds(&self) -> ComplexBounds {
        self.state.bounds
    }

    #[must_use]
    pub fn max_iterations(&self) -> IterationBudget {
        self.state.max_iterations
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.state.zoom_factor(self.rules.zoom_divisor)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.rules.viewport
    }

    #[must_use]
    pub fn zoom_divisor(&self) -> u32 {
        self.rules.zoom_divisor
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(feature = "parallel")]
fn render_view(
    bounds: ComplexBounds,
    viewport: Viewport,
    max_iterations: IterationBudget,
) -> PixelBuffer {
    crate::core::actions::render_frame::render_frame_parallel::render_parallel(
        bounds,
        viewport,
        max_iterations,
    )
}

#[cfg(not(feature = "parallel"))]
fn render_view(
    bounds: ComplexBounds,
    viewport: Viewport,
    max_iterations: IterationBudget,
) -> PixelBuffer {
    crate::core::actions::render_frame::render_frame::render(bounds, viewport, max_iterations)
}
