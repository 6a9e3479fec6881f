use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::viewport::events::{InputEvent, Key};
use crate::core::api::{ZoomError, adjust_precision};
use crate::core::data::complex_bounds::ComplexBounds;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::point::PixelPoint;
use crate::core::data::viewport::Viewport;
use crate::core::data::zoom_region::ZoomRegion;
use crate::core::util::plane_mapper::rect_to_plane;

pub const RESET_KEY: char = 'o';

/// What the current view looks like. Replaced wholesale on every transition.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportState {
    pub bounds: ComplexBounds,
    pub max_iterations: IterationBudget,
    /// Starts at 1; each committed zoom adds one.
    pub zoom_level: u32,
}

impl ViewportState {
    #[must_use]
    pub fn new(bounds: ComplexBounds, max_iterations: IterationBudget) -> Self {
        Self {
            bounds,
            max_iterations,
            zoom_level: 1,
        }
    }

    /// `divisor^(zoom_level - 1)`.
    #[must_use]
    pub fn zoom_factor(&self, divisor: u32) -> f64 {
        let exponent = i32::try_from(self.zoom_level.saturating_sub(1)).unwrap_or(i32::MAX);

        f64::from(divisor).powi(exponent)
    }

    /// Pure transition function. Never renders; the caller does that for
    /// [`Transition::Redraw`]. Reset and precision events always redraw, even when
    /// the resulting state equals the current one.
    #[must_use]
    pub fn next(&self, event: &InputEvent, rules: &ViewportRules) -> Transition {
        match *event {
            InputEvent::Close => Transition::Exit,
            InputEvent::KeyReleased(Key::Character(ch)) if ch.eq_ignore_ascii_case(&RESET_KEY) => {
                Transition::Redraw(ViewportState::new(rules.home_bounds, rules.reset_budget))
            }
            InputEvent::KeyReleased(_) => Transition::Unchanged,
            InputEvent::WheelScrolled { delta } => Transition::Redraw(ViewportState {
                max_iterations: adjust_precision(self.max_iterations, delta > 0.0),
                ..*self
            }),
            InputEvent::PointerPressed { position } => match self.zoom_into(position, rules) {
                Ok(bounds) => Transition::Redraw(ViewportState {
                    bounds,
                    zoom_level: self.zoom_level.saturating_add(1),
                    ..*self
                }),
                Err(err) => Transition::Rejected(err),
            },
        }
    }

    fn zoom_into(&self, pointer: PixelPoint, rules: &ViewportRules) -> Result<ComplexBounds, ZoomError> {
        let region = ZoomRegion::centred_on(pointer, rules.viewport, rules.zoom_divisor)?;

        Ok(rect_to_plane(region, self.bounds, rules.viewport)?)
    }
}

/// Outcome of feeding one event to a [`ViewportState`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Transition {
    /// Adopt this state and render it.
    Redraw(ViewportState),
    /// The event has no effect on the view; no frame is rendered.
    Unchanged,
    /// The zoom could not produce valid bounds; the state is kept as is.
    Rejected(ZoomError),
    Exit,
}

/// Fixed inputs to the transition function, derived once from the config.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportRules {
    pub viewport: Viewport,
    pub home_bounds: ComplexBounds,
    pub reset_budget: IterationBudget,
    pub zoom_divisor: u32,
}

impl ViewportRules {
    pub fn from_config(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            viewport: config.viewport()?,
            home_bounds: config.home_bounds()?,
            reset_budget: config.reset_budget(),
            zoom_divisor: config.zoom_divisor,
        })
    }
}
