//! Main GUI application loop.

use crate::config::ExplorerConfig;
use crate::controllers::viewport::{ControlFlow, ViewportController};
use crate::core::data::point::PixelPoint;
use crate::core::data::zoom_region::ZoomRegion;
use crate::input::gui::events::translate;
use crate::presenters::pixels::PixelsPresenter;
use egui::{Color32, Context, Id, LayerId, Order, Pos2, Rect, Stroke};
use egui_winit::State as EguiWinitState;
use std::error::Error;
use std::time::{Duration, Instant};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow as LoopControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

const WINDOW_TITLE: &str = "Mandelbrot Explorer";
const BORDER_COLOUR: Color32 = Color32::from_rgba_premultiplied(128, 128, 128, 128);

struct GuiApp {
    window: &'static Window,
    controller: ViewportController<PixelsPresenter>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    cursor: PixelPoint,
    frame_interval: Duration,
    last_redraw: Instant,
    redraw_pending: bool,
}

impl GuiApp {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        config: &ExplorerConfig,
    ) -> Result<Self, Box<dyn Error>> {
        let presenter = PixelsPresenter::new(window, config.viewport()?)?;
        let controller = ViewportController::new(config, presenter)?;

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            window,
            controller,
            egui_ctx,
            egui_state,
            cursor: PixelPoint::default(),
            frame_interval: Duration::from_secs(1) / config.fps_limit.max(1),
            last_redraw: Instant::now(),
            redraw_pending: true,
        })
    }

    fn handle_window_event(&mut self, event: &WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        let response = self.egui_state.on_window_event(self.window, event);
        if response.repaint {
            self.redraw_pending = true;
        }

        match event {
            WindowEvent::RedrawRequested => {
                if let Err(err) = self.redraw() {
                    log::error!("Render error: {}", err);
                    elwt.exit();
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = PixelPoint::new(position.x, position.y);
                self.redraw_pending = true;
            }
            _ => {}
        }

        if let Some(input) = translate(event, self.cursor) {
            if self.controller.handle_event(&input) == ControlFlow::Exit {
                elwt.exit();
            }
        }

        if self.controller.sink_mut().take_frame_pending() {
            self.redraw_pending = true;
        }
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        self.redraw_pending = false;
        self.last_redraw = Instant::now();

        let mut egui_output = self.update_ui();
        self.egui_state
            .handle_platform_output(self.window, std::mem::take(&mut egui_output.platform_output));

        self.controller.sink_mut().render(egui_output, &self.egui_ctx)
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let overlay = self.controller.sink().overlay();
        let border = ZoomRegion::centred_on(
            self.cursor,
            self.controller.viewport(),
            self.controller.zoom_divisor(),
        )
        .ok();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Area::new(Id::new("overlay"))
                .fixed_pos(Pos2::new(10.0, 10.0))
                .interactable(false)
                .show(ctx, |ui| {
                    if let Some(values) = overlay {
                        ui.colored_label(Color32::WHITE, format!("Zoom: {}", values.zoom_factor));
                        ui.colored_label(
                            Color32::WHITE,
                            format!("Max. Iterations: {}", values.max_iterations),
                        );
                    }
                });

            if let Some(region) = border {
                let points_per_pixel = 1.0 / ctx.pixels_per_point();
                let to_points =
                    |p: PixelPoint| Pos2::new(p.x as f32 * points_per_pixel, p.y as f32 * points_per_pixel);
                let rect = Rect::from_min_max(
                    to_points(region.top_left()),
                    to_points(region.bottom_right()),
                );

                ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("zoom_border")))
                    .rect_stroke(rect, 0.0, Stroke::new(points_per_pixel, BORDER_COLOUR));
            }
        })
    }

    fn about_to_wait(&mut self, elwt: &EventLoopWindowTarget<()>) {
        if !self.redraw_pending {
            elwt.set_control_flow(LoopControlFlow::Wait);
            return;
        }

        let next_redraw = self.last_redraw + self.frame_interval;
        if Instant::now() >= next_redraw {
            self.window.request_redraw();
        } else {
            elwt.set_control_flow(LoopControlFlow::WaitUntil(next_redraw));
        }
    }
}

/// Opens the explorer window and blocks until it is closed.
pub fn run_gui(config: &ExplorerConfig) -> Result<(), Box<dyn Error>> {
    config.validate()?;

    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let mut app = GuiApp::new(window, &event_loop, config)?;
    app.controller.start();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == app.window.id() => app.handle_window_event(event, elwt),
        Event::AboutToWait => app.about_to_wait(elwt),
        _ => {}
    })?;

    Ok(())
}
