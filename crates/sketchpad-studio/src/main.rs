mod controls;

use anyhow::Result;

use sketchpad_engine::canvas::{stamp_position, Canvas, CanvasConfig};
use sketchpad_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use sketchpad_engine::device::GpuInit;
use sketchpad_engine::effects::{BurstConfig, Effects};
use sketchpad_engine::input::{InputEvent, InputState, KeyState};
use sketchpad_engine::logging::{init_logging, LoggingConfig};
use sketchpad_engine::render::{CanvasRenderer, GeometryRecorder};
use sketchpad_engine::scene::StyleState;
use sketchpad_engine::window::{Runtime, RuntimeConfig};

use controls::{action_for_press, apply_action};

struct Sketchpad {
    config: CanvasConfig,
    canvas: Canvas,
    style: StyleState,

    effects: Effects,
    overlay: GeometryRecorder,

    scene_renderer: CanvasRenderer,
    overlay_renderer: CanvasRenderer,
}

impl Sketchpad {
    fn new(config: CanvasConfig) -> Self {
        let canvas = Canvas::new(&config);
        Self {
            config,
            canvas,
            style: StyleState::default(),
            effects: Effects::new(BurstConfig::default()),
            overlay: GeometryRecorder::new(),
            scene_renderer: CanvasRenderer::new("sketchpad scene"),
            overlay_renderer: CanvasRenderer::new("sketchpad overlay"),
        }
    }
}

impl App for Sketchpad {
    fn on_input(
        &mut self,
        window: &WindowCtx<'_>,
        input: &InputState,
        event: &InputEvent,
    ) -> AppControl {
        if let Some(pointer) = stamp_position(event, input) {
            if let Err(e) = self.canvas.stamp(pointer, window.viewport(), &self.style) {
                log::warn!("stamp rejected: {e}");
            }
            return AppControl::Continue;
        }

        if let InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat } = event {
            if let Some(action) = action_for_press(*key, *modifiers, *repeat) {
                if !apply_action(action, &mut self.canvas, &mut self.style) {
                    log::info!("quit requested");
                    return AppControl::Exit;
                }
            }
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let viewport = ctx.window.viewport();

        if let Some(kind) = self.canvas.take_burst_request() {
            self.effects.start(kind, viewport.center());
        }
        self.effects.tick(ctx.time.dt);
        self.effects.render(&mut self.overlay, viewport);

        let scene = self.canvas.surface();
        let overlay = &self.overlay;
        let scene_renderer = &mut self.scene_renderer;
        let overlay_renderer = &mut self.overlay_renderer;

        ctx.render(self.config.clear_color, |rctx, target| {
            scene_renderer.render(rctx, target, scene);
            overlay_renderer.render(rctx, target, overlay);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("P/T/C tool, R/G/B color (Shift lowers), [ ] size, - = segments, D dog, Backspace clear");
    Runtime::run(RuntimeConfig::default(), GpuInit::default(), Sketchpad::new(CanvasConfig::default()))
}
