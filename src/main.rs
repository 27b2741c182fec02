//! mat4lab - 4x4 matrix operations on screen
//!
//! Computes the demo's matrix results once at startup and redraws them
//! as labeled text grids every frame until Escape is pressed.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use mat4lab::config::AppConfig;
use mat4lab_display::{demo_panels, MatrixPanel, PanelLayout};
use mat4lab_input::KeyboardState;
use mat4lab_render::{BlitPipeline, RenderContext, TextRaster};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// Text grid spacing derived from config
    layout: PanelLayout,
    /// The eight result panels, computed once in `new`
    panels: Vec<MatrixPanel>,
    /// Keyboard hit-state with frame-to-frame edge detection
    keyboard: KeyboardState,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    blit_pipeline: Option<BlitPipeline>,
    raster: Option<TextRaster>,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let layout = config.layout.to_panel_layout();

        // All matrix results are computed here, once. The frame loop
        // only redraws them.
        let m1 = config.demo.m1();
        let m2 = config.demo.m2();
        let panels = demo_panels(&layout, m1, m2);

        log::info!("Computed {} result panels", panels.len());

        Self {
            config,
            layout,
            panels,
            keyboard: KeyboardState::new(),
            window: None,
            render_context: None,
            blit_pipeline: None,
            raster: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let mut window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            if self.config.window.fullscreen {
                window_attributes =
                    window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            // Create render context
            let render_context = pollster::block_on(RenderContext::new(window.clone()))
                .unwrap_or_else(|e| panic!("Failed to create render context: {}", e));

            let blit_pipeline =
                BlitPipeline::new(&render_context.device, render_context.config.format);

            let raster = TextRaster::new(render_context.size.width, render_context.size.height)
                .with_scale(self.config.layout.text_scale)
                .with_colors(
                    self.config.rendering.text_color,
                    self.config.rendering.background_color,
                );

            log::info!(
                "Window ready: {}x{}",
                render_context.size.width,
                render_context.size.height
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.blit_pipeline = Some(blit_pipeline);
            self.raster = Some(raster);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
                if let Some(raster) = &mut self.raster {
                    raster.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.keyboard.process_key(key, event.state);
                }
            }

            WindowEvent::RedrawRequested => {
                // Rising edge on Escape ends the demo
                if self.keyboard.just_pressed(KeyCode::Escape) {
                    log::info!("Escape pressed - exiting");
                    event_loop.exit();
                    return;
                }
                self.keyboard.advance_frame();

                if let (Some(ctx), Some(blit_pipeline), Some(raster)) = (
                    &mut self.render_context,
                    &mut self.blit_pipeline,
                    &mut self.raster,
                ) {
                    // Redraw the precomputed panels into the raster
                    raster.clear();
                    for panel in &self.panels {
                        panel.draw(raster, &self.layout);
                    }

                    let output = match ctx.surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost) => {
                            let size = ctx.size;
                            ctx.resize(size);
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                            return;
                        }
                    };

                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());

                    let mut encoder =
                        ctx.device
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("Blit Encoder"),
                            });

                    blit_pipeline.upload(&ctx.device, &ctx.queue, raster);
                    blit_pipeline.render(&mut encoder, &view);

                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting mat4lab");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
