//! Main entry point for the spherical map viewer.
//!
//! This module handles:
//! - Command-line argument parsing
//! - Window creation and the event loop
//! - Routing input to the frame loop and presenting frames
//! - Headless snapshots rendered on the CPU
//!
//! # Event Handling
//! - Left mouse drag: rotate the sphere
//! - Mouse wheel: zoom
//! - Escape / window close: exit

use anyhow::{Context, Result};
use clap::Parser;
use spherical_viewer::{
    config::ViewerConfig,
    gpu::GpuContext,
    loader::ImageLoader,
    projection::render_view,
    render_loop::RenderLoop,
    view::ViewState,
    Renderer,
};
use std::{path::PathBuf, sync::Arc};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

#[derive(Parser, Debug)]
#[command(name = "viewer")]
#[command(about = "Views a flat map through a spherical projection")]
struct Args {
    /// Image to project
    #[arg(long)]
    texture: Option<PathBuf>,

    /// Render a single frame on the CPU and save it to this PNG path (no window)
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Initial longitude offset in radians
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    longitude: f32,

    /// Initial latitude offset in radians, clamped for the zoom
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    latitude: f32,

    /// Initial zoom, clamped to [1, 5]
    #[arg(long, default_value = "1")]
    zoom: f32,

    /// Present frames as fast as possible instead of syncing to the display
    #[arg(long)]
    no_vsync: bool,
}

impl Args {
    fn viewer_config(&self) -> ViewerConfig {
        let config = ViewerConfig::default().with_vsync(!self.no_vsync);
        match &self.texture {
            Some(path) => config.with_texture_path(path),
            None => config,
        }
    }

    fn initial_view(&self) -> ViewState {
        let mut view = ViewState::new();
        view.set_zoom(self.zoom);
        view.set_rotation(self.longitude, self.latitude);
        view
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let viewer = args.viewer_config();
    let view = args.initial_view();

    if let Some(output_path) = &args.snapshot {
        return run_snapshot(&viewer, &view, output_path);
    }

    run_windowed(&viewer, view)
}

fn run_snapshot(viewer: &ViewerConfig, view: &ViewState, output_path: &PathBuf) -> Result<()> {
    println!("Rendering snapshot to: {}", output_path.display());

    let source = ImageLoader::load_image(&viewer.texture_path)?;
    let frame = render_view(&source.image, view, viewer.width, viewer.height);
    frame
        .save(output_path)
        .with_context(|| format!("Failed to save snapshot to {}", output_path.display()))?;

    println!("Snapshot saved to {}", output_path.display());
    Ok(())
}

fn run_windowed(viewer: &ViewerConfig, view: ViewState) -> Result<()> {
    let event_loop = EventLoop::new()?;
    let window = Arc::new(create_window(&event_loop, viewer)?);

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
    let surface = instance
        .create_surface(window.clone())
        .context("Failed to create a surface for the window")?;
    let gpu = pollster::block_on(GpuContext::new(instance, Some(&surface)))?;
    let mut renderer = Renderer::new(surface, &gpu, viewer, &view)?;

    let (target_width, target_height) = renderer.target_size();
    log::info!(
        "Off-screen target {}x{}, {} texture(s) loaded",
        target_width,
        target_height,
        renderer.resources().len()
    );

    let mut frame_loop = RenderLoop::new(view);
    let mut fatal: Option<anyhow::Error> = None;
    let fatal_slot = &mut fatal;

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::AboutToWait => window.request_redraw(),
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(&gpu, physical_size);
                }
                WindowEvent::RedrawRequested => {
                    if let Err(e) = handle_redraw(&mut frame_loop, &mut renderer, &gpu, &window) {
                        *fatal_slot = Some(e);
                        frame_loop.request_close();
                    }
                }
                other => frame_loop.handle_window_event(&other),
            },
            _ => {}
        }

        exit_when_closing(&frame_loop, elwt);
    })?;

    match fatal {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

fn create_window(event_loop: &EventLoop<()>, viewer: &ViewerConfig) -> Result<Window> {
    let window = WindowBuilder::new()
        .with_title(viewer.title.as_str())
        .with_inner_size(winit::dpi::PhysicalSize::new(viewer.width, viewer.height))
        .with_resizable(false)
        .build(event_loop)?;
    Ok(window)
}

fn exit_when_closing(frame_loop: &RenderLoop, elwt: &EventLoopWindowTarget<()>) {
    if !frame_loop.is_running() {
        elwt.exit();
    }
}

fn handle_redraw(
    frame_loop: &mut RenderLoop,
    renderer: &mut Renderer,
    gpu: &GpuContext,
    window: &Window,
) -> Result<()> {
    if !frame_loop.is_running() {
        return Ok(());
    }

    let update = frame_loop.begin_frame();
    if update.view_changed {
        renderer.update_view(gpu, frame_loop.view());
    }
    if let Some(fps) = update.fps {
        renderer.update_fps(gpu, fps);
    }

    match renderer.render(gpu) {
        Ok(_) => Ok(()),
        Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
            log::warn!("Surface lost, reconfiguring");
            renderer.resize(gpu, window.inner_size());
            Ok(())
        }
        Err(wgpu::SurfaceError::OutOfMemory) => {
            log::error!("Out of GPU memory");
            Err(wgpu::SurfaceError::OutOfMemory.into())
        }
        Err(e) => {
            log::warn!("Render error: {:?}", e);
            Ok(())
        }
    }
}
