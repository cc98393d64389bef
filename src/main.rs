use std::sync::Arc;

use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod rendering;
mod sequencer;

use rendering::{RenderError, Renderer};
use sequencer::constants::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use sequencer::{FrameClock, SequencerState};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .build(&event_loop)?,
    );

    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    let mut state = SequencerState::new();
    let mut clock = FrameClock::new();

    let win_id = window.id();
    event_loop.run(move |event, target| {
        // Uncapped busy-poll loop: drain pending events, then one frame.
        target.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent { event, window_id } if window_id == win_id => match event {
                WindowEvent::CloseRequested => target.exit(),
                WindowEvent::Resized(size) => renderer.resize(size),
                WindowEvent::RedrawRequested => {
                    let (now_ms, delta_ms) = clock.tick();
                    state.advance(now_ms, delta_ms);
                    if let Some(fps) = clock.fps_sample() {
                        log::info!("FPS: {fps:.1}");
                    }
                    match renderer.render(&state.draw_list()) {
                        Ok(()) => {}
                        Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                            log::error!("device out of memory, exiting");
                            target.exit();
                        }
                        Err(e) => log::warn!("render error: {e}"),
                    }
                }
                _ => {}
            },
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        }
    })?;
    Ok(())
}
