//! Desktop frontend: window, framebuffer blit, keyboard input, frame pacing.
//!
//! The core treats this crate as its display sink and input source: once per
//! frame it hands over a finished framebuffer, and once per iteration it is
//! given a fresh button snapshot.

use clap::Parser;
use pixels::{Pixels, SurfaceTexture};
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dotmatrix_core::gameboy::GameBoy;
use dotmatrix_core::joypad::Buttons;
use dotmatrix_core::{SCREEN_HEIGHT, SCREEN_WIDTH};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const GB_FPS: f64 = 59.7275;
const FRAME_TIME: Duration = Duration::from_nanos((1e9_f64 / GB_FPS) as u64);

#[derive(Parser)]
struct Args {
    /// Path to ROM file
    rom: std::path::PathBuf,

    /// Path to boot ROM file (256 bytes); skipped when absent
    #[arg(long)]
    bootrom: Option<std::path::PathBuf>,

    /// Integer window scale factor
    #[arg(long, default_value_t = 3)]
    scale: u32,

    /// Run without opening a window
    #[arg(long)]
    headless: bool,

    /// Number of frames to run in headless mode
    #[arg(long, default_value_t = 60)]
    frames: usize,
}

fn build_machine(args: &Args) -> GameBoy {
    let mut gb = match &args.bootrom {
        Some(path) => {
            let mut gb = GameBoy::new();
            let data = match std::fs::read(path) {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("failed to read boot ROM {}: {e}", path.display());
                    process::exit(1);
                }
            };
            if let Err(e) = gb.load_boot_rom(data) {
                eprintln!("{e}");
                process::exit(1);
            }
            gb
        }
        None => GameBoy::new_post_boot(),
    };

    if let Err(e) = gb.load_cart_from_file(&args.rom) {
        eprintln!("failed to load {}: {e}", args.rom.display());
        process::exit(1);
    }
    gb
}

fn run_headless(mut gb: GameBoy, frames: usize) {
    for _ in 0..frames {
        gb.set_buttons(Buttons::default());
        gb.run_frame();
    }
    let out = gb.bus.serial.take_output();
    if !out.is_empty() {
        print!("{}", String::from_utf8_lossy(&out));
    }
}

struct App {
    gb: GameBoy,
    scale: u32,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels>,
    buttons: Buttons,
    next_frame: Instant,
}

impl App {
    fn new(gb: GameBoy, scale: u32) -> Self {
        Self {
            gb,
            scale,
            window: None,
            pixels: None,
            buttons: Buttons::default(),
            next_frame: Instant::now(),
        }
    }

    fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::KeyZ => self.buttons.a = pressed,
            KeyCode::KeyX => self.buttons.b = pressed,
            KeyCode::Backspace => self.buttons.select = pressed,
            KeyCode::Enter => self.buttons.start = pressed,
            KeyCode::ArrowRight => self.buttons.right = pressed,
            KeyCode::ArrowLeft => self.buttons.left = pressed,
            KeyCode::ArrowUp => self.buttons.up = pressed,
            KeyCode::ArrowDown => self.buttons.down = pressed,
            _ => {}
        }
    }

    fn advance_frame(&mut self) {
        self.gb.set_buttons(self.buttons);
        self.gb.run_frame();

        if let Some(pixels) = self.pixels.as_mut() {
            let src = self.gb.framebuffer();
            for (dst, &color) in pixels.frame_mut().chunks_exact_mut(4).zip(src.iter()) {
                dst[0] = (color >> 16) as u8;
                dst[1] = (color >> 8) as u8;
                dst[2] = color as u8;
                dst[3] = 0xFF;
            }
            if let Err(e) = pixels.render() {
                log::error!("render failed: {e}");
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let size = LogicalSize::new(
            (SCREEN_WIDTH as u32 * self.scale) as f64,
            (SCREEN_HEIGHT as u32 * self.scale) as f64,
        );
        let attrs = Window::default_attributes()
            .with_title("dotmatrix")
            .with_inner_size(size);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("failed to create window"),
        );

        let inner = window.inner_size();
        let surface = SurfaceTexture::new(inner.width, inner.height, &*window);
        let pixels = Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface)
            .expect("failed to create surface");

        self.window = Some(window);
        self.pixels = Some(pixels);
        self.next_frame = Instant::now();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    let _ = pixels.resize_surface(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_key(code, event.state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => {
                self.advance_frame();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // External pacing: hold the loop to the hardware refresh rate.
        let now = Instant::now();
        if now >= self.next_frame {
            self.next_frame = now + FRAME_TIME;
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let gb = build_machine(&args);

    if args.headless {
        run_headless(gb, args.frames);
        return;
    }

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = App::new(gb, args.scale.max(1));
    if let Err(e) = event_loop.run_app(&mut app) {
        eprintln!("event loop error: {e}");
        process::exit(1);
    }
}
