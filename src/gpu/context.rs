//! Window and OpenGL context creation.
//!
//! Negotiates an OpenGL 3.3 core context through glutin, builds the
//! window surface, loads the glow function pointers, and exposes the
//! swap/resize operations the frame loop needs. Pure glue; no rendering
//! logic lives here.

use std::ffi::CStr;
use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{
    GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval,
    WindowSurface,
};
use glutin_winit::{DisplayBuilder, GlWindow};
use glow::HasContext;
use raw_window_handle::HasWindowHandle;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::gpu::device::GlDevice;
use crate::options::WindowOptions;

/// Errors from window/context/surface creation.
#[derive(Debug)]
pub enum ContextError {
    /// The display builder or surface-attribute construction failed.
    Build(String),
    /// The display builder finished without producing a window.
    MissingWindow,
    /// The window refused to hand out a raw handle.
    WindowHandle(raw_window_handle::HandleError),
    /// Context or surface creation / current-ness change failed.
    Glutin(glutin::error::Error),
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(msg) => write!(f, "display setup failed: {msg}"),
            Self::MissingWindow => {
                write!(f, "display builder produced no window")
            }
            Self::WindowHandle(e) => {
                write!(f, "window handle unavailable: {e}")
            }
            Self::Glutin(e) => write!(f, "GL context error: {e}"),
        }
    }
}

impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WindowHandle(e) => Some(e),
            Self::Glutin(e) => Some(e),
            _ => None,
        }
    }
}

/// Pick the config with the deepest depth buffer from the candidates
/// glutin found for the template.
///
/// glutin only invokes the picker with at least one matching config.
#[allow(clippy::expect_used)]
fn pick_config(
    configs: Box<dyn Iterator<Item = Config> + '_>,
) -> Config {
    configs
        .reduce(|best, candidate| {
            if candidate.depth_size() > best.depth_size() {
                candidate
            } else {
                best
            }
        })
        .expect("no matching GL config")
}

/// The window, its GL surface/context pair, and the loaded [`GlDevice`].
///
/// Owned by the viewer; everything here lives and dies on the main
/// thread with the event loop.
pub struct WindowContext {
    window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    device: GlDevice,
}

impl WindowContext {
    /// Create the window, negotiate a 3.3 core context, make it current,
    /// and load the GL function pointers.
    pub fn create(
        event_loop: &ActiveEventLoop,
        options: &WindowOptions,
    ) -> Result<Self, ContextError> {
        let attributes = Window::default_attributes()
            .with_title(options.title.clone())
            .with_inner_size(LogicalSize::new(
                options.width,
                options.height,
            ));
        let template = ConfigTemplateBuilder::new().with_depth_size(24);

        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, template, pick_config)
            .map_err(|e| ContextError::Build(e.to_string()))?;
        let window = window.ok_or(ContextError::MissingWindow)?;

        let raw_handle = window
            .window_handle()
            .map_err(ContextError::WindowHandle)?
            .as_raw();
        let display = config.display();

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_handle));
        let not_current = unsafe {
            display.create_context(&config, &context_attributes)
        }
        .map_err(ContextError::Glutin)?;

        let surface_attributes = window
            .build_surface_attributes(SurfaceAttributesBuilder::default())
            .map_err(|e| ContextError::Build(e.to_string()))?;
        let surface = unsafe {
            display.create_window_surface(&config, &surface_attributes)
        }
        .map_err(ContextError::Glutin)?;

        let context = not_current
            .make_current(&surface)
            .map_err(ContextError::Glutin)?;

        let interval = if options.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("failed to set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name: &CStr| {
                display.get_proc_address(name)
            })
        };
        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        log::info!("OpenGL version: {version}");

        Ok(Self {
            window,
            surface,
            context,
            device: GlDevice::new(gl),
        })
    }

    /// The winit window.
    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The loaded GL device.
    #[must_use]
    pub fn device(&self) -> &GlDevice {
        &self.device
    }

    /// Width / height of the drawable area, clamped away from zero.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        let size = self.window.inner_size();
        size.width.max(1) as f32 / size.height.max(1) as f32
    }

    /// Resize the surface and viewport after a window resize.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let width =
            NonZeroU32::new(size.width).unwrap_or(NonZeroU32::MIN);
        let height =
            NonZeroU32::new(size.height).unwrap_or(NonZeroU32::MIN);
        self.surface.resize(&self.context, width, height);
        unsafe {
            self.device.raw().viewport(
                0,
                0,
                width.get() as i32,
                height.get() as i32,
            );
        }
    }

    /// Present the frame.
    pub fn swap_buffers(&self) -> Result<(), ContextError> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(ContextError::Glutin)
    }
}
