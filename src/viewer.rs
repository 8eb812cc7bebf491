//! Standalone demo window backed by winit.
//!
//! Owns the frame loop: input is drained into the camera once per
//! frame, the shader program is bound, the camera's view matrix and
//! zoom-derived projection are uploaded, and each cube in the field is
//! drawn with its own model matrix.
//!
//! ```no_run
//! # use cubewalk::Viewer;
//! Viewer::builder().build().run().unwrap();
//! ```

use std::time::Instant;

use glam::{Mat4, Vec3};
use glow::HasContext;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, WindowId};

use crate::camera::Camera;
use crate::error::CubewalkError;
use crate::gpu::{
    CubeMesh, GlDevice, ShaderProgram, Texture, WindowContext,
};
use crate::input::CameraInput;
use crate::options::Options;
use crate::scene::CubeField;

/// Near clip plane distance.
const Z_NEAR: f32 = 0.1;
/// Far clip plane distance.
const Z_FAR: f32 = 100.0;
/// Camera start position.
const START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title (overrides the options value).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.window.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that renders the cube field.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the frame loop. Blocks until the window
    /// is closed or Escape is pressed.
    pub fn run(self) -> Result<(), CubewalkError> {
        let event_loop = EventLoop::new()
            .map_err(|e| CubewalkError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let input =
            CameraInput::new(self.options.camera.constrain_pitch);
        let mut app = ViewerApp {
            options: self.options,
            scene: None,
            input,
            last_frame: Instant::now(),
            start_time: Instant::now(),
            failure: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| CubewalkError::Viewer(e.to_string()))?;

        match app.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Everything that only exists once the window and GL context are up.
struct SceneState {
    context: WindowContext,
    program: ShaderProgram<GlDevice>,
    mesh: CubeMesh,
    texture: Texture,
    camera: Camera,
    cubes: CubeField,
}

/// Internal winit application handler.
struct ViewerApp {
    options: Options,
    scene: Option<SceneState>,
    input: CameraInput,
    last_frame: Instant,
    start_time: Instant,
    failure: Option<CubewalkError>,
}

impl ViewerApp {
    /// Create the GL context and upload every startup resource.
    fn init_scene(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<SceneState, CubewalkError> {
        let context =
            WindowContext::create(event_loop, &self.options.window)?;

        // Mouse-look wants raw deltas with the cursor out of the way.
        let window = context.window();
        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        {
            log::warn!("cursor grab unavailable: {e}");
        }
        window.set_cursor_visible(false);

        unsafe { context.device().raw().enable(glow::DEPTH_TEST) }

        let scene_opts = &self.options.scene;
        let program = ShaderProgram::from_files(
            context.device(),
            &scene_opts.vertex_shader,
            &scene_opts.fragment_shader,
        )?;
        let mesh = CubeMesh::upload(context.device())?;
        let texture = Texture::load_or_fallback(
            context.device(),
            &scene_opts.texture,
        )?;

        let camera_opts = &self.options.camera;
        let mut camera = Camera::new(
            START_POSITION,
            Vec3::Y,
            Camera::DEFAULT_YAW,
            Camera::DEFAULT_PITCH,
        );
        camera.set_speed(camera_opts.speed);
        camera.set_sensitivity(camera_opts.sensitivity);
        camera.set_zoom(camera_opts.fov);

        Ok(SceneState {
            context,
            program,
            mesh,
            texture,
            camera,
            cubes: CubeField::new(scene_opts),
        })
    }

    /// Advance the camera and draw one frame.
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };

        let now = Instant::now();
        // Clamp dt so a stall (window drag, debugger) does not teleport
        // the camera.
        let dt = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;

        self.input.apply(&mut scene.camera, dt);
        if self.input.exit_requested() {
            event_loop.exit();
            return;
        }

        let device = scene.context.device();
        let [r, g, b] = self.options.scene.clear_color;
        unsafe {
            let gl = device.raw();
            gl.clear_color(r, g, b, 1.0);
            gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        scene.program.bind(device);
        let projection = Mat4::perspective_rh_gl(
            scene.camera.zoom().to_radians(),
            scene.context.aspect_ratio(),
            Z_NEAR,
            Z_FAR,
        );
        let _ = scene.program.set_mat4(device, "projection", &projection);
        let _ = scene.program.set_mat4(
            device,
            "view",
            &scene.camera.view_matrix(),
        );
        let _ = scene.program.set_i32(device, "cube_texture", 0);

        scene.texture.bind(device);
        scene.mesh.bind(device);
        let elapsed = self.start_time.elapsed().as_secs_f32();
        for model in scene.cubes.model_matrices(elapsed) {
            let _ = scene.program.set_mat4(device, "model", &model);
            scene.mesh.draw(device);
        }

        if let Err(e) = scene.context.swap_buffers() {
            self.failure = Some(e.into());
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.scene.is_some() {
            return;
        }
        match self.init_scene(event_loop) {
            Ok(scene) => {
                self.last_frame = Instant::now();
                self.start_time = Instant::now();
                scene.context.window().request_redraw();
                self.scene = Some(scene);
            }
            Err(err) => {
                log::error!("startup failed: {err}");
                self.failure = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(scene) = &self.scene {
                    scene.context.resize(size);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.input
                        .handle_key(code, event.state.is_pressed());
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 * 0.01
                    }
                };
                self.input.handle_scroll(lines);
            }
            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.input.handle_mouse_motion(dx, dy);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(scene) = &self.scene {
            scene.context.window().request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(scene) = self.scene.take() {
            let SceneState {
                context,
                program,
                mesh,
                texture,
                ..
            } = scene;
            let device = context.device();
            program.delete(device);
            mesh.delete(device);
            texture.delete(device);
        }
        log::info!("window closed cleanly");
    }
}
