use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    CanvasRenderingContext2d, DeviceOrientationEvent, Event, EventTarget, HtmlCanvasElement,
    HtmlElement, MouseEvent, TouchEvent, Window,
};

use super::config::EffectConfig;
use super::field::{InputSource, Link, NetField};
use crate::lifecycle::{BackgroundEffect, EffectError};

/// Longest frame delta fed to the field, so a backgrounded tab doesn't jump.
const MAX_FRAME_DT: f64 = 0.1;
const DOT_SIZE: f64 = 3.0;
const LINK_OPACITY: f64 = 0.8;
/// Links are stroked in this many opacity bands, one path per band.
const LINK_BUCKETS: usize = 4;

/// Draws a [`NetField`] on a `<canvas>` appended to the container.
pub struct CanvasNet;

struct Scene {
    field: NetField,
    ctx: CanvasRenderingContext2d,
    last_ts: Option<f64>,
    links: Vec<Link>,
    background: String,
    dot: String,
    bands: Vec<String>,
}

impl Scene {
    fn new(config: &EffectConfig, ctx: CanvasRenderingContext2d) -> Self {
        let bands = (1..=LINK_BUCKETS)
            .map(|b| config.color.rgba(b as f64 / LINK_BUCKETS as f64 * LINK_OPACITY))
            .collect();
        Self {
            field: NetField::new(config.clone(), 0.0, 0.0),
            ctx,
            last_ts: None,
            links: Vec::new(),
            background: config.background_color.rgba(1.0),
            dot: config.color.rgba(1.0),
            bands,
        }
    }

    fn fit(&mut self, window: &Window, container: &HtmlElement, canvas: &HtmlCanvasElement) {
        let width = container.client_width() as f64;
        let height = container.client_height() as f64;
        let dpr = window.device_pixel_ratio().max(1.0);
        canvas.set_width((width * dpr) as u32);
        canvas.set_height((height * dpr) as u32);
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.field.resize(width, height);
    }

    fn frame(&mut self, ts: f64) {
        let dt = self
            .last_ts
            .map(|last| ((ts - last) / 1000.0).clamp(0.0, MAX_FRAME_DT))
            .unwrap_or(0.0);
        self.last_ts = Some(ts);
        self.field.step(dt);
        self.draw();
    }

    fn draw(&mut self) {
        self.field.links_into(&mut self.links);
        let ctx = &self.ctx;
        let points = self.field.points();

        ctx.set_fill_style_str(&self.background);
        ctx.fill_rect(0.0, 0.0, self.field.width(), self.field.height());

        ctx.set_line_width(1.0);
        for (band, style) in self.bands.iter().enumerate() {
            ctx.set_stroke_style_str(style);
            ctx.begin_path();
            for link in self.links.iter().filter(|l| l.bucket(LINK_BUCKETS) == band) {
                let (a, b) = (points[link.from], points[link.to]);
                ctx.move_to(a.x, a.y);
                ctx.line_to(b.x, b.y);
            }
            ctx.stroke();
        }

        if self.field.config().show_dots {
            let half = DOT_SIZE / 2.0;
            ctx.set_fill_style_str(&self.dot);
            for p in points {
                ctx.fill_rect(p.x - half, p.y - half, DOT_SIZE, DOT_SIZE);
            }
        }
    }
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// A live canvas background.
///
/// Everything the handle acquired is released when it is dropped, including
/// when creation bails out half way.
pub struct CanvasNetHandle {
    window: Window,
    container: HtmlElement,
    canvas: HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
    frame_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
    listeners: Vec<Listener>,
}

impl CanvasNetHandle {
    fn listen(
        &mut self,
        target: EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), EffectError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|e| EffectError::Listener(format!("{kind}: {e:?}")))?;
        self.listeners.push(Listener {
            target,
            kind,
            callback,
        });
        Ok(())
    }

    fn attach_inputs(&mut self, config: &EffectConfig) -> Result<(), EffectError> {
        let window: EventTarget = self.window.clone().into();

        {
            let scene = Rc::clone(&self.scene);
            let win = self.window.clone();
            let container = self.container.clone();
            let canvas = self.canvas.clone();
            self.listen(window.clone(), "resize", move |_| {
                scene.borrow_mut().fit(&win, &container, &canvas);
            })?;
        }

        if config.mouse_controls {
            let scene = Rc::clone(&self.scene);
            let container = self.container.clone();
            self.listen(window.clone(), "mousemove", move |ev| {
                let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let rect = container.get_bounding_client_rect();
                let x = ev.client_x() as f64 - rect.left();
                let y = ev.client_y() as f64 - rect.top();
                let mut scene = scene.borrow_mut();
                if x < 0.0 || y < 0.0 || x > rect.width() || y > rect.height() {
                    scene.field.clear_pointer();
                } else {
                    scene.field.set_pointer(x, y, InputSource::Mouse);
                }
            })?;
        }

        if config.touch_controls {
            let scene = Rc::clone(&self.scene);
            let container = self.container.clone();
            self.listen(window.clone(), "touchmove", move |ev| {
                let Some(touch) = ev
                    .dyn_ref::<TouchEvent>()
                    .and_then(|ev| ev.touches().get(0))
                else {
                    return;
                };
                let rect = container.get_bounding_client_rect();
                let x = touch.client_x() as f64 - rect.left();
                let y = touch.client_y() as f64 - rect.top();
                scene
                    .borrow_mut()
                    .field
                    .set_pointer(x, y, InputSource::Touch);
            })?;

            let scene = Rc::clone(&self.scene);
            self.listen(window.clone(), "touchend", move |_| {
                scene.borrow_mut().field.clear_pointer();
            })?;
        }

        if config.gyro_controls {
            let scene = Rc::clone(&self.scene);
            self.listen(window, "deviceorientation", move |ev| {
                let Some(ev) = ev.dyn_ref::<DeviceOrientationEvent>() else {
                    return;
                };
                if let (Some(beta), Some(gamma)) = (ev.beta(), ev.gamma()) {
                    scene.borrow_mut().field.set_tilt(beta, gamma);
                }
            })?;
        }

        Ok(())
    }

    fn start(&mut self) -> Result<(), EffectError> {
        let scene = Rc::clone(&self.scene);
        let frame_id = Rc::clone(&self.frame_id);
        let tick = Rc::clone(&self.tick);
        let window = self.window.clone();

        *self.tick.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |ts: f64| {
            scene.borrow_mut().frame(ts);
            let next = tick
                .borrow()
                .as_ref()
                .and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
            frame_id.set(next);
        }));

        let id = self
            .tick
            .borrow()
            .as_ref()
            .map(|cb| self.window.request_animation_frame(cb.as_ref().unchecked_ref()))
            .transpose()
            .map_err(|e| EffectError::Scheduler(format!("{e:?}")))?;
        self.frame_id.set(id);
        Ok(())
    }
}

impl Drop for CanvasNetHandle {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Dropping the closure also breaks its reference cycle through `tick`
        self.tick.borrow_mut().take();
        self.listeners.clear();
        self.canvas.remove();
    }
}

impl BackgroundEffect for CanvasNet {
    type Container = HtmlElement;
    type Handle = CanvasNetHandle;

    fn create(
        &self,
        container: &HtmlElement,
        config: &EffectConfig,
    ) -> Result<CanvasNetHandle, EffectError> {
        if !container.is_connected() {
            return Err(EffectError::ContainerUnavailable);
        }
        let window = web_sys::window().ok_or(EffectError::ContextUnavailable)?;
        let document = window.document().ok_or(EffectError::ContextUnavailable)?;

        let canvas = document
            .create_element("canvas")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or(EffectError::ContextUnavailable)?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(EffectError::ContextUnavailable)?;

        let style = canvas.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("inset", "0");
        let _ = style.set_property("width", "100%");
        let _ = style.set_property("height", "100%");
        let _ = style.set_property("pointer-events", "none");
        let _ = canvas.set_attribute("aria-hidden", "true");

        container
            .append_child(&canvas)
            .map_err(|_| EffectError::ContainerUnavailable)?;

        let scene = Scene::new(config, ctx);
        let mut handle = CanvasNetHandle {
            window,
            container: container.clone(),
            canvas,
            scene: Rc::new(RefCell::new(scene)),
            frame_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
            listeners: Vec::new(),
        };
        handle
            .scene
            .borrow_mut()
            .fit(&handle.window, &handle.container, &handle.canvas);
        handle.attach_inputs(config)?;
        handle.start()?;

        log::debug!(
            "background effect started with {} points",
            handle.scene.borrow().field.points().len()
        );
        Ok(handle)
    }

    fn destroy(&self, handle: CanvasNetHandle) {
        drop(handle);
        log::debug!("background effect released");
    }
}
