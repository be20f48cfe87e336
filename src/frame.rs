use crate::core::{ContentCatalog, LifecycleEvent, Locale, Scene};
use crate::dom;
use crate::input::CommandQueue;
use crate::modal::ModalView;
use crate::render;
use crate::ui::{self, FragmentsView, MenuView, NavView};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Scene,
    pub commands: CommandQueue,

    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub menu: Option<MenuView>,
    pub nav: Option<NavView>,
    pub modal: Option<ModalView>,
    pub fragments: Option<FragmentsView>,

    pub catalog: Rc<ContentCatalog>,
    pub locale: Rc<Cell<Locale>>,
    pub shown_locale: Locale,

    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
    pub menu_layout: Option<(f32, f32)>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if self.locale.get() != self.shown_locale {
            self.apply_locale(self.locale.get());
        }
        self.sync_menu_layout();

        // Commands apply in arrival order, before the frame steps.
        let pending: Vec<_> = self.commands.borrow_mut().drain(..).collect();
        for command in pending {
            self.scene.apply(command);
        }

        let out = self.scene.frame(dt_sec);
        for ev in &out.events {
            log_event(ev);
        }

        if let Some(menu) = &self.menu {
            menu.apply(out.menu_position, &out.menu_items);
        }
        if let Some(nav) = &self.nav {
            nav.mark_active(out.lifecycle.active_section);
        }
        if let (Some(fragments), Some((w, h))) = (&self.fragments, dom::canvas_css_size(&self.canvas)) {
            fragments.apply(&out.fragments, w, h);
        }
        if let Some(modal) = &mut self.modal {
            match self.catalog.get(self.shown_locale) {
                Ok(portfolio) => modal.sync(&out.lifecycle, portfolio),
                Err(e) => log::warn!("[frame] {}", e),
            }
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&out) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn apply_locale(&mut self, locale: Locale) {
        let portfolio = match self.catalog.get(locale) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[frame] {}", e);
                return;
            }
        };
        dom::set_document_lang(&self.document, locale.code());
        ui::apply_hero(&self.document, portfolio);
        if let Some(menu) = &self.menu {
            menu.relabel(&portfolio.sections);
        }
        if let Some(nav) = &self.nav {
            nav.relabel(&portfolio.sections);
        }
        if let Some(modal) = &mut self.modal {
            modal.invalidate();
        }
        self.shown_locale = locale;
        log::info!("[frame] locale={}", locale.code());
    }

    fn sync_menu_layout(&mut self) {
        let Some(layout) = self.menu.as_ref().and_then(|m| m.measure()) else {
            return;
        };
        if self.menu_layout != Some(layout) {
            self.scene.menu_mut().set_layout(layout.0, layout.1);
            self.menu_layout = Some(layout);
        }
    }
}

fn log_event(ev: &LifecycleEvent) {
    match ev {
        LifecycleEvent::CameraReady(s) | LifecycleEvent::Revealed(s) => {
            log::debug!("[frame] {:?} section={}", ev, s)
        }
        _ => log::info!("[frame] {:?}", ev),
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type TickHandle = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickHandle) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: TickHandle = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
