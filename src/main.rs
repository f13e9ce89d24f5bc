//! Preloader entry point
//!
//! wasm: waits for the document to be parsed, resolves the splash elements
//! once, and wires real browser timers to the controller. Native: headless
//! demo that fast-forwards the whole timeline with a simulated clock.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_splash {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use preloader::consts::*;
    use preloader::render::DomTarget;
    use preloader::storage::BrowserSessionStore;
    use preloader::{InitOutcome, SplashController, TimerOp};

    type Controller = SplashController<BrowserSessionStore, DomTarget>;

    /// Controller plus the live ticker handle
    struct Host {
        controller: Controller,
        ticker: Option<i32>,
        started_at: f64,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        // The module may load before or after DOMContentLoaded; the splash
        // only needs the structural content parsed, not full resource load
        if document.ready_state() == web_sys::DocumentReadyState::Loading {
            let closure = Closure::once(move |_event: web_sys::Event| {
                start();
            });
            let _ = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        } else {
            start();
        }
    }

    fn start() {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let Some(target) = DomTarget::from_document(&document) else {
            // Broken markup contract - never leave the page blocked behind
            // a splash that cannot run
            log::error!("splash elements missing, revealing content immediately");
            if let Some(body) = document.body() {
                let _ = body.class_list().add_1("preloader-done");
            }
            return;
        };

        let mut controller = Controller::new(BrowserSessionStore, target);
        match controller.initialize() {
            InitOutcome::Started => {}
            InitOutcome::Skipped | InitOutcome::AlreadyRunning => return,
        }

        let host = Rc::new(RefCell::new(Host {
            controller,
            ticker: None,
            started_at: js_sys::Date::now(),
        }));

        start_ticker(host);
    }

    fn start_ticker(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().expect("no window");

        let cb_host = host.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let op = cb_host.borrow_mut().controller.on_tick();
            apply_timer_op(&cb_host, op);
        });

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS as i32,
        ) {
            Ok(handle) => host.borrow_mut().ticker = Some(handle),
            Err(_) => log::error!("failed to start splash ticker"),
        }
        closure.forget();
    }

    fn apply_timer_op(host: &Rc<RefCell<Host>>, op: TimerOp) {
        match op {
            TimerOp::None => {}
            TimerOp::CancelTickerThenDelay { delay_ms } => {
                if let Some(handle) = host.borrow_mut().ticker.take() {
                    if let Some(window) = web_sys::window() {
                        window.clear_interval_with_handle(handle);
                    }
                }
                schedule_timeout(host.clone(), delay_ms);
            }
            TimerOp::Delay { delay_ms } => schedule_timeout(host.clone(), delay_ms),
            TimerOp::Done => {
                let elapsed = js_sys::Date::now() - host.borrow().started_at;
                log::info!("splash finished after {:.0} ms", elapsed);
            }
        }
    }

    fn schedule_timeout(host: Rc<RefCell<Host>>, delay_ms: u32) {
        let window = web_sys::window().expect("no window");

        let cb_host = host.clone();
        let closure = Closure::once(move || {
            let op = cb_host.borrow_mut().controller.on_timeout();
            apply_timer_op(&cb_host, op);
        });

        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .is_err()
        {
            log::error!("failed to schedule splash delay");
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_splash::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use preloader::consts::*;
    use preloader::render::RenderTarget;
    use preloader::storage::MemoryStore;
    use preloader::{InitOutcome, SplashController, TimerOp};

    env_logger::init();
    log::info!("preloader (native) - headless timeline demo");

    /// Prints display updates instead of touching a DOM
    struct ConsoleTarget;

    impl RenderTarget for ConsoleTarget {
        fn set_fill(&mut self, percent: f32) {
            log::debug!("fill width {:.1}%", percent);
        }
        fn set_label(&mut self, percent: u32) {
            if percent % 10 == 0 {
                println!("loading... {}%", percent);
            }
        }
        fn begin_fade(&mut self) {
            println!("fade-out started");
        }
        fn remove_splash(&mut self) {
            println!("splash removed from layout");
        }
        fn reveal_content(&mut self) {
            println!("content visible");
        }
    }

    let mut controller = SplashController::new(MemoryStore::new(), ConsoleTarget);
    match controller.initialize() {
        InitOutcome::Started => {}
        other => {
            log::error!("unexpected init outcome: {:?}", other);
            return;
        }
    }

    // Fast-forward the whole timeline instead of sleeping through it
    let mut elapsed_ms = 0u32;
    let pause_ms = loop {
        elapsed_ms += TICK_INTERVAL_MS;
        if let TimerOp::CancelTickerThenDelay { delay_ms } = controller.on_tick() {
            break delay_ms;
        }
    };
    elapsed_ms += pause_ms;

    let fade_ms = match controller.on_timeout() {
        TimerOp::Delay { delay_ms } => delay_ms,
        other => {
            log::error!("unexpected timer op: {:?}", other);
            return;
        }
    };
    elapsed_ms += fade_ms;

    match controller.on_timeout() {
        TimerOp::Done => println!("simulated timeline: {} ms", elapsed_ms),
        other => log::error!("unexpected timer op: {:?}", other),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
