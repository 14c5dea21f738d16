use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// requestAnimationFrame driver. The step closure receives the frame timestamp
/// in seconds and returns `false` to stop. Dropping the handle cancels it.
pub struct FrameLoop {
    raf_id: Rc<RefCell<Option<i32>>>,
    closure_cell: Rc<RefCell<Option<FrameClosure>>>,
}

impl FrameLoop {
    pub fn start<F>(mut step: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let raf_id: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
        let closure_cell: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
        let Some(window) = web_sys::window() else {
            log::warn!("no window; animation loop not started");
            return Self { raf_id, closure_cell };
        };

        {
            let raf_id_loop = raf_id.clone();
            let cell_loop = closure_cell.clone();
            let window_loop = window.clone();
            *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
                if !step(now_ms / 1000.0) {
                    *raf_id_loop.borrow_mut() = None;
                    return;
                }
                if let Some(cb) = cell_loop.borrow().as_ref() {
                    match window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(id) => *raf_id_loop.borrow_mut() = Some(id),
                        Err(e) => {
                            log::warn!("requestAnimationFrame failed: {:?}", e);
                            *raf_id_loop.borrow_mut() = None;
                        }
                    }
                }
            }) as Box<dyn FnMut(f64)>));
        }

        if let Some(cb) = closure_cell.borrow().as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => *raf_id.borrow_mut() = Some(id),
                Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
            }
        }
        Self { raf_id, closure_cell }
    }

    /// False once the step closure has asked to stop or scheduling failed.
    pub fn is_running(&self) -> bool {
        self.raf_id.borrow().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's self-reference through the cell.
        self.closure_cell.borrow_mut().take();
    }
}
