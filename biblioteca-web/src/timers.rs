use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Element;

/// A scheduled `setTimeout` callback, cancelled when the handle is dropped
/// before firing. Unlike `Closure::forget`, nothing leaks: the closure is
/// freed when the handle goes away, whether the timer fired or not.
pub struct Timeout {
    id: i32,
    fired: Rc<Cell<bool>>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Run `callback` once after `delay_ms` milliseconds.
    ///
    /// # Errors
    /// Returns an error when no window is available or the browser rejects
    /// the timer.
    pub fn schedule(delay_ms: i32, callback: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let Some(win) = web_sys::window() else {
            return Err(JsValue::from_str("window unavailable"));
        };

        let fired = Rc::new(Cell::new(false));
        let fired_flag = Rc::clone(&fired);
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            fired_flag.set(true);
            if let Some(cb) = callback.take() {
                cb();
            }
        }) as Box<dyn FnMut()>);

        let id = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        )?;

        Ok(Self {
            id,
            fired,
            _callback: closure,
        })
    }

    #[must_use]
    pub fn fired(&self) -> bool {
        self.fired.get()
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if !self.fired.get()
            && let Some(win) = web_sys::window()
        {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// A DOM node with a bounded lifetime: removed from the document when its
/// timer expires, or immediately if the handle is dropped early (e.g. a
/// test tearing a component down). Owners prune expired handles via
/// [`TransientNode::expired`], so nodes never accumulate.
pub struct TransientNode {
    element: Element,
    timeout: Timeout,
}

impl TransientNode {
    /// Schedule `element` for removal after `ttl_ms` milliseconds.
    ///
    /// # Errors
    /// Returns an error when the removal timer cannot be scheduled; the
    /// caller should not leave the node attached in that case.
    pub fn remove_after(element: Element, ttl_ms: i32) -> Result<Self, JsValue> {
        let doomed = element.clone();
        let timeout = Timeout::schedule(ttl_ms, move || doomed.remove())?;
        Ok(Self { element, timeout })
    }

    #[must_use]
    pub fn expired(&self) -> bool {
        self.timeout.fired()
    }
}

impl Drop for TransientNode {
    fn drop(&mut self) {
        if !self.timeout.fired() {
            self.element.remove();
        }
    }
}
