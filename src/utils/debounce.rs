use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Trailing-edge debouncer for bursty browser events. Every `call`
/// cancels the pending timer and reschedules, so only the last event
/// inside the window runs the wrapped callback.
pub struct Debounce {
    delay_ms: u32,
    callback: Rc<dyn Fn()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debounce {
    pub fn new(delay_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            delay_ms,
            callback: Rc::new(callback),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self) {
        let callback = self.callback.clone();
        let pending = self.pending.clone();
        let timeout = Timeout::new(self.delay_ms, move || {
            pending.borrow_mut().take();
            callback();
        });
        if let Some(previous) = self.pending.borrow_mut().replace(timeout) {
            previous.cancel();
        }
    }
}
