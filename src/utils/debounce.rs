use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Trailing-edge debouncer. Each `call` replaces the pending timeout, and
/// dropping a `Timeout` clears it, so only the last call inside the window runs.
#[derive(Clone)]
pub struct Debouncer {
    millis: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(millis: u32) -> Self {
        Self {
            millis,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(self.millis, callback);
        // Previous timeout (if any) is dropped here and never fires
        self.pending.borrow_mut().replace(timeout);
    }

    pub fn cancel(&self) {
        if let Some(timeout) = self.pending.borrow_mut().take() {
            timeout.cancel();
        }
    }
}
