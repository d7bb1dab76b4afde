use std::cell::RefCell;

/// Surface used to tell the user their input was rejected
pub trait Alert {
    fn alert(&self, message: &str);
}

/// Reports alerts through `tracing` for hosts without a dialog
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlert;

impl Alert for LogAlert {
    fn alert(&self, message: &str) {
        tracing::warn!(alert = message, "user alert");
    }
}

/// Keeps every alert message, for hosts that display them later
#[derive(Debug, Default)]
pub struct RecordedAlerts {
    messages: RefCell<Vec<String>>,
}

impl RecordedAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.borrow_mut())
    }
}

impl Alert for RecordedAlerts {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl<A: Alert + ?Sized> Alert for std::rc::Rc<A> {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}
