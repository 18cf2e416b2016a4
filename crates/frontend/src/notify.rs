//! Global toast notification sink
//!
//! Services and the response interceptor raise notifications without holding
//! any UI context; the mounted `ToastProvider` registers the sink that turns
//! them into visible toasts. Before a sink is registered, messages fall back
//! to the console.

use std::cell::RefCell;
use std::rc::Rc;

/// Visual flavor of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

thread_local! {
    static TOAST_SINK: RefCell<Option<Rc<dyn Fn(ToastKind, String)>>> = RefCell::new(None);
}

/// Register the sink that renders toasts
pub fn set_toast_sink(sink: Rc<dyn Fn(ToastKind, String)>) {
    TOAST_SINK.with(|cell| {
        *cell.borrow_mut() = Some(sink);
    });
}

/// Clear the toast sink
pub fn clear_toast_sink() {
    TOAST_SINK.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Raise a success toast
pub fn success(message: impl Into<String>) {
    emit(ToastKind::Success, message.into());
}

/// Raise an error toast
pub fn error(message: impl Into<String>) {
    emit(ToastKind::Error, message.into());
}

fn emit(kind: ToastKind, message: String) {
    TOAST_SINK.with(|cell| match cell.borrow().as_ref() {
        Some(sink) => sink(kind, message),
        None => gloo::console::warn!("toast dropped (no sink):", message),
    });
}
