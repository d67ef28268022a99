use crate::error::Error;
use crate::models::DetectionResult;
use std::sync::Mutex;

type ResultHandler = Box<dyn Fn(&DetectionResult) + Send + Sync>;
type ErrorHandler = Box<dyn Fn(&Error) + Send + Sync>;

/// Pub/sub surface used by the polling loop to deliver outcomes.
///
/// Two event kinds exist: `result` (analysis reached a terminal status) and
/// `error` (polling failed or timed out). Exactly one of the two fires per
/// polling invocation.
///
/// Handlers must be registered before polling starts; registering while a
/// poll is active is a caller error and is not guaranteed race-free.
#[derive(Default)]
pub struct EventEmitter {
    result_handlers: Mutex<Vec<ResultHandler>>,
    error_handlers: Mutex<Vec<ErrorHandler>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `result` events
    pub fn on_result<F>(&self, handler: F)
    where
        F: Fn(&DetectionResult) + Send + Sync + 'static,
    {
        self.result_handlers
            .lock()
            .expect("event registry poisoned")
            .push(Box::new(handler));
    }

    /// Register a handler for `error` events
    pub fn on_error<F>(&self, handler: F)
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.error_handlers
            .lock()
            .expect("event registry poisoned")
            .push(Box::new(handler));
    }

    /// Dispatch a `result` event to every registered handler, in
    /// registration order
    pub(crate) fn emit_result(&self, result: &DetectionResult) {
        let handlers = self
            .result_handlers
            .lock()
            .expect("event registry poisoned");
        for handler in handlers.iter() {
            handler(result);
        }
    }

    /// Dispatch an `error` event to every registered handler, in
    /// registration order
    pub(crate) fn emit_error(&self, error: &Error) {
        let handlers = self.error_handlers.lock().expect("event registry poisoned");
        for handler in handlers.iter() {
            handler(error);
        }
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter").finish_non_exhaustive()
    }
}
