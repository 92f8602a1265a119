//! Capabilities the controller needs from its host environment.
//!
//! In the browser these are backed by `document` listeners, `setInterval` and
//! JS callbacks (see `crate::web`). Tests substitute synthetic versions.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::task::LocalSpawn;

use crate::error::Result;
use crate::types::{PointerEvent, PointerEventKind, SchemaMutations};

/// Callback invoked for a pointer notification
pub type PointerHandler = Rc<dyn Fn(&PointerEvent)>;

/// Registration token returned by [`EventSource::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Token for a running repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// Source of pointer move / end / cancel notifications.
///
/// Implementations must tolerate `unsubscribe` being called from inside a
/// handler that is currently being dispatched.
pub trait EventSource {
    fn subscribe(&self, kind: PointerEventKind, handler: PointerHandler) -> ListenerId;
    fn unsubscribe(&self, id: ListenerId);
}

/// Repeating timer facility.
pub trait IntervalTimer {
    /// Schedule `callback` every `period_ms` milliseconds.
    ///
    /// Returns `None` if the host refused to schedule the timer.
    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Option<TimerHandle>;
    fn clear_interval(&self, handle: TimerHandle);
}

/// Destination for pending column-schema changes.
pub trait SchemaSink {
    /// Queue a batch of pending mutations.
    fn add_schema_mutations(&self, mutations: SchemaMutations);

    /// Flush and persist everything queued so far.
    fn save_schema_mutations(&self) -> LocalBoxFuture<'static, Result<()>>;
}

/// Bundle of host capabilities handed to the controller.
#[derive(Clone)]
pub struct ReorderHost {
    pub events: Rc<dyn EventSource>,
    pub timer: Rc<dyn IntervalTimer>,
    pub sink: Rc<dyn SchemaSink>,
    /// Runs commits started from listener callbacks, where nobody can await them
    pub spawner: Rc<dyn LocalSpawn>,
}
