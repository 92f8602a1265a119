//! DOM-backed host capabilities.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};
use js_sys::{Function, Promise};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, MouseEvent, TouchEvent};

use crate::error::{ReorderError, Result};
use crate::reorder::{EventSource, IntervalTimer, ListenerId, PointerHandler, SchemaSink, TimerHandle};
use crate::types::{Point, PointerEvent, PointerEventKind, SchemaMutations};

type EventClosure = Closure<dyn FnMut(Event)>;

/// DOM event types backing each pointer notification kind
fn dom_event_types(kind: PointerEventKind) -> &'static [&'static str] {
    match kind {
        PointerEventKind::Move => &["mousemove", "touchmove"],
        PointerEventKind::End => &["mouseup", "touchend"],
        PointerEventKind::Cancel => &["touchcancel"],
    }
}

/// Convert a DOM mouse or touch event into a `PointerEvent`.
pub(crate) fn to_pointer_event(event: &Event) -> Option<PointerEvent> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(PointerEvent::mouse(
            f64::from(mouse.client_x()),
            f64::from(mouse.client_y()),
        ));
    }
    let touch = event.dyn_ref::<TouchEvent>()?;
    let list = touch.touches();
    let touches = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Point {
            x: f64::from(t.client_x()),
            y: f64::from(t.client_y()),
        })
        .collect();
    Some(PointerEvent::Touch { touches })
}

/// Listeners registered on `document`, so drags keep tracking outside the grid.
#[derive(Default)]
pub(crate) struct DomEventSource {
    next_id: Cell<u64>,
    registrations: RefCell<HashMap<u64, Vec<(&'static str, EventClosure)>>>,
    /// Detached closures. A closure may be detached from inside its own
    /// invocation, so dropping is deferred to the next subscribe.
    retired: RefCell<Vec<EventClosure>>,
}

impl EventSource for DomEventSource {
    fn subscribe(&self, kind: PointerEventKind, handler: PointerHandler) -> ListenerId {
        self.retired.borrow_mut().clear();
        let id = self.next_id.get() + 1;
        self.next_id.set(id);

        let document = web_sys::window().and_then(|w| w.document());
        let mut closures = Vec::new();
        for &event_type in dom_event_types(kind) {
            let handler = Rc::clone(&handler);
            let closure = Closure::wrap(Box::new(move |event: Event| {
                if let Some(pointer) = to_pointer_event(&event) {
                    handler(&pointer);
                }
            }) as Box<dyn FnMut(Event)>);
            if let Some(document) = document.as_ref() {
                document
                    .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
                    .ok();
            }
            closures.push((event_type, closure));
        }
        self.registrations.borrow_mut().insert(id, closures);
        ListenerId(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        let Some(closures) = self.registrations.borrow_mut().remove(&id.0) else {
            return;
        };
        let document = web_sys::window().and_then(|w| w.document());
        let mut retired = self.retired.borrow_mut();
        for (event_type, closure) in closures {
            if let Some(document) = document.as_ref() {
                document
                    .remove_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
                    .ok();
            }
            retired.push(closure);
        }
    }
}

/// `window.setInterval` timer.
#[derive(Default)]
pub(crate) struct WindowTimer {
    closures: RefCell<HashMap<i32, Closure<dyn FnMut()>>>,
    retired: RefCell<Vec<Closure<dyn FnMut()>>>,
}

impl IntervalTimer for WindowTimer {
    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Option<TimerHandle> {
        self.retired.borrow_mut().clear();
        let window = web_sys::window()?;
        let closure = Closure::wrap(callback);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                timeout,
            )
            .ok()?;
        self.closures.borrow_mut().insert(id, closure);
        Some(TimerHandle(id))
    }

    fn clear_interval(&self, handle: TimerHandle) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(handle.0);
        }
        if let Some(closure) = self.closures.borrow_mut().remove(&handle.0) {
            self.retired.borrow_mut().push(closure);
        }
    }
}

/// Runs futures on the browser microtask queue.
pub(crate) struct WebSpawner;

impl LocalSpawn for WebSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> std::result::Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}

/// Schema sink backed by two JS callbacks.
///
/// `add` receives a plain object `{name: {order}}`; `save` may return a
/// Promise, whose rejection is reported as a persistence error.
pub(crate) struct JsSchemaSink {
    add: Function,
    save: Function,
}

impl JsSchemaSink {
    pub(crate) fn new(add: Function, save: Function) -> Self {
        Self { add, save }
    }
}

fn persistence_error(e: &JsValue) -> ReorderError {
    ReorderError::Persistence(e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

impl SchemaSink for JsSchemaSink {
    fn add_schema_mutations(&self, mutations: SchemaMutations) {
        let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
        match mutations.serialize(&serializer) {
            Ok(value) => {
                if let Err(e) = self.add.call1(&JsValue::NULL, &value) {
                    tracing::warn!(error = ?e, "addSchemaMutations callback threw");
                }
            }
            Err(e) => tracing::warn!(error = %e, "failed to serialize schema mutations"),
        }
    }

    fn save_schema_mutations(&self) -> LocalBoxFuture<'static, Result<()>> {
        let result = self.save.call0(&JsValue::NULL);
        Box::pin(async move {
            let value = result.map_err(|e| persistence_error(&e))?;
            JsFuture::from(Promise::resolve(&value))
                .await
                .map(|_| ())
                .map_err(|e| persistence_error(&e))
        })
    }
}
