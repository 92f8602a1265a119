//! Synthetic host capabilities for driving the controller without a browser.
//!
//! - `SyntheticEvents`: dispatches pointer notifications to subscribers
//! - `ManualTimer`: interval timer advanced tick by tick
//! - `RecordingSink`: records mutation batches and save calls
//! - `Harness`: a controller wired to all of the above plus a `LocalPool`
#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::LocalPool;
use futures::future::{self, LocalBoxFuture};
use grid_reorder::reorder::{
    EventSource, IntervalTimer, ListenerId, PointerHandler, ReorderController, ReorderHost,
    SchemaSink, TimerHandle,
};
use grid_reorder::{
    Column, GridLayout, GridState, PointerEvent, PointerEventKind, ReorderConfig, ReorderError,
    SchemaMutations, Viewport,
};

// ================================================================
// Event source
// ================================================================

#[derive(Default)]
pub struct SyntheticEvents {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(ListenerId, PointerEventKind, PointerHandler)>>,
}

impl SyntheticEvents {
    /// Deliver an event to every subscriber of `kind`.
    ///
    /// Handlers are snapshotted first, so they may unsubscribe while running.
    pub fn dispatch(&self, kind: PointerEventKind, event: &PointerEvent) {
        let handlers: Vec<PointerHandler> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, h)| Rc::clone(h))
            .collect();
        for handler in handlers {
            handler(event);
        }
    }

    pub fn mouse_move(&self, x: f64) {
        self.dispatch(PointerEventKind::Move, &PointerEvent::mouse(x, 10.0));
    }

    pub fn mouse_up(&self) {
        self.dispatch(PointerEventKind::End, &PointerEvent::mouse(0.0, 0.0));
    }

    pub fn touch_cancel(&self) {
        self.dispatch(PointerEventKind::Cancel, &PointerEvent::Touch { touches: vec![] });
    }

    pub fn listener_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn count_of(&self, kind: PointerEventKind) -> usize {
        self.handlers
            .borrow()
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .count()
    }
}

impl EventSource for SyntheticEvents {
    fn subscribe(&self, kind: PointerEventKind, handler: PointerHandler) -> ListenerId {
        let id = ListenerId(self.next_id.get() + 1);
        self.next_id.set(id.0);
        self.handlers.borrow_mut().push((id, kind, handler));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.handlers.borrow_mut().retain(|(i, _, _)| *i != id);
    }
}

// ================================================================
// Timer
// ================================================================

type TimerCallback = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Default)]
pub struct ManualTimer {
    next_id: Cell<i32>,
    timers: RefCell<Vec<(TimerHandle, u32, TimerCallback)>>,
    scheduled: Cell<usize>,
}

impl ManualTimer {
    /// Fire every active timer once.
    pub fn tick(&self) {
        let callbacks: Vec<TimerCallback> = self
            .timers
            .borrow()
            .iter()
            .map(|(_, _, cb)| Rc::clone(cb))
            .collect();
        for cb in callbacks {
            let mut callback = cb.borrow_mut();
            (*callback)();
        }
    }

    pub fn tick_n(&self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    pub fn active_count(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Total number of timers ever scheduled
    pub fn scheduled_count(&self) -> usize {
        self.scheduled.get()
    }

    pub fn periods(&self) -> Vec<u32> {
        self.timers.borrow().iter().map(|(_, p, _)| *p).collect()
    }
}

impl IntervalTimer for ManualTimer {
    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Option<TimerHandle> {
        let handle = TimerHandle(self.next_id.get() + 1);
        self.next_id.set(handle.0);
        self.scheduled.set(self.scheduled.get() + 1);
        self.timers
            .borrow_mut()
            .push((handle, period_ms, Rc::new(RefCell::new(callback))));
        Some(handle)
    }

    fn clear_interval(&self, handle: TimerHandle) {
        self.timers.borrow_mut().retain(|(h, _, _)| *h != handle);
    }
}

// ================================================================
// Schema sink
// ================================================================

#[derive(Default)]
pub struct RecordingSink {
    pub batches: RefCell<Vec<SchemaMutations>>,
    pub saves: Cell<usize>,
    pub fail_with: RefCell<Option<String>>,
}

impl RecordingSink {
    pub fn fail_saves(&self, message: &str) {
        *self.fail_with.borrow_mut() = Some(message.to_string());
    }

    pub fn batch_count(&self) -> usize {
        self.batches.borrow().len()
    }

    pub fn last_batch(&self) -> Option<SchemaMutations> {
        self.batches.borrow().last().cloned()
    }
}

impl SchemaSink for RecordingSink {
    fn add_schema_mutations(&self, mutations: SchemaMutations) {
        self.batches.borrow_mut().push(mutations);
    }

    fn save_schema_mutations(&self) -> LocalBoxFuture<'static, grid_reorder::Result<()>> {
        self.saves.set(self.saves.get() + 1);
        let result = match self.fail_with.borrow().clone() {
            Some(message) => Err(ReorderError::Persistence(message)),
            None => Ok(()),
        };
        Box::pin(future::ready(result))
    }
}

// ================================================================
// Harness
// ================================================================

pub struct Harness {
    pub controller: ReorderController,
    pub grid: Rc<RefCell<GridState>>,
    pub events: Rc<SyntheticEvents>,
    pub timer: Rc<ManualTimer>,
    pub sink: Rc<RecordingSink>,
    pub pool: LocalPool,
}

impl Harness {
    pub fn new(layout: GridLayout, viewport: Viewport) -> Self {
        Self::with_config(layout, viewport, ReorderConfig::default())
    }

    pub fn with_config(layout: GridLayout, viewport: Viewport, config: ReorderConfig) -> Self {
        let grid = Rc::new(RefCell::new(GridState::new(layout, viewport)));
        let events = Rc::new(SyntheticEvents::default());
        let timer = Rc::new(ManualTimer::default());
        let sink = Rc::new(RecordingSink::default());
        let pool = LocalPool::new();
        let host = ReorderHost {
            events: Rc::clone(&events) as Rc<dyn EventSource>,
            timer: Rc::clone(&timer) as Rc<dyn IntervalTimer>,
            sink: Rc::clone(&sink) as Rc<dyn SchemaSink>,
            spawner: Rc::new(pool.spawner()),
        };
        let controller = ReorderController::new(Rc::clone(&grid), host, config);
        Self {
            controller,
            grid,
            events,
            timer,
            sink,
            pool,
        }
    }

    /// Run commits spawned by listener callbacks.
    pub fn run_pending(&mut self) {
        self.pool.run_until_stalled();
    }

    pub fn order(&self) -> Vec<String> {
        self.grid
            .borrow()
            .layout
            .columns()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }

    pub fn scroll_left(&self) -> f64 {
        self.grid.borrow().viewport.scroll_left
    }

    pub fn target(&self) -> Option<String> {
        self.controller.session().target_column
    }
}

/// Visible columns of equal width, in order
pub fn uniform_layout(names: &[&str], width: f64) -> GridLayout {
    GridLayout::new(names.iter().map(|n| Column::new(*n, width)).collect()).unwrap()
}

/// `count` columns named c0..cN of equal width
pub fn wide_layout(count: usize, width: f64) -> GridLayout {
    GridLayout::new(
        (0..count)
            .map(|i| Column::new(format!("c{i}"), width))
            .collect(),
    )
    .unwrap()
}
