//! Drag-to-reorder interaction controller.
//!
//! Wires pointer notifications, the auto-scroll timer and the commit engine
//! around a single [`ReorderSession`]. Everything runs on one thread: event
//! and timer callbacks hold a `Weak` back-reference and never overlap.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use futures::future::{self, LocalBoxFuture};
use futures::task::LocalSpawnExt;

use super::auto_scroll::{edge_increment, AutoScrollDriver};
use super::commit::CommitEngine;
use super::host::{ListenerId, PointerHandler, ReorderHost};
use super::session::ReorderSession;
use crate::config::ReorderConfig;
use crate::error::{ReorderError, Result};
use crate::layout::{compute_breakpoints, GridState};
use crate::types::{PointerEvent, PointerEventKind};

/// Callback invoked after every session change, e.g. to redraw a drop indicator
pub type ChangeCallback = Rc<dyn Fn(&ReorderSession)>;

struct ControllerState {
    session: ReorderSession,
    auto_scroll: AutoScrollDriver,
    /// Listeners registered by the active drag
    listeners: Vec<ListenerId>,
    change_callback: Option<ChangeCallback>,
}

struct Inner {
    config: ReorderConfig,
    grid: Rc<RefCell<GridState>>,
    host: ReorderHost,
    commit: CommitEngine,
    state: RefCell<ControllerState>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        let state = self.state.get_mut();
        state.auto_scroll.stop(self.host.timer.as_ref());
        for id in state.listeners.drain(..) {
            self.host.events.unsubscribe(id);
        }
    }
}

/// Column reorder controller.
///
/// Cloning is cheap and yields a handle to the same controller.
#[derive(Clone)]
pub struct ReorderController {
    inner: Rc<Inner>,
}

impl ReorderController {
    pub fn new(grid: Rc<RefCell<GridState>>, host: ReorderHost, config: ReorderConfig) -> Self {
        let commit = CommitEngine::new(Rc::clone(&grid), Rc::clone(&host.sink));
        Self {
            inner: Rc::new(Inner {
                config,
                grid,
                host,
                commit,
                state: RefCell::new(ControllerState {
                    session: ReorderSession::default(),
                    auto_scroll: AutoScrollDriver::new(),
                    listeners: Vec::new(),
                    change_callback: None,
                }),
            }),
        }
    }

    /// Shared grid state this controller reads from and writes to
    pub fn grid(&self) -> Rc<RefCell<GridState>> {
        Rc::clone(&self.inner.grid)
    }

    /// Snapshot of the current drag session
    pub fn session(&self) -> ReorderSession {
        self.inner.state.borrow().session.clone()
    }

    pub fn is_reordering(&self) -> bool {
        self.inner.state.borrow().session.is_reordering()
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.inner.state.borrow().auto_scroll.is_running()
    }

    /// Register a callback invoked after each session change.
    pub fn set_change_callback(&self, callback: Option<ChangeCallback>) {
        self.inner.state.borrow_mut().change_callback = callback;
    }

    /// Begin dragging `column`, starting from the pointer position in `event`.
    ///
    /// A drag that is already in progress is abandoned without committing.
    ///
    /// # Errors
    /// Returns `UnknownColumn` if `column` is not visible. No state changes
    /// in that case.
    pub fn start_reordering(&self, column: &str, event: &PointerEvent) -> Result<()> {
        let inner = &self.inner;
        let (breakpoints, grid_left, width) = {
            let grid = inner.grid.borrow();
            let visible = grid.layout.visible_columns();
            if !visible.iter().any(|c| c.name == column) {
                return Err(ReorderError::UnknownColumn(column.to_string()));
            }
            let breakpoints = compute_breakpoints(&visible, grid.layout.sticky_column());
            if breakpoints.is_empty() {
                return Err(ReorderError::NoBreakpoints);
            }
            (breakpoints, grid.viewport.left, grid.viewport.width)
        };

        if self.is_reordering() {
            tracing::debug!(column, "replacing active reorder session");
            Self::release(inner);
        }

        let listeners = Self::register_listeners(inner);
        {
            let mut state = inner.state.borrow_mut();
            state.session = ReorderSession::begin(column, breakpoints, grid_left, width);
            state.listeners = listeners;
        }
        tracing::debug!(column, grid_left, width, "reorder started");

        // Resolve a candidate target before any further input arrives
        Self::handle_pointer_move(inner, event);
        Ok(())
    }

    /// Feed a pointer move into the active drag. Ignored when not dragging.
    pub fn pointer_move(&self, event: &PointerEvent) {
        Self::handle_pointer_move(&self.inner, event);
    }

    /// End the active drag and commit the new order if the target changed.
    ///
    /// The session is reset before the returned future is first polled, so a
    /// new drag may start while the commit is still in flight.
    pub fn stop_reordering(&self) -> LocalBoxFuture<'static, Result<()>> {
        Self::finish(&self.inner)
    }

    /// Move `source` to just after `target` (front for `None`) and persist.
    pub fn move_column(&self, source: &str, target: Option<&str>) -> LocalBoxFuture<'static, Result<()>> {
        self.inner.commit.move_column(source, target)
    }

    /// Move a column one visible place to the left and persist.
    pub fn move_column_left(&self, column: &str) -> LocalBoxFuture<'static, Result<()>> {
        self.inner.commit.move_column_left(column)
    }

    /// Move a column one visible place to the right and persist.
    pub fn move_column_right(&self, column: &str) -> LocalBoxFuture<'static, Result<()>> {
        self.inner.commit.move_column_right(column)
    }

    fn register_listeners(inner: &Rc<Inner>) -> Vec<ListenerId> {
        let events = &inner.host.events;
        let on_move: PointerHandler = {
            let weak = Rc::downgrade(inner);
            Rc::new(move |event: &PointerEvent| {
                if let Some(inner) = weak.upgrade() {
                    Self::handle_pointer_move(&inner, event);
                }
            })
        };
        let on_end = Self::end_handler(Rc::downgrade(inner));
        vec![
            events.subscribe(PointerEventKind::Move, on_move),
            events.subscribe(PointerEventKind::End, Rc::clone(&on_end)),
            events.subscribe(PointerEventKind::Cancel, on_end),
        ]
    }

    /// Release and cancel are handled identically.
    fn end_handler(weak: Weak<Inner>) -> PointerHandler {
        Rc::new(move |_event: &PointerEvent| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let commit = Self::finish(&inner);
            let spawned = inner.host.spawner.spawn_local(async move {
                if let Err(e) = commit.await {
                    tracing::warn!(error = %e, "column reorder commit failed");
                }
            });
            if let Err(e) = spawned {
                tracing::warn!(error = %e, "failed to spawn column reorder commit");
            }
        })
    }

    fn handle_pointer_move(inner: &Rc<Inner>, event: &PointerEvent) {
        let Some(point) = event.location() else {
            tracing::trace!("pointer event without a location");
            return;
        };
        let (scroll_left, viewport_width) = {
            let grid = inner.grid.borrow();
            (grid.viewport.scroll_left, grid.viewport.width)
        };

        let increment = {
            let mut state = inner.state.borrow_mut();
            let session = &mut state.session;
            if !session.is_reordering() {
                return;
            }
            session.latest_x = point.x;
            session.resolve_target(scroll_left);

            let increment = edge_increment(
                &inner.config,
                point.x,
                session.grid_left,
                session.width,
                viewport_width,
            );
            if let Some(increment) = increment {
                session.increment = increment;
            }
            increment
        };

        if increment.is_some() {
            Self::start_auto_scroll(inner);
        } else {
            inner
                .state
                .borrow_mut()
                .auto_scroll
                .stop(inner.host.timer.as_ref());
        }
        Self::notify(inner);
    }

    fn start_auto_scroll(inner: &Rc<Inner>) {
        let weak = Rc::downgrade(inner);
        let mut state = inner.state.borrow_mut();
        state.auto_scroll.start(
            inner.host.timer.as_ref(),
            inner.config.tick_interval_ms,
            move || {
                if let Some(inner) = weak.upgrade() {
                    Self::auto_scroll_tick(&inner);
                }
            },
        );
    }

    fn auto_scroll_tick(inner: &Rc<Inner>) {
        let increment = {
            let state = inner.state.borrow();
            if !state.session.is_reordering() {
                return;
            }
            state.session.increment
        };
        let scroll_left = {
            let mut grid = inner.grid.borrow_mut();
            grid.scroll_by(increment);
            grid.viewport.scroll_left
        };
        inner
            .state
            .borrow_mut()
            .session
            .resolve_target(scroll_left);
        Self::notify(inner);
    }

    /// Stop the timer and detach every listener of the active drag.
    fn release(inner: &Inner) {
        let mut state = inner.state.borrow_mut();
        state.auto_scroll.stop(inner.host.timer.as_ref());
        for id in state.listeners.drain(..) {
            inner.host.events.unsubscribe(id);
        }
    }

    fn finish(inner: &Rc<Inner>) -> LocalBoxFuture<'static, Result<()>> {
        Self::release(inner);
        let session = std::mem::take(&mut inner.state.borrow_mut().session);
        let Some(source) = session.source_column else {
            return Box::pin(future::ready(Ok(())));
        };
        Self::notify(inner);

        let target = session.target_column;
        tracing::debug!(source = %source, target = ?target, "reorder finished");
        if target.as_deref() == Some(source.as_str()) {
            return Box::pin(future::ready(Ok(())));
        }
        // The sticky column is not part of the order; dropping onto it means
        // "in front of everything else"
        let is_sticky = |name: &str| {
            inner
                .grid
                .borrow()
                .layout
                .sticky_column()
                .is_some_and(|c| c.name == name)
        };
        let target = target.filter(|name| !is_sticky(name.as_str()));
        inner.commit.move_column(&source, target.as_deref())
    }

    fn notify(inner: &Inner) {
        let (callback, snapshot) = {
            let state = inner.state.borrow();
            let Some(callback) = state.change_callback.clone() else {
                return;
            };
            (callback, state.session.clone())
        };
        callback(&snapshot);
    }
}
