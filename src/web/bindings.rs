//! `GridReorder`, the wasm-exported entry point.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use super::dom::{to_pointer_event, DomEventSource, JsSchemaSink, WebSpawner, WindowTimer};
use crate::config::ReorderConfig;
use crate::error::{ReorderError, Result};
use crate::layout::{GridLayout, GridState, Viewport};
use crate::reorder::{ReorderController, ReorderHost, ReorderSession};
use crate::types::Column;

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| ReorderError::Other(e.to_string()))
}

fn to_js<T: serde::Serialize>(value: &T) -> std::result::Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn into_promise(future: futures::future::LocalBoxFuture<'static, Result<()>>) -> Promise {
    future_to_promise(async move {
        future.await.map_err(JsValue::from)?;
        Ok(JsValue::UNDEFINED)
    })
}

/// Column reorder controller exported to JavaScript
#[wasm_bindgen]
pub struct GridReorder {
    controller: ReorderController,
}

#[wasm_bindgen]
impl GridReorder {
    /// Create a controller for a grid.
    ///
    /// `columns` is an array of `{name, width, order, visible?, primaryDisplay?}`
    /// sorted by `order` on load. `config` is an optional JSON string.
    #[wasm_bindgen(constructor)]
    pub fn new(
        columns: JsValue,
        grid_left: f64,
        grid_width: f64,
        add_schema_mutations: Function,
        save_schema_mutations: Function,
        config: Option<String>,
    ) -> std::result::Result<GridReorder, JsValue> {
        let config = match config {
            Some(json) => ReorderConfig::from_json(&json)?,
            None => ReorderConfig::default(),
        };
        let layout = GridLayout::from_persisted(from_js(columns)?)?;
        let grid = Rc::new(RefCell::new(GridState::new(
            layout,
            Viewport::new(grid_left, grid_width),
        )));
        let host = ReorderHost {
            events: Rc::new(DomEventSource::default()),
            timer: Rc::new(WindowTimer::default()),
            sink: Rc::new(JsSchemaSink::new(add_schema_mutations, save_schema_mutations)),
            spawner: Rc::new(WebSpawner),
        };
        Ok(GridReorder {
            controller: ReorderController::new(grid, host, config),
        })
    }

    /// Replace the column set, keeping the sticky column.
    #[wasm_bindgen(js_name = setColumns)]
    pub fn set_columns(&self, columns: JsValue) -> std::result::Result<(), JsValue> {
        let columns: Vec<Column> = from_js(columns)?;
        let grid = self.controller.grid();
        let mut grid = grid.borrow_mut();
        let mut layout = GridLayout::from_persisted(columns)?;
        if let Some(sticky) = grid.layout.sticky_column().cloned() {
            layout = layout.with_sticky(sticky)?;
        }
        grid.layout = layout;
        let GridState { layout, viewport } = &mut *grid;
        viewport.clamp_scroll(layout);
        Ok(())
    }

    /// Pin a column to the left edge, or unpin with `null`.
    #[wasm_bindgen(js_name = setStickyColumn)]
    pub fn set_sticky_column(&self, column: JsValue) -> std::result::Result<(), JsValue> {
        let sticky: Option<Column> = from_js(column)?;
        let grid = self.controller.grid();
        let mut grid = grid.borrow_mut();
        let base = GridLayout::new(grid.layout.columns().to_vec())?;
        grid.layout = match sticky {
            Some(sticky) => base.with_sticky(sticky)?,
            None => base,
        };
        Ok(())
    }

    /// Update the grid's client bounds (call on resize).
    #[wasm_bindgen(js_name = setBounds)]
    pub fn set_bounds(&self, left: f64, width: f64) {
        let grid = self.controller.grid();
        let mut grid = grid.borrow_mut();
        let GridState { layout, viewport } = &mut *grid;
        viewport.resize(left, width);
        viewport.clamp_scroll(layout);
    }

    #[wasm_bindgen(js_name = setScrollLeft)]
    pub fn set_scroll_left(&self, x: f64) {
        let grid = self.controller.grid();
        let mut grid = grid.borrow_mut();
        let GridState { layout, viewport } = &mut *grid;
        viewport.set_scroll(x, layout);
    }

    #[wasm_bindgen(js_name = scrollLeft)]
    pub fn scroll_left(&self) -> f64 {
        self.controller.grid().borrow().viewport.scroll_left
    }

    #[wasm_bindgen(js_name = maxScrollLeft)]
    pub fn max_scroll_left(&self) -> f64 {
        self.controller.grid().borrow().max_scroll_left()
    }

    /// Begin dragging a column from a mousedown / touchstart event.
    #[wasm_bindgen(js_name = startReordering)]
    pub fn start_reordering(&self, column: &str, event: web_sys::Event) -> std::result::Result<(), JsValue> {
        let pointer = to_pointer_event(&event)
            .ok_or_else(|| JsValue::from_str("expected a mouse or touch event"))?;
        self.controller.start_reordering(column, &pointer)?;
        Ok(())
    }

    /// End the active drag. Resolves once any resulting commit is persisted.
    #[wasm_bindgen(js_name = stopReordering)]
    pub fn stop_reordering(&self) -> Promise {
        into_promise(self.controller.stop_reordering())
    }

    /// Move `source` after `target` (or to the front when `target` is omitted).
    #[wasm_bindgen(js_name = moveColumn)]
    pub fn move_column(&self, source: &str, target: Option<String>) -> Promise {
        into_promise(self.controller.move_column(source, target.as_deref()))
    }

    #[wasm_bindgen(js_name = moveColumnLeft)]
    pub fn move_column_left(&self, column: &str) -> Promise {
        into_promise(self.controller.move_column_left(column))
    }

    #[wasm_bindgen(js_name = moveColumnRight)]
    pub fn move_column_right(&self, column: &str) -> Promise {
        into_promise(self.controller.move_column_right(column))
    }

    #[wasm_bindgen(js_name = isReordering)]
    pub fn is_reordering(&self) -> bool {
        self.controller.is_reordering()
    }

    /// Current session as `{sourceColumn, targetColumn, breakpoints, ...}`
    pub fn session(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.controller.session())
    }

    /// Full column order, hidden columns included
    pub fn columns(&self) -> std::result::Result<JsValue, JsValue> {
        let grid = self.controller.grid();
        let grid = grid.borrow();
        to_js(&grid.layout.columns())
    }

    /// Register a callback receiving the session after every change.
    #[wasm_bindgen(js_name = setChangeCallback)]
    pub fn set_change_callback(&self, callback: Option<Function>) {
        let callback = callback.map(|f| {
            Rc::new(move |session: &ReorderSession| {
                let Ok(value) = to_js(session) else {
                    return;
                };
                if let Err(e) = f.call1(&JsValue::NULL, &value) {
                    tracing::warn!(error = ?e, "change callback threw");
                }
            }) as crate::reorder::ChangeCallback
        });
        self.controller.set_change_callback(callback);
    }
}
