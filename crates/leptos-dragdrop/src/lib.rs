//! Leptos DragDrop Utilities
//!
//! Drag-and-drop reordering for flat lists using HTML5 drag events.
//! Rows are addressed by display index; the drop handler reports
//! (source, destination) and the caller decides how to reorder its data.

use leptos::prelude::*;
use web_sys::DragEvent;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Index of the row being dragged - read
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Index of the row currently hovered as a drop target - read
    pub over_read: ReadSignal<Option<usize>>,
    pub over_write: WriteSignal<Option<usize>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (over_read, over_write) = signal(None::<usize>);
    DndSignals {
        dragging_read,
        dragging_write,
        over_read,
        over_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.over_write.set(None);
}

/// True while `index` is hovered as a drop target for another row.
/// Reactive, intended for highlight classes.
pub fn is_drop_target(dnd: &DndSignals, index: usize) -> bool {
    dnd.over_read.get() == Some(index) && dnd.dragging_read.get() != Some(index)
}

/// Create dragstart handler for the row at `index`
pub fn make_on_dragstart(dnd: DndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        // Firefox ignores the drag unless the dataTransfer carries data
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            let _ = dt.set_data("text/plain", &index.to_string());
        }
        dnd.dragging_write.set(Some(index));
    }
}

/// Create dragover handler for the row at `index`.
/// Prevents the default so the row is a valid drop target.
pub fn make_on_dragover(dnd: DndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.over_write.set(Some(index));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.over_write.set(None);
    }
}

/// Create drop handler for the row at `index`.
/// Reports (source, destination) to `on_drop`, then clears the drag state.
pub fn make_on_drop<F>(dnd: DndSignals, index: usize, on_drop: F) -> impl Fn(DragEvent) + Copy + 'static
where
    F: Fn(usize, Option<usize>) + Copy + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(source) = dnd.dragging_read.get_untracked() {
            on_drop(source, Some(index));
        }
        end_drag(&dnd);
    }
}

/// Create dragend handler. Fires after a drop and also when the drag is
/// abandoned outside any target, so the state is always cleared.
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        end_drag(&dnd);
    }
}
