//! Leptos Sortable Lists
//!
//! Drag-to-reorder for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are suppressed after a drag ends
const CLICK_SUPPRESS_MS: u32 = 100;

/// Sortable state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Item currently under the pointer while dragging
    pub over_id_read: ReadSignal<Option<u32>>,
    pub over_id_write: WriteSignal<Option<u32>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

pub fn create_sort_signals() -> SortSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (over_id_read, over_id_write) = signal(None::<u32>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SortSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl SortSignals {
    /// True while an item is being dragged
    pub fn is_dragging(&self) -> bool {
        self.dragging_id_read.get().is_some()
    }

    /// True for the item currently being dragged
    pub fn is_dragged(&self, item_id: u32) -> bool {
        self.dragging_id_read.get() == Some(item_id)
    }

    /// True for the item the dragged one would land on
    pub fn is_over(&self, item_id: u32) -> bool {
        self.over_id_read.get() == Some(item_id)
    }

    /// Click handlers should bail out when this is set; the click that
    /// follows a drop belongs to the drag, not to the item.
    pub fn click_suppressed(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

/// Whether the pointer moved far enough from the mousedown point to count as a drag
pub fn exceeds_threshold(dx: i32, dy: i32) -> bool {
    dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX
}

/// Resolve the (dragged, target) pair for a drop, if any.
/// Dropping an item onto itself is not a move.
pub fn resolve_drop(dragging: Option<u32>, over: Option<u32>) -> Option<(u32, u32)> {
    match (dragging, over) {
        (Some(dragged), Some(target)) if dragged != target => Some((dragged, target)),
        _ => None,
    }
}

/// End drag operation
pub fn end_drag(sort: &SortSignals) {
    sort.dragging_id_write.set(None);
    sort.over_id_write.set(None);
    sort.pending_id_write.set(None);
    sort.drag_just_ended_write.set(true);

    let clear = sort.drag_just_ended_write;
    Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for sortable items
/// Records pending drag with start position
pub fn make_on_mousedown(sort: SortSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Controls inside the item keep their own behaviour
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some() { return; }
        }
        // Stop text selection while dragging
        ev.prevent_default();
        sort.pending_id_write.set(Some(item_id));
        sort.start_x_write.set(ev.client_x());
        sort.start_y_write.set(ev.client_y());
    }
}

/// Bind document mousemove - starts drag if moved enough
pub fn bind_global_mousemove(sort: SortSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = sort.pending_id_read.get_untracked();
        if pending.is_none() || sort.dragging_id_read.get_untracked().is_some() {
            return;
        }

        let dx = ev.client_x() - sort.start_x_read.get_untracked();
        let dy = ev.client_y() - sort.start_y_read.get_untracked();
        if exceeds_threshold(dx, dy) {
            sort.dragging_id_write.set(pending);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for items (become drop target)
pub fn make_on_item_mouseenter(sort: SortSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = sort.dragging_id_read.get_untracked() {
            if dragging != item_id {
                sort.over_id_write.set(Some(item_id));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(sort: SortSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if sort.dragging_id_read.get_untracked().is_some() {
            sort.over_id_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection.
/// `on_drop(dragged, target)` fires only for a real drag onto another item.
pub fn bind_global_mouseup<F>(sort: SortSignals, on_drop: F)
where
    F: Fn(u32, u32) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let was_dragging = sort.dragging_id_read.get_untracked().is_some();
        let drop = resolve_drop(
            sort.dragging_id_read.get_untracked(),
            sort.over_id_read.get_untracked(),
        );

        if was_dragging {
            end_drag(&sort);
        } else {
            // Plain click: the click event fires on the element as usual
            sort.pending_id_write.set(None);
        }

        if let Some((dragged, target)) = drop {
            on_drop(dragged, target);
        }
    });

    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(sort);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_needs_more_than_five_pixels() {
        assert!(!exceeds_threshold(0, 0));
        assert!(!exceeds_threshold(5, -5));
        assert!(exceeds_threshold(6, 0));
        assert!(exceeds_threshold(0, -6));
    }

    #[test]
    fn test_resolve_drop() {
        assert_eq!(resolve_drop(Some(1), Some(2)), Some((1, 2)));
        assert_eq!(resolve_drop(Some(1), Some(1)), None);
        assert_eq!(resolve_drop(Some(1), None), None);
        assert_eq!(resolve_drop(None, Some(2)), None);
    }
}
