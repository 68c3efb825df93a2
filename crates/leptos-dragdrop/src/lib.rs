//! Leptos DragDrop Utilities
//!
//! Mouse-driven drag and drop for flat ordered lists in Leptos.
//! Uses a movement threshold to distinguish click from drag, and reports
//! every finished gesture as `(source, Option<destination>)`.

use leptos::ev;
use leptos::prelude::*;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on a card (take its position)
    Card(usize),
    /// Drop on the gap before position `n` (`n == len` is the gap after the last card)
    Slot(usize),
}

impl DropTarget {
    /// Destination index for a card dragged from `source`.
    ///
    /// Slots are counted in the list before the dragged card is removed,
    /// so a slot below the source lands one position higher.
    pub fn destination(self, source: usize) -> usize {
        match self {
            DropTarget::Card(index) => index,
            DropTarget::Slot(slot) if slot > source => slot - 1,
            DropTarget::Slot(slot) => slot,
        }
    }
}

/// What a mouseup means for one list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Nothing was pressed in this list
    Idle,
    /// The handle was pressed but never left the dead zone
    Click,
    /// A drag finished; `destination` is `None` outside every target
    Drop { source: usize, destination: Option<usize> },
}

/// Classify a mouseup from the list's drag state
pub fn release(pending: Option<usize>, dragging: Option<usize>, target: Option<DropTarget>) -> Release {
    match (dragging, pending) {
        (Some(source), _) => Release::Drop { source, destination: target.map(|t| t.destination(source)) },
        (None, Some(_)) => Release::Click,
        (None, None) => Release::Idle,
    }
}

/// DnD state signals for one list
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Pending card index (mousedown on handle but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Pointer position at mousedown
    pub origin_read: ReadSignal<(i32, i32)>,
    pub origin_write: WriteSignal<(i32, i32)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (origin_read, origin_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        pending_read,
        pending_write,
        origin_read,
        origin_write,
    }
}

impl DndSignals {
    /// Index of the card being dragged, tracked
    pub fn dragging(&self) -> Option<usize> {
        self.dragging_read.get()
    }

    /// Whether `target` is the currently hovered drop target, tracked
    pub fn is_target(&self, target: DropTarget) -> bool {
        self.drop_target_read.get() == Some(target)
    }
}

/// Returns true once the pointer has left the dead zone around `origin`
pub fn exceeds_threshold(origin: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - origin.0).abs() > DRAG_THRESHOLD_PX || (current.1 - origin.1).abs() > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.try_set(None);
    dnd.drop_target_write.try_set(None);
    dnd.pending_write.try_set(None);
}

/// Create mousedown handler for a card's drag handle
/// Records a pending drag with the start position
pub fn make_on_handle_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Keep the browser from starting a text selection
        ev.prevent_default();
        dnd.pending_write.set(Some(index));
        dnd.origin_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for cards
pub fn make_on_card_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_read.get_untracked() {
            if dragging != index {
                dnd.drop_target_write.set(Some(DropTarget::Card(index)));
            }
        }
    }
}

/// Create mouseenter handler for the slots between cards
pub fn make_on_slot_mouseenter(dnd: DndSignals, slot: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(slot)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind the window-level handlers that drive one list's drag gestures.
///
/// `on_drop(source, destination)` fires once per finished drag. The
/// destination is `None` when the gesture ended outside every drop target
/// or was cancelled with Escape; callers treat that as a no-op.
/// The listeners are removed when the calling component unmounts.
pub fn bind_global_handlers<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, Option<usize>) + Clone + 'static,
{
    // Promote a pending press to a drag once the pointer moves far enough
    let mousemove = window_event_listener(ev::mousemove, move |ev| {
        let Some(Some(pending)) = dnd.pending_read.try_get_untracked() else { return };
        if matches!(dnd.dragging_read.try_get_untracked(), Some(Some(_))) {
            return;
        }
        let origin = dnd.origin_read.get_untracked();
        if exceeds_threshold(origin, (ev.client_x(), ev.client_y())) {
            dnd.dragging_write.set(Some(pending));
        }
    });

    let on_drop_up = on_drop.clone();
    let mouseup = window_event_listener(ev::mouseup, move |_ev| {
        let (Some(pending), Some(dragging)) = (dnd.pending_read.try_get_untracked(), dnd.dragging_read.try_get_untracked())
        else {
            return;
        };
        match release(pending, dragging, dnd.drop_target_read.get_untracked()) {
            Release::Idle => {}
            Release::Click => end_drag(&dnd),
            Release::Drop { source, destination } => {
                end_drag(&dnd);
                on_drop_up(source, destination);
            }
        }
    });

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        if let Some(Some(source)) = dnd.dragging_read.try_get_untracked() {
            end_drag(&dnd);
            on_drop(source, None);
        }
    });

    on_cleanup(move || {
        mousemove.remove();
        mouseup.remove();
        keydown.remove();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_target_takes_card_position() {
        assert_eq!(DropTarget::Card(3).destination(0), 3);
        assert_eq!(DropTarget::Card(0).destination(3), 0);
    }

    #[test]
    fn test_slot_above_source_keeps_index() {
        // [A, B, C]: drag C into the gap before A
        assert_eq!(DropTarget::Slot(0).destination(2), 0);
        assert_eq!(DropTarget::Slot(1).destination(2), 1);
    }

    #[test]
    fn test_slot_below_source_shifts_up() {
        // [A, B, C]: drag A into the gap after C
        assert_eq!(DropTarget::Slot(3).destination(0), 2);
        assert_eq!(DropTarget::Slot(2).destination(0), 1);
    }

    #[test]
    fn test_slots_adjacent_to_source_are_identity() {
        // Both gaps around B resolve to B's own index
        assert_eq!(DropTarget::Slot(1).destination(1), 1);
        assert_eq!(DropTarget::Slot(2).destination(1), 1);
    }

    #[test]
    fn test_release_outside_any_press_is_idle() {
        // A plain click elsewhere on the page
        assert_eq!(release(None, None, None), Release::Idle);
        assert_eq!(release(None, None, Some(DropTarget::Card(1))), Release::Idle);
    }

    #[test]
    fn test_release_without_movement_is_click() {
        assert_eq!(release(Some(2), None, None), Release::Click);
    }

    #[test]
    fn test_release_after_drag_maps_target() {
        assert_eq!(
            release(Some(0), Some(0), Some(DropTarget::Slot(3))),
            Release::Drop { source: 0, destination: Some(2) }
        );
        assert_eq!(release(Some(1), Some(1), None), Release::Drop { source: 1, destination: None });
    }

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }
}
