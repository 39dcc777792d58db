//! Drag-and-drop row reorder demo.
//!
//! A grab/over/drop state machine over `ListAdapter::move_row`. While a
//! row is grabbed the pointer shows a grabbing override; dropping moves
//! the row and rebinds the visible window.

use std::sync::Arc;

use cursor_icon::CursorIcon;
use vitrine::model::{ListAdapter, RowAdapter};
use vitrine::view::ListView;
use vitrine::widget::PointerRegion;
use vitrine_core::logging::targets;

use crate::config::ScreenConfig;
use crate::screen::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging { from: usize, over: usize },
}

pub struct DragReorderScreen {
    adapter: Arc<ListAdapter<String>>,
    view: ListView,
    pointer: PointerRegion,
    drag: DragState,
    drops: usize,
}

impl DragReorderScreen {
    pub fn new(config: &ScreenConfig) -> Self {
        let adapter = Arc::new(ListAdapter::new(config.words().to_vec()));
        let view = ListView::new(adapter.clone() as Arc<dyn RowAdapter>).with_viewport_rows(8);
        Self {
            adapter,
            view,
            pointer: PointerRegion::new(),
            drag: DragState::Idle,
            drops: 0,
        }
    }

    /// Start dragging the row at `position`. Ignored mid-drag or out of
    /// range.
    pub fn grab(&mut self, position: usize) {
        if self.drag != DragState::Idle || position >= self.adapter.len() {
            return;
        }
        self.drag = DragState::Dragging {
            from: position,
            over: position,
        };
        self.pointer.push_override(CursorIcon::Grabbing);
    }

    /// Update the row the drag is hovering over.
    pub fn drag_over(&mut self, position: usize) {
        if let DragState::Dragging { from, .. } = self.drag {
            let over = position.min(self.adapter.len().saturating_sub(1));
            self.drag = DragState::Dragging { from, over };
        }
    }

    /// Drop the grabbed row at the position it is over.
    pub fn drop_row(&mut self) {
        if let DragState::Dragging { from, over } = self.drag {
            self.adapter.move_row(from, over);
            self.drops += 1;
            self.view.invalidate();
            self.view.refresh();
            tracing::debug!(target: targets::GALLERY, from, to = over, "row dropped");
        }
        self.drag = DragState::Idle;
        self.pointer.pop_override();
    }

    /// Abort the drag without moving anything.
    pub fn cancel(&mut self) {
        if self.drag != DragState::Idle {
            self.drag = DragState::Idle;
            self.pointer.pop_override();
        }
    }
}

impl Screen for DragReorderScreen {
    fn title(&self) -> &str {
        "Drag to reorder"
    }

    fn activate(&mut self) {
        self.view.refresh();
        // Drag the first visible row to the bottom of the viewport
        self.grab(0);
        for over in 1..self.view.viewport_rows() {
            self.drag_over(over);
        }
        self.drop_row();
        tracing::info!(
            target: targets::GALLERY,
            drops = self.drops,
            "reorder drag complete"
        );
    }

    fn deactivate(&mut self) {
        self.cancel();
    }

    fn status(&self) -> String {
        let top = self
            .view
            .visible_rows()
            .first()
            .and_then(|&(_, id)| self.view.slot_text(id))
            .unwrap_or_default();
        format!("{} drops, top row {:?}", self.drops, top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> DragReorderScreen {
        let mut screen = DragReorderScreen::new(&ScreenConfig::default());
        screen.view.refresh();
        screen
    }

    #[test]
    fn test_drag_moves_row_and_rebinds() {
        let mut screen = screen();
        let original: Vec<String> = screen.adapter.items().clone();

        screen.grab(0);
        screen.drag_over(2);
        screen.drop_row();

        assert_eq!(*screen.adapter.items(), {
            let mut expected = original.clone();
            let item = expected.remove(0);
            expected.insert(2, item);
            expected
        });

        // The visible window reflects the move
        let (_, id) = screen.view.visible_rows()[2];
        assert_eq!(screen.view.slot_text(id).as_deref(), Some(original[0].as_str()));
    }

    #[test]
    fn test_grab_pushes_pointer_override() {
        let mut screen = screen();
        screen.grab(1);
        assert_eq!(screen.pointer.active_override(), Some(CursorIcon::Grabbing));

        screen.drop_row();
        assert!(screen.pointer.active_override().is_none());
    }

    #[test]
    fn test_cancel_restores_order() {
        let mut screen = screen();
        let original: Vec<String> = screen.adapter.items().clone();

        screen.grab(0);
        screen.drag_over(5);
        screen.cancel();

        assert_eq!(*screen.adapter.items(), original);
        assert_eq!(screen.drops, 0);
        assert!(screen.pointer.active_override().is_none());
    }

    #[test]
    fn test_grab_mid_drag_ignored() {
        let mut screen = screen();
        screen.grab(0);
        screen.grab(3); // ignored
        screen.drag_over(1);
        screen.drop_row();
        assert_eq!(screen.drops, 1);
    }
}
