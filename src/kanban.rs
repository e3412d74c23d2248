//! Kanban State
//!
//! Notes behind a `.note` leaf. A note moves between columns only through a
//! drop: status becomes the drop column, any column to any column, and the
//! drop slot decides its place among that column's notes.

use crate::content::{encode_items, generate_id, load_items};
use crate::models::{KanbanNote, NoteStatus};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub notes: Vec<KanbanNote>,
}

impl Board {
    pub fn from_content(name: &str, content: &str) -> Self {
        Self { notes: load_items(name, content) }
    }

    pub fn to_content(&self) -> String {
        encode_items(&self.notes).unwrap_or_else(|e| {
            log::error!("[KANBAN] {}", e);
            String::from("[]")
        })
    }

    /// Notes of one column, in board order
    pub fn column(&self, status: NoteStatus) -> Vec<&KanbanNote> {
        self.notes.iter().filter(|n| n.status == status).collect()
    }

    /// Append a note; blank text is ignored
    pub fn add(&mut self, text: &str, status: NoteStatus) -> Option<&KanbanNote> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = generate_id(self.notes.iter().map(|n| n.id.as_str()));
        self.notes.push(KanbanNote { id, text: text.to_string(), status });
        self.notes.last()
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }

    /// Move a note to `status`, placing it at `index` among that column's
    /// notes (None or past the end = last). Returns false for unknown ids.
    pub fn move_note(&mut self, id: &str, status: NoteStatus, index: Option<usize>) -> bool {
        let Some(from) = self.notes.iter().position(|n| n.id == id) else {
            return false;
        };
        let mut note = self.notes.remove(from);
        let previous = note.status;
        note.status = status;

        let slots: Vec<usize> = self.notes.iter()
            .enumerate()
            .filter(|(_, n)| n.status == status)
            .map(|(pos, _)| pos)
            .collect();
        let at = match (index, slots.last()) {
            (Some(idx), _) if idx < slots.len() => slots[idx],
            (_, Some(&last)) => last + 1,
            (_, None) => self.notes.len(),
        };
        self.notes.insert(at, note);

        log::debug!("[KANBAN] {} {:?} -> {:?} at {}", id, previous, status, at);
        true
    }

    /// Move a note dropped on display slot `slot` of column `status`.
    ///
    /// Slots count the column as rendered, with the dragged note still in
    /// place; dropping further down its own column shifts by one.
    pub fn drop_at_slot(&mut self, id: &str, status: NoteStatus, slot: Option<usize>) -> bool {
        let own_index = self.column(status).iter().position(|n| n.id == id);
        let index = match (slot, own_index) {
            (Some(slot), Some(own)) if own < slot => Some(slot - 1),
            (slot, _) => slot,
        };
        self.move_note(id, status, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, status: NoteStatus) -> KanbanNote {
        KanbanNote { id: id.into(), text: format!("note {}", id), status }
    }

    fn ids(notes: Vec<&KanbanNote>) -> Vec<&str> {
        notes.into_iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_add_defaults_and_status() {
        let mut board = Board::default();
        board.add("first", NoteStatus::default());
        board.add("second", NoteStatus::Done);
        assert!(board.add(" ", NoteStatus::Todo).is_none());

        assert_eq!(board.notes[0].status, NoteStatus::Todo);
        assert_eq!(board.notes[1].status, NoteStatus::Done);
    }

    #[test]
    fn test_move_todo_to_done_at_index() {
        let mut board = Board {
            notes: vec![
                note("a", NoteStatus::Todo),
                note("b", NoteStatus::Done),
                note("c", NoteStatus::Done),
            ],
        };
        assert!(board.move_note("a", NoteStatus::Done, Some(1)));

        assert_eq!(board.notes.iter().find(|n| n.id == "a").unwrap().status, NoteStatus::Done);
        assert_eq!(ids(board.column(NoteStatus::Done)), vec!["b", "a", "c"]);
        assert!(board.column(NoteStatus::Todo).is_empty());
    }

    #[test]
    fn test_move_to_column_end() {
        let mut board = Board {
            notes: vec![
                note("a", NoteStatus::Done),
                note("b", NoteStatus::Todo),
                note("c", NoteStatus::Done),
                note("d", NoteStatus::InProgress),
            ],
        };
        board.move_note("b", NoteStatus::Done, None);
        assert_eq!(ids(board.column(NoteStatus::Done)), vec!["a", "c", "b"]);

        board.move_note("d", NoteStatus::Done, Some(99));
        assert_eq!(ids(board.column(NoteStatus::Done)), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_move_into_empty_column() {
        let mut board = Board { notes: vec![note("a", NoteStatus::Todo), note("b", NoteStatus::Todo)] };
        board.move_note("a", NoteStatus::InProgress, Some(0));
        assert_eq!(ids(board.column(NoteStatus::InProgress)), vec!["a"]);
        assert_eq!(ids(board.column(NoteStatus::Todo)), vec!["b"]);
    }

    #[test]
    fn test_reorder_within_column() {
        let mut board = Board {
            notes: vec![note("a", NoteStatus::Todo), note("b", NoteStatus::Todo), note("c", NoteStatus::Todo)],
        };
        board.move_note("c", NoteStatus::Todo, Some(0));
        assert_eq!(ids(board.column(NoteStatus::Todo)), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_drop_below_itself_in_same_column() {
        let mut board = Board {
            notes: vec![note("a", NoteStatus::Todo), note("b", NoteStatus::Todo), note("c", NoteStatus::Todo)],
        };
        // Slot 2 sits between "b" and "c" while "a" is being dragged
        board.drop_at_slot("a", NoteStatus::Todo, Some(2));
        assert_eq!(ids(board.column(NoteStatus::Todo)), vec!["b", "a", "c"]);

        board.drop_at_slot("c", NoteStatus::Todo, Some(0));
        assert_eq!(ids(board.column(NoteStatus::Todo)), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_drop_from_other_column_uses_slot_directly() {
        let mut board = Board {
            notes: vec![note("a", NoteStatus::Todo), note("b", NoteStatus::Done), note("c", NoteStatus::Done)],
        };
        board.drop_at_slot("a", NoteStatus::Done, Some(2));
        assert_eq!(ids(board.column(NoteStatus::Done)), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_unknown_id() {
        let mut board = Board { notes: vec![note("a", NoteStatus::Todo)] };
        assert!(!board.move_note("zzz", NoteStatus::Done, None));
        assert_eq!(board.notes[0].status, NoteStatus::Todo);
    }

    #[test]
    fn test_remove_and_round_trip() {
        let mut board = Board { notes: vec![note("a", NoteStatus::Todo), note("b", NoteStatus::Done)] };
        assert!(board.remove("a"));

        let restored = Board::from_content("b.note", &board.to_content());
        assert_eq!(restored, board);
    }
}
