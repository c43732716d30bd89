use crate::data::Pos;

/// Worker position and box positions.
///
/// Boxes are kept sorted so two states with the same boxes compare and hash equal
/// no matter in which order the boxes were moved. States are never modified once built,
/// transitions create new ones.
#[derive(Debug, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct State {
    pub(crate) worker: Pos,
    pub(crate) boxes: Vec<Pos>,
}

impl State {
    pub fn new(worker: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        State { worker, boxes }
    }

    pub fn worker(&self) -> Pos {
        self.worker
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    /// The state after the worker moves to `worker` without touching any box.
    pub(crate) fn with_worker(&self, worker: Pos) -> State {
        State {
            worker,
            boxes: self.boxes.clone(),
        }
    }

    /// The state after the box at `from` is pushed to `to` with the worker ending up at `worker`.
    ///
    /// `from` must hold a box.
    pub(crate) fn with_push(&self, worker: Pos, from: Pos, to: Pos) -> State {
        let mut boxes: Vec<Pos> = self
            .boxes
            .iter()
            .map(|&b| if b == from { to } else { b })
            .collect();
        boxes.sort();
        State { worker, boxes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_order_is_irrelevant() {
        let a = State::new(Pos::new(1, 1), vec![Pos::new(3, 1), Pos::new(2, 2)]);
        let b = State::new(Pos::new(1, 1), vec![Pos::new(2, 2), Pos::new(3, 1)]);
        assert_eq!(a, b);
        assert!(a.has_box(Pos::new(2, 2)));
        assert!(!a.has_box(Pos::new(1, 1)));
    }

    #[test]
    fn push_creates_new_state() {
        let before = State::new(Pos::new(1, 1), vec![Pos::new(5, 1), Pos::new(2, 1)]);
        let after = before.with_push(Pos::new(2, 1), Pos::new(2, 1), Pos::new(3, 1));

        assert_eq!(before.boxes(), &[Pos::new(2, 1), Pos::new(5, 1)]);
        assert_eq!(after.boxes(), &[Pos::new(3, 1), Pos::new(5, 1)]);
        assert_eq!(after.worker(), Pos::new(2, 1));
        assert_eq!(after.boxes().len(), before.boxes().len());
    }
}
