//! Assignment commands and the two input modalities that produce them.
//!
//! Drag-and-drop and tap-to-select both end in the same [`Command`]s, which a
//! session applies to its one assignment board.

/// A mutation of the assignment board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<K, V> {
    /// Place `key` on `value`.
    Assign {
        /// Item being placed.
        key: K,
        /// Target it goes to.
        value: V,
    },
    /// Take `key` off the board.
    Unassign {
        /// Item being removed.
        key: K,
    },
}

/// Where a dragged item is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget<V> {
    /// A target zone (a division or a team slot).
    Zone(V),
    /// Back onto the unassigned pool.
    Pool,
}

/// Drag-and-drop: pick an item up, then release it over a target.
#[derive(Debug, Clone)]
pub struct DragGesture<K> {
    carrying: Option<K>,
}

impl<K> Default for DragGesture<K> {
    fn default() -> Self {
        Self { carrying: None }
    }
}

impl<K> DragGesture<K> {
    /// Start dragging `key`, replacing anything already carried.
    pub fn pick_up(&mut self, key: K) {
        self.carrying = Some(key);
    }

    /// The item being dragged.
    pub fn carrying(&self) -> Option<&K> {
        self.carrying.as_ref()
    }

    /// Abandon the drag.
    pub fn cancel(&mut self) {
        self.carrying = None;
    }

    /// Release over `target`, ending the drag.
    pub fn drop_on<V>(&mut self, target: DropTarget<V>) -> Option<Command<K, V>> {
        let key = self.carrying.take()?;
        Some(match target {
            DropTarget::Zone(value) => Command::Assign { key, value },
            DropTarget::Pool => Command::Unassign { key },
        })
    }
}

/// Tap-to-select: tap an item to select it, then tap a target.
#[derive(Debug, Clone)]
pub struct TapSelector<K> {
    selected: Option<K>,
}

impl<K> Default for TapSelector<K> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<K: Clone + PartialEq> TapSelector<K> {
    /// Tap an unplaced item: selects it, or deselects it if already selected.
    pub fn tap_item(&mut self, key: K) {
        if self.selected.as_ref() == Some(&key) {
            self.selected = None;
        } else {
            self.selected = Some(key);
        }
    }

    /// Tap a target. Yields an assignment for the selected item, if any.
    ///
    /// The selection is kept until [`TapSelector::clear`] so a rejected
    /// assignment leaves the item selected.
    pub fn tap_target<V>(&self, value: V) -> Option<Command<K, V>> {
        self.selected.clone().map(|key| Command::Assign { key, value })
    }

    /// Tap an item that is already placed: it comes off and becomes selected.
    pub fn tap_placed<V>(&mut self, key: K) -> Command<K, V> {
        self.selected = Some(key.clone());
        Command::Unassign { key }
    }

    /// The selected item.
    pub fn selected(&self) -> Option<&K> {
        self.selected.as_ref()
    }

    /// Drop the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}
