//! Selection model
//!
//! An ordered list of 1-4 distinct entities (countries and/or regions).
//! `World` is mutually exclusive with everything else: it is only available
//! in single mode, and switching modes resets the list - compare off goes
//! back to `["World"]`, compare on starts from an empty list.

use crate::regions::WORLD;

/// Compare mode caps the selection for display legibility.
pub const MAX_COMPARE_ENTITIES: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    entities: Vec<String>,
    compare_mode: bool,
}

impl Selection {
    /// The default view: `World`, single mode.
    pub fn world() -> Self {
        Self {
            entities: vec![WORLD.to_string()],
            compare_mode: false,
        }
    }

    pub fn single(entity: impl Into<String>) -> Self {
        Self {
            entities: vec![entity.into()],
            compare_mode: false,
        }
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn compare_mode(&self) -> bool {
        self.compare_mode
    }

    pub fn is_world(&self) -> bool {
        !self.compare_mode && self.entities.len() == 1 && self.entities[0] == WORLD
    }

    /// Toggle compare mode. Off resets the selection to exactly `["World"]`;
    /// on clears it so the user builds a comparison from scratch.
    pub fn set_compare_mode(&mut self, on: bool) {
        if on == self.compare_mode {
            return;
        }
        self.compare_mode = on;
        self.entities.clear();
        if !on {
            self.entities.push(WORLD.to_string());
        }
    }

    /// Replace the selection in single mode (map click or dropdown).
    /// Selecting `World` clears everything else, and vice versa, because the
    /// list can only ever hold one entry here.
    pub fn select(&mut self, entity: impl Into<String>) {
        if self.compare_mode {
            return;
        }
        self.entities = vec![entity.into()];
    }

    /// Add or remove an entity in compare mode. Returns whether the
    /// selection changed: adding a 5th entity is rejected, as is `World`,
    /// which is not comparable.
    pub fn toggle(&mut self, entity: &str) -> bool {
        if !self.compare_mode || entity == WORLD {
            return false;
        }
        if let Some(pos) = self.entities.iter().position(|e| e == entity) {
            self.entities.remove(pos);
            return true;
        }
        if self.entities.len() >= MAX_COMPARE_ENTITIES {
            return false;
        }
        self.entities.push(entity.to_string());
        true
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::world()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_off_resets_to_world() {
        let mut sel = Selection::world();
        sel.set_compare_mode(true);
        assert!(sel.entities().is_empty());
        sel.toggle("Japan");
        sel.set_compare_mode(false);
        assert_eq!(sel.entities(), ["World"]);
        assert!(sel.is_world());
    }

    #[test]
    fn test_compare_on_from_world_clears() {
        let mut sel = Selection::world();
        sel.set_compare_mode(true);
        assert!(sel.entities().is_empty());
        assert!(!sel.is_world());
    }

    #[test]
    fn test_fifth_entity_rejected() {
        let mut sel = Selection::world();
        sel.set_compare_mode(true);
        for name in ["France", "Germany", "Italy", "Spain"] {
            assert!(sel.toggle(name));
        }
        assert!(!sel.toggle("Poland"));
        assert_eq!(sel.entities().len(), 4);
    }

    #[test]
    fn test_toggle_removes_existing() {
        let mut sel = Selection::world();
        sel.set_compare_mode(true);
        sel.toggle("France");
        assert!(sel.toggle("France"));
        assert!(sel.entities().is_empty());
    }

    #[test]
    fn test_world_not_comparable() {
        let mut sel = Selection::world();
        sel.set_compare_mode(true);
        assert!(!sel.toggle(WORLD));
    }

    #[test]
    fn test_single_select_replaces() {
        let mut sel = Selection::world();
        sel.select("Japan");
        assert_eq!(sel.entities(), ["Japan"]);
        sel.select(WORLD);
        assert!(sel.is_world());
    }
}
