use std::any::{Any, type_name};

use crate::HookError;

/// Order-indexed storage for hook values.
///
/// Slot `i` belongs to the `i`-th hook call of a render pass. Slots are never
/// removed individually; the whole table lives as long as the runtime that
/// owns it (or until [`SlotTable::clear`]).
#[derive(Default)]
pub struct SlotTable {
    slots: Vec<Option<Box<dyn Any>>>,
}

impl SlotTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// Clone of the value at `index`, or `None` if the slot is absent or holds
    /// another type.
    pub fn get<T: Clone + 'static>(&self, index: usize) -> Option<T> {
        self.slots
            .get(index)?
            .as_ref()?
            .downcast_ref::<T>()
            .cloned()
    }

    pub fn try_get<T: Clone + 'static>(&self, index: usize) -> Result<T, HookError> {
        let slot = self
            .slots
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(HookError::SlotAbsent { index })?;

        slot.downcast_ref::<T>()
            .cloned()
            .ok_or(HookError::TypeMismatch {
                index,
                expected: type_name::<T>(),
            })
    }

    /// Stores `value` only if nothing is stored at `index` yet.
    /// Returns `true` when the value was stored.
    pub fn initialize_if_absent<T: 'static>(&mut self, index: usize, value: T) -> bool {
        let slot = self.slot_mut(index);
        if slot.is_some() {
            return false;
        }
        *slot = Some(Box::new(value));
        true
    }

    /// Unconditionally replaces the value at `index`.
    pub fn set<T: 'static>(&mut self, index: usize, value: T) {
        *self.slot_mut(index) = Some(Box::new(value));
    }

    /// Drops every slot. Only meaningful when re-mounting from scratch.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn slot_mut(&mut self, index: usize) -> &mut Option<Box<dyn Any>> {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        &mut self.slots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_only_once() {
        let mut table = SlotTable::new();
        assert!(table.initialize_if_absent(0, 1i32));
        assert!(!table.initialize_if_absent(0, 2i32));
        assert_eq!(table.get::<i32>(0), Some(1));
    }

    #[test]
    fn test_set_replaces_value() {
        let mut table = SlotTable::new();
        table.initialize_if_absent(0, String::from("a"));
        table.set(0, String::from("b"));
        assert_eq!(table.get::<String>(0).as_deref(), Some("b"));
    }

    #[test]
    fn test_grows_to_fit_index() {
        let mut table = SlotTable::new();
        table.set(3, true);
        assert_eq!(table.len(), 4);
        assert!(!table.contains(0));
        assert!(table.contains(3));
        assert_eq!(table.get::<bool>(2), None);
    }

    #[test]
    fn test_try_get_errors() {
        let mut table = SlotTable::new();
        assert_eq!(
            table.try_get::<i32>(0),
            Err(HookError::SlotAbsent { index: 0 })
        );

        table.set(0, 7u8);
        assert_eq!(
            table.try_get::<i32>(0),
            Err(HookError::TypeMismatch {
                index: 0,
                expected: "i32"
            })
        );
        assert_eq!(table.try_get::<u8>(0), Ok(7));
    }

    #[test]
    fn test_set_on_one_slot_leaves_others() {
        let mut table = SlotTable::new();
        table.initialize_if_absent(0, 10i32);
        table.initialize_if_absent(1, 20i32);
        table.set(1, 25i32);
        assert_eq!(table.get::<i32>(0), Some(10));
        assert_eq!(table.get::<i32>(1), Some(25));
    }
}
