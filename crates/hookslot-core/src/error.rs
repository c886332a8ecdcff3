use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    #[error("slot {index} has not been initialized")]
    SlotAbsent { index: usize },

    #[error("slot {index} does not hold a value of type `{expected}`")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
    },

    /// Two consecutive render passes consumed a different number of slots.
    /// Usually a hook call inside a branch or loop.
    #[error(
        "hook count changed between render passes ({previous} -> {current}); \
         hooks must be called unconditionally and in the same order"
    )]
    HookCountMismatch { previous: usize, current: usize },
}
