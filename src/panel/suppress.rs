//! Re-entrancy guard for programmatic control updates.

use std::cell::Cell;
use std::rc::Rc;

/// Set while a controller rewrites one of its own controls.
///
/// Change notifications arriving while the flag is set come from the
/// controller itself, not from the user, and must not be treated as input.
/// Each controller owns its own flag.
#[derive(Debug, Clone, Default)]
pub struct SuppressionFlag {
    active: Rc<Cell<bool>>,
}

impl SuppressionFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.active.get()
    }

    /// Sets the flag until the returned guard is dropped.
    ///
    /// The guard restores the value it found, so nested updates leave the
    /// flag set until the outermost one ends.
    #[must_use = "the flag is cleared as soon as the guard is dropped"]
    pub fn begin(&self) -> SuppressionGuard {
        let previous = self.active.replace(true);
        SuppressionGuard {
            active: Rc::clone(&self.active),
            previous,
        }
    }
}

/// Scope of a programmatic update; see [`SuppressionFlag::begin`].
#[derive(Debug)]
pub struct SuppressionGuard {
    active: Rc<Cell<bool>>,
    previous: bool,
}

impl Drop for SuppressionGuard {
    fn drop(&mut self) {
        self.active.set(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_clears_flag_on_drop() {
        let flag = SuppressionFlag::new();
        assert!(!flag.is_set());
        {
            let _guard = flag.begin();
            assert!(flag.is_set());
        }
        assert!(!flag.is_set());
    }

    #[test]
    fn nested_guards_restore_outer_state() {
        let flag = SuppressionFlag::new();
        let outer = flag.begin();
        {
            let _inner = flag.begin();
            assert!(flag.is_set());
        }
        assert!(flag.is_set(), "inner guard must not clear the outer update");
        drop(outer);
        assert!(!flag.is_set());
    }

    #[test]
    fn guard_restores_on_early_return() {
        fn rewrite(flag: &SuppressionFlag, bail: bool) -> Option<()> {
            let _guard = flag.begin();
            if bail {
                return None;
            }
            Some(())
        }

        let flag = SuppressionFlag::new();
        assert!(rewrite(&flag, true).is_none());
        assert!(!flag.is_set());
        assert!(rewrite(&flag, false).is_some());
        assert!(!flag.is_set());
    }
}
