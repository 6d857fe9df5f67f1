//! Linear undo/redo history over the storefront theme
//!
//! `ThemeHistory` owns the current theme value plus an undo stack and a redo
//! stack of past and undone snapshots. History is strictly linear: applying
//! a new value discards any previously undone branch. Every operation is
//! total and synchronous; undo/redo at the stack floor are silent no-ops so
//! callers gate their buttons on `can_undo`/`can_redo` instead of catching
//! errors.

use crate::theme::models::ThemeConfig;
use tracing::debug;

/// Undo/redo history manager for a single theme value
///
/// The active value is held separately as `current` and is never a member
/// of either stack. Both stacks are plain LIFO vectors: the most recent
/// past state and the nearest undone state sit at the top of their
/// respective stacks.
#[derive(Debug, Clone)]
pub struct ThemeHistory {
    current: ThemeConfig,
    undo_stack: Vec<ThemeConfig>,
    redo_stack: Vec<ThemeConfig>,
}

impl ThemeHistory {
    /// Create a history with the given initial theme and empty stacks
    pub fn new(initial: ThemeConfig) -> Self {
        Self {
            current: initial,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// The active theme value
    pub fn current(&self) -> &ThemeConfig {
        &self.current
    }

    /// Whether at least one past state can be restored
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether at least one undone state can be restored
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Apply a new theme value as a fresh edit
    ///
    /// The previous current value is pushed onto the undo stack and the
    /// redo stack is cleared unconditionally: a new edit invalidates any
    /// undone branch. This operation cannot fail.
    pub fn apply(&mut self, new_config: ThemeConfig) {
        let previous = std::mem::replace(&mut self.current, new_config);
        self.undo_stack.push(previous);
        self.redo_stack.clear();
        debug!(
            undo_depth = self.undo_stack.len(),
            "Applied theme edit, redo branch discarded"
        );
    }

    /// Restore the most recent past state
    ///
    /// No-op when the undo stack is empty: the current value and both
    /// stacks are left untouched.
    pub fn undo(&mut self) {
        let Some(previous) = self.undo_stack.pop() else {
            return;
        };
        let replaced = std::mem::replace(&mut self.current, previous);
        self.redo_stack.push(replaced);
        debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "Undo"
        );
    }

    /// Restore the nearest undone state
    ///
    /// No-op when the redo stack is empty.
    pub fn redo(&mut self) {
        let Some(next) = self.redo_stack.pop() else {
            return;
        };
        let replaced = std::mem::replace(&mut self.current, next);
        self.undo_stack.push(replaced);
        debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "Redo"
        );
    }
}

impl Default for ThemeHistory {
    fn default() -> Self {
        Self::new(ThemeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::models::ThemePatch;

    fn with_primary(base: &ThemeConfig, color: &str) -> ThemeConfig {
        base.merged(&ThemePatch::primary_color(color))
    }

    #[test]
    fn test_fresh_history_has_no_undo_or_redo() {
        let history = ThemeHistory::default();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(*history.current(), ThemeConfig::default());
    }

    #[test]
    fn test_apply_enables_undo_only() {
        let mut history = ThemeHistory::default();
        let blue = with_primary(history.current(), "#0ea5e9");
        history.apply(blue.clone());
        assert_eq!(*history.current(), blue);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_restores_previous_value() {
        let default = ThemeConfig::default();
        let mut history = ThemeHistory::new(default.clone());
        history.apply(with_primary(&default, "#0ea5e9"));
        history.undo();
        assert_eq!(*history.current(), default);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn test_redo_restores_pre_undo_value() {
        let default = ThemeConfig::default();
        let blue = with_primary(&default, "#0ea5e9");
        let mut history = ThemeHistory::new(default);
        history.apply(blue.clone());
        history.undo();
        history.redo();
        assert_eq!(*history.current(), blue);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_apply_clears_redo_branch() {
        let default = ThemeConfig::default();
        let mut history = ThemeHistory::new(default.clone());
        history.apply(with_primary(&default, "#0ea5e9"));
        history.undo();
        assert!(history.can_redo());

        let violet = with_primary(&default, "#8b5cf6");
        history.apply(violet.clone());
        assert!(!history.can_redo());

        // Redo on the discarded branch is a no-op
        history.redo();
        assert_eq!(*history.current(), violet);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_on_empty_stack_is_noop() {
        let mut history = ThemeHistory::default();
        let before = history.current().clone();
        history.undo();
        assert_eq!(*history.current(), before);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_redo_on_empty_stack_is_noop() {
        let default = ThemeConfig::default();
        let mut history = ThemeHistory::new(default.clone());
        history.apply(with_primary(&default, "#f43f5e"));
        let before = history.current().clone();
        history.redo();
        assert_eq!(*history.current(), before);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_second_undo_at_floor_is_noop() {
        let default = ThemeConfig::default();
        let mut history = ThemeHistory::new(default.clone());
        history.apply(with_primary(&default, "#0ea5e9"));
        history.undo();
        let after_first = history.current().clone();
        history.undo();
        assert_eq!(*history.current(), after_first);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    /// The emerald-to-ocean walkthrough from the appearance editor
    #[test]
    fn test_emerald_ocean_scenario() {
        let emerald = ThemeConfig {
            primary_color: "#10b981".to_string(),
            border_radius: 12,
            ..ThemeConfig::default()
        };
        let ocean = ThemeConfig {
            primary_color: "#0ea5e9".to_string(),
            border_radius: 12,
            ..emerald.clone()
        };

        let mut history = ThemeHistory::new(emerald.clone());
        history.apply(ocean.clone());
        assert_eq!(history.current().primary_color, "#0ea5e9");
        assert!(history.can_undo());
        assert!(!history.can_redo());

        history.undo();
        assert_eq!(*history.current(), emerald);
        assert!(!history.can_undo());
        assert!(history.can_redo());

        history.redo();
        assert_eq!(*history.current(), ocean);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_theme() -> impl Strategy<Value = ThemeConfig> {
            ("#[0-9a-f]{6}", 0u8..=30, any::<bool>()).prop_map(|(color, radius, glass)| {
                ThemeConfig {
                    primary_color: color,
                    border_radius: radius,
                    glassmorphism: glass,
                    ..ThemeConfig::default()
                }
            })
        }

        proptest! {
            /// Property: n applies followed by n undos returns to the initial
            /// value, and can_undo flips false only after exactly n undos
            #[test]
            fn undo_unwinds_every_apply(themes in prop::collection::vec(arb_theme(), 1..12)) {
                let initial = ThemeConfig::default();
                let mut history = ThemeHistory::new(initial.clone());
                for theme in &themes {
                    history.apply(theme.clone());
                }
                for remaining in (0..themes.len()).rev() {
                    prop_assert!(history.can_undo());
                    history.undo();
                    prop_assert_eq!(history.can_undo(), remaining > 0);
                }
                prop_assert_eq!(history.current(), &initial);
            }

            /// Property: undo then redo is an observable identity
            #[test]
            fn undo_redo_round_trips(themes in prop::collection::vec(arb_theme(), 1..12)) {
                let mut history = ThemeHistory::default();
                for theme in &themes {
                    history.apply(theme.clone());
                }
                let before = history.current().clone();
                history.undo();
                history.redo();
                prop_assert_eq!(history.current(), &before);
            }

            /// Property: apply always clears the redo stack, regardless of
            /// how deep the undone branch was
            #[test]
            fn apply_discards_redo_branch(
                themes in prop::collection::vec(arb_theme(), 2..12),
                undos in 1usize..12,
            ) {
                let mut history = ThemeHistory::default();
                for theme in &themes {
                    history.apply(theme.clone());
                }
                for _ in 0..undos.min(themes.len()) {
                    history.undo();
                }
                history.apply(ThemeConfig::default());
                prop_assert!(!history.can_redo());
            }
        }
    }
}
