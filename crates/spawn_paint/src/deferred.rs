//! One-shot demo seeding once the host UI has settled.
//!
//! The seed holds only a weak handle to the editor, so tearing the UI down
//! before the delay elapses turns the callback into a no-op. It fires at most
//! once and never retries.
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Instant;

use tracing::debug;

use crate::editor::DistributionEditor;

/// Result of polling a [`DeferredSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPoll {
    /// The delay has not elapsed yet.
    Pending,
    /// Demo points were placed.
    Seeded(usize),
    /// The editor already held points.
    Skipped,
    /// The editor was dropped before the delay elapsed.
    Detached,
    /// The seed already fired.
    Spent,
}

#[derive(Debug)]
pub struct DeferredSeed {
    editor: Weak<RefCell<DistributionEditor>>,
    due: Instant,
    fired: bool,
}

impl DeferredSeed {
    /// Schedules seeding `editor.config().demo_seed_delay` after `now`.
    pub fn schedule(editor: &Rc<RefCell<DistributionEditor>>, now: Instant) -> Self {
        let delay = editor.borrow().config().demo_seed_delay;
        Self {
            editor: Rc::downgrade(editor),
            due: now + delay,
            fired: false,
        }
    }

    pub fn is_spent(&self) -> bool {
        self.fired
    }

    /// Fires once `now` reaches the due instant.
    pub fn poll(&mut self, now: Instant) -> SeedPoll {
        if self.fired {
            return SeedPoll::Spent;
        }
        if now < self.due {
            return SeedPoll::Pending;
        }
        self.fired = true;
        let Some(editor) = self.editor.upgrade() else {
            debug!("Editor dropped before demo seeding; skipping.");
            return SeedPoll::Detached;
        };
        // Polled from inside an editor callback.
        let Ok(mut editor) = editor.try_borrow_mut() else {
            return SeedPoll::Skipped;
        };
        match editor.seed_demo() {
            0 => SeedPoll::Skipped,
            n => SeedPoll::Seeded(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::EditorConfig;
    use crate::geometry::CanvasMetrics;
    use crate::patterns::Pattern;

    fn shared_editor() -> Rc<RefCell<DistributionEditor>> {
        Rc::new(RefCell::new(DistributionEditor::new(
            EditorConfig::new()
                .with_seed(5)
                .with_demo_seed_delay(Duration::from_millis(50)),
            3,
            CanvasMetrics::default(),
        )))
    }

    #[test]
    fn fires_once_after_the_delay() {
        let editor = shared_editor();
        let start = Instant::now();
        let mut seed = DeferredSeed::schedule(&editor, start);

        assert_eq!(seed.poll(start + Duration::from_millis(10)), SeedPoll::Pending);
        let SeedPoll::Seeded(n) = seed.poll(start + Duration::from_millis(50)) else {
            panic!("expected seeding");
        };
        assert_eq!(editor.borrow().store().total_len(), n);
        assert_eq!(seed.poll(start + Duration::from_secs(1)), SeedPoll::Spent);
        assert!(seed.is_spent());
    }

    #[test]
    fn dropped_editor_turns_into_a_no_op() {
        let editor = shared_editor();
        let start = Instant::now();
        let mut seed = DeferredSeed::schedule(&editor, start);
        drop(editor);
        assert_eq!(seed.poll(start + Duration::from_secs(1)), SeedPoll::Detached);
        assert_eq!(seed.poll(start + Duration::from_secs(2)), SeedPoll::Spent);
    }

    #[test]
    fn existing_points_are_left_alone() {
        let editor = shared_editor();
        editor
            .borrow_mut()
            .generate_pattern(Pattern::Ring, glam::Vec2::splat(0.5), 0.1);
        let start = Instant::now();
        let mut seed = DeferredSeed::schedule(&editor, start);
        assert_eq!(seed.poll(start + Duration::from_secs(1)), SeedPoll::Skipped);
        assert_eq!(editor.borrow().store().total_len(), 20);
    }
}
