//! Shift-left / shift-right of the active buffer.

use anyhow::{Context, Result};
use reorder_core::{BufferHandle, BufferHost, Direction};

use crate::view::BufferListView;

/// What a single shift did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOutcome {
    /// Active buffer moved from `from` to `to`.
    Shifted {
        handle: BufferHandle,
        from: usize,
        to: usize,
        /// Buffer was auto-saved before moving
        saved: bool,
    },
    /// Fewer than two listed buffers.
    SingleBuffer,
    /// No listed buffer has focus.
    NoActiveBuffer,
    /// Active buffer has unsaved changes and auto-save is off.
    UnsavedChanges,
}

/// Stateless engine; every call works from a fresh snapshot.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReorderEngine;

impl ReorderEngine {
    pub fn new() -> Self {
        Self
    }

    /// Move the active buffer one slot in `direction`, wrapping at the ends.
    ///
    /// Guard no-ops return `Ok` with the reason. Host failures are returned
    /// as errors without retry or rollback; a buffer saved before a failed
    /// move stays saved.
    pub fn shift(
        &self,
        host: &mut dyn BufferHost,
        direction: Direction,
    ) -> Result<ShiftOutcome> {
        let snapshot = BufferListView::snapshot(host)?;
        let len = snapshot.len();

        if len <= 1 {
            return Ok(ShiftOutcome::SingleBuffer);
        }

        let (from, active) = match (snapshot.active_index, snapshot.active()) {
            (Some(index), Some(active)) => (index, active),
            _ => {
                log::debug!("Shift {}: no listed buffer is active", direction);
                return Ok(ShiftOutcome::NoActiveBuffer);
            }
        };
        let handle = active.handle;
        let to = direction
            .target_index(from, len)
            .with_context(|| format!("Buffer position {} out of range ({} buffers)", from, len))?;

        let mut saved = false;
        if active.modified {
            if !host.allow_auto_save() {
                log::debug!(
                    "Shift {}: buffer {} ({}) has unsaved changes",
                    direction,
                    handle,
                    active.name
                );
                return Ok(ShiftOutcome::UnsavedChanges);
            }
            host.save_buffer(handle)
                .with_context(|| format!("Failed to save buffer {} ({})", handle, active.name))?;
            saved = true;
        }

        host.move_buffer(handle, to).with_context(|| {
            format!(
                "Failed to move buffer {} ({}) to position {}",
                handle, active.name, to
            )
        })?;

        let focused = host
            .active_buffer()
            .context("Failed to query active buffer after move")?;
        if focused != Some(handle) {
            log::warn!("Host lost focus while moving buffer {}, restoring", handle);
            host.focus_buffer(handle)
                .with_context(|| format!("Failed to restore focus to buffer {}", handle))?;
        }

        log::info!("Shifted buffer {} {} ({} -> {})", handle, direction, from, to);
        Ok(ShiftOutcome::Shifted {
            handle,
            from,
            to,
            saved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::TestHost;

    fn shift(host: &mut TestHost, direction: Direction) -> ShiftOutcome {
        ReorderEngine::new().shift(host, direction).unwrap()
    }

    #[test]
    fn test_single_and_empty_are_noops() {
        let cases: [&[&str]; 2] = [&[], &["A"]];
        for names in cases {
            let mut host = TestHost::new(names, 0);
            assert_eq!(shift(&mut host, Direction::Left), ShiftOutcome::SingleBuffer);
            assert_eq!(shift(&mut host, Direction::Right), ShiftOutcome::SingleBuffer);
            assert_eq!(host.names(), names.to_vec());
            assert_eq!(host.moves, 0);
        }
    }

    #[test]
    fn test_middle_shift_left() {
        let mut host = TestHost::new(&["A", "B", "C"], 1);
        let outcome = shift(&mut host, Direction::Left);

        assert_eq!(host.names(), vec!["B", "A", "C"]);
        assert_eq!(host.active_name(), Some("B"));
        assert_eq!(
            outcome,
            ShiftOutcome::Shifted {
                handle: BufferHandle(2),
                from: 1,
                to: 0,
                saved: false
            }
        );
    }

    #[test]
    fn test_middle_shift_right() {
        let mut host = TestHost::new(&["A", "B", "C"], 1);
        shift(&mut host, Direction::Right);

        assert_eq!(host.names(), vec!["A", "C", "B"]);
        assert_eq!(host.active_name(), Some("B"));
    }

    #[test]
    fn test_first_wraps_to_end() {
        let mut host = TestHost::new(&["A", "B", "C"], 0);
        shift(&mut host, Direction::Left);

        assert_eq!(host.names(), vec!["B", "C", "A"]);
        assert_eq!(host.active_name(), Some("A"));
    }

    #[test]
    fn test_last_wraps_to_front() {
        let mut host = TestHost::new(&["A", "B", "C"], 2);
        shift(&mut host, Direction::Right);

        assert_eq!(host.names(), vec!["C", "A", "B"]);
        assert_eq!(host.active_name(), Some("C"));
    }

    #[test]
    fn test_round_trip_restores_ordering() {
        let names = ["A", "B", "C", "D"];
        for active in 0..names.len() {
            for first in [Direction::Left, Direction::Right] {
                let mut host = TestHost::new(&names, active);
                shift(&mut host, first);
                shift(&mut host, first.reverse());

                assert_eq!(host.names(), names.to_vec());
                assert_eq!(host.active_name(), Some(names[active]));
            }
        }
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let names = ["A", "B", "C"];
        let mut host = TestHost::new(&names, 0);
        for _ in 0..names.len() {
            shift(&mut host, Direction::Right);
        }
        assert_eq!(host.names(), names.to_vec());
    }

    #[test]
    fn test_modified_without_auto_save_is_noop() {
        let mut host = TestHost::new(&["A", "B"], 1);
        host.set_modified("B");

        assert_eq!(shift(&mut host, Direction::Left), ShiftOutcome::UnsavedChanges);
        assert_eq!(shift(&mut host, Direction::Right), ShiftOutcome::UnsavedChanges);
        assert_eq!(host.names(), vec!["A", "B"]);
        assert!(host.saved.is_empty());
        assert_eq!(host.moves, 0);
    }

    #[test]
    fn test_modified_neighbor_does_not_block() {
        let mut host = TestHost::new(&["A", "B"], 1);
        host.set_modified("A");

        assert!(matches!(
            shift(&mut host, Direction::Left),
            ShiftOutcome::Shifted { saved: false, .. }
        ));
        assert_eq!(host.names(), vec!["B", "A"]);
        assert!(host.saved.is_empty());
    }

    #[test]
    fn test_auto_save_saves_then_shifts() {
        let mut host = TestHost::new(&["A", "B"], 1);
        host.set_modified("B");
        host.auto_save = true;

        let outcome = shift(&mut host, Direction::Right);

        assert_eq!(host.saved, vec![BufferHandle(2)]);
        assert_eq!(host.names(), vec!["B", "A"]);
        assert_eq!(host.active_name(), Some("B"));
        assert!(matches!(outcome, ShiftOutcome::Shifted { saved: true, .. }));
    }

    #[test]
    fn test_save_failure_aborts_shift() {
        let mut host = TestHost::new(&["A", "B"], 1);
        host.set_modified("B");
        host.auto_save = true;
        host.fail_save = true;

        let err = ReorderEngine::new()
            .shift(&mut host, Direction::Right)
            .unwrap_err();

        assert!(err.to_string().contains("Failed to save buffer 2"));
        assert_eq!(host.names(), vec!["A", "B"]);
        assert_eq!(host.moves, 0);
    }

    #[test]
    fn test_move_failure_after_save_keeps_save() {
        let mut host = TestHost::new(&["A", "B"], 1);
        host.set_modified("B");
        host.auto_save = true;
        host.fail_move = true;

        let err = ReorderEngine::new()
            .shift(&mut host, Direction::Left)
            .unwrap_err();

        assert!(format!("{:#}", err).contains("buffer list changed"));
        assert_eq!(host.saved, vec![BufferHandle(2)]);
        assert_eq!(host.names(), vec!["A", "B"]);
    }

    #[test]
    fn test_enumeration_failure_propagates() {
        let mut host = TestHost::new(&["A", "B"], 0);
        host.fail_list = true;

        assert!(ReorderEngine::new()
            .shift(&mut host, Direction::Left)
            .is_err());
    }

    #[test]
    fn test_focus_query_failure_after_move_has_context() {
        let mut host = TestHost::new(&["A", "B"], 0);
        host.fail_active_after_move = true;

        let err = ReorderEngine::new()
            .shift(&mut host, Direction::Right)
            .unwrap_err();

        assert!(err
            .to_string()
            .contains("Failed to query active buffer after move"));
        assert_eq!(host.names(), vec!["B", "A"]);
    }

    #[test]
    fn test_no_active_buffer_is_noop() {
        let mut host = TestHost::new(&["A", "B"], 0);
        host.active = None;

        assert_eq!(shift(&mut host, Direction::Left), ShiftOutcome::NoActiveBuffer);
        assert_eq!(host.moves, 0);
    }

    #[test]
    fn test_focus_restored_when_host_drops_it() {
        let mut host = TestHost::new(&["A", "B", "C"], 1);
        host.drop_focus_on_move = true;

        shift(&mut host, Direction::Right);

        assert_eq!(host.names(), vec!["A", "C", "B"]);
        assert_eq!(host.active_name(), Some("B"));
        assert_eq!(host.focus_calls, 1);
    }

    #[test]
    fn test_focus_untouched_when_host_keeps_it() {
        let mut host = TestHost::new(&["A", "B", "C"], 1);
        shift(&mut host, Direction::Right);
        assert_eq!(host.focus_calls, 0);
    }

    #[test]
    fn test_snapshot_taken_fresh_each_call() {
        let mut host = TestHost::new(&["A", "B", "C"], 0);
        shift(&mut host, Direction::Right);
        assert_eq!(host.names(), vec!["B", "A", "C"]);

        // External change between commands
        host.active = Some(BufferHandle(3));
        shift(&mut host, Direction::Left);
        assert_eq!(host.names(), vec!["B", "C", "A"]);
        assert_eq!(host.active_name(), Some("C"));
    }
}
