#[cfg(test)]
mod tests {
    use std::time::{
        Duration,
        Instant,
    };

    use crate::gui::carousel::state::{
        page_size_for_width,
        CarouselState,
        Command,
        ResizeDebounce,
        CARD_GAP,
        DRAG_THRESHOLD,
        RESIZE_DEBOUNCE,
    };

    /// Wide enough for the 4-card page, well past the 1024 threshold.
    const WIDE: f32 = 1400.0;
    /// Narrow enough for the 1-card page.
    const NARROW: f32 = 360.0;

    fn state(card_count: usize, width: f32) -> CarouselState {
        CarouselState::new(card_count, width)
    }

    #[test]
    fn page_size_steps_match_width_thresholds() {
        assert_eq!(page_size_for_width(320.0), 1);
        assert_eq!(page_size_for_width(380.0), 1);
        assert_eq!(page_size_for_width(500.0), 1);
        assert_eq!(page_size_for_width(576.0), 1);
        assert_eq!(page_size_for_width(700.0), 2);
        assert_eq!(page_size_for_width(768.0), 2);
        assert_eq!(page_size_for_width(1000.0), 3);
        assert_eq!(page_size_for_width(1024.0), 3);
        assert_eq!(page_size_for_width(1025.0), 4);
        assert_eq!(page_size_for_width(1920.0), 4);
    }

    #[test]
    fn max_slide_is_count_minus_page_size() {
        let s = state(10, WIDE);
        assert_eq!(s.page_size(), 4);
        assert_eq!(s.max_slide(), 6);
        assert_eq!(s.dot_count(), 7);
    }

    #[test]
    fn slide_stays_in_range_over_arbitrary_command_sequences() {
        let mut s = state(10, WIDE);
        let commands = [
            Command::Next,
            Command::Next,
            Command::GoTo(999),
            Command::ResizeCommit(NARROW),
            Command::Prev,
            Command::GoTo(-5),
            Command::Next,
            Command::ResizeCommit(WIDE),
            Command::Next,
            Command::Next,
            Command::Next,
            Command::Next,
            Command::Next,
            Command::Next,
            Command::Next,
        ];
        for command in commands {
            s.apply(command);
            assert!(s.current_slide() <= s.max_slide());
        }
    }

    #[test]
    fn next_is_noop_at_max_slide() {
        let mut s = state(10, WIDE);
        s.go_to(s.max_slide() as isize);
        assert!(!s.can_next());
        s.next();
        assert_eq!(s.current_slide(), s.max_slide());
    }

    #[test]
    fn prev_is_noop_at_zero() {
        let mut s = state(10, WIDE);
        assert!(!s.can_prev());
        s.prev();
        assert_eq!(s.current_slide(), 0);
    }

    #[test]
    fn go_to_clamps_out_of_range_indices() {
        let mut s = state(10, WIDE);
        s.go_to(-5);
        assert_eq!(s.current_slide(), 0);
        s.go_to(999);
        assert_eq!(s.current_slide(), s.max_slide());
        s.go_to(3);
        assert_eq!(s.current_slide(), 3);
    }

    #[test]
    fn drag_at_or_below_threshold_snaps_back() {
        let mut s = state(10, WIDE);
        s.go_to(2);

        s.drag_start(500.0);
        s.drag_move(500.0 - DRAG_THRESHOLD);
        s.drag_end();
        assert_eq!(s.current_slide(), 2);
        assert!(!s.is_dragging());

        s.drag_start(500.0);
        s.drag_move(500.0 + 10.0);
        s.drag_end();
        assert_eq!(s.current_slide(), 2);
    }

    #[test]
    fn drag_left_past_threshold_advances_one_slide() {
        let mut s = state(10, WIDE);
        s.go_to(2);
        s.drag_start(500.0);
        s.drag_move(500.0 - DRAG_THRESHOLD - 1.0);
        s.drag_end();
        assert_eq!(s.current_slide(), 3);
    }

    #[test]
    fn drag_right_past_threshold_goes_back_one_slide() {
        let mut s = state(10, WIDE);
        s.go_to(2);
        s.drag_start(500.0);
        s.drag_move(500.0 + DRAG_THRESHOLD + 1.0);
        s.drag_end();
        assert_eq!(s.current_slide(), 1);
    }

    #[test]
    fn drag_commit_clamps_at_boundaries() {
        let mut s = state(10, WIDE);
        s.drag_start(500.0);
        s.drag_move(800.0);
        s.drag_end();
        assert_eq!(s.current_slide(), 0);

        s.go_to(s.max_slide() as isize);
        s.drag_start(500.0);
        s.drag_move(100.0);
        s.drag_end();
        assert_eq!(s.current_slide(), s.max_slide());
    }

    #[test]
    fn drag_move_tracks_pointer_without_committing() {
        let mut s = state(10, WIDE);
        s.go_to(1);
        let resting = -s.track_offset();

        s.drag_start(400.0);
        assert_eq!(s.drag_translate(), Some(resting));
        s.drag_move(340.0);
        assert_eq!(s.drag_translate(), Some(resting - 60.0));
        // Still slide 1 until the session ends.
        assert_eq!(s.current_slide(), 1);
    }

    #[test]
    fn drag_end_without_session_is_harmless() {
        let mut s = state(10, WIDE);
        s.drag_end();
        s.drag_move(123.0);
        assert_eq!(s.current_slide(), 0);
        assert!(!s.is_dragging());
    }

    #[test]
    fn resize_from_four_to_one_preserves_position() {
        // N=10, pageSize=4, slide 6 (old maxSlide). Shrinking to pageSize=1
        // grows maxSlide to 9; the slide must not be reset.
        let mut s = state(10, WIDE);
        s.go_to(6);
        s.resize_commit(NARROW);
        assert_eq!(s.page_size(), 1);
        assert_eq!(s.max_slide(), 9);
        assert_eq!(s.current_slide(), 6);
    }

    #[test]
    fn resize_clamps_slide_when_range_shrinks() {
        let mut s = state(10, NARROW);
        s.go_to(9);
        s.resize_commit(WIDE);
        assert_eq!(s.max_slide(), 6);
        assert_eq!(s.current_slide(), 6);
    }

    #[test]
    fn zero_cards_degenerate_to_zero_offsets() {
        let mut s = state(0, WIDE);
        assert_eq!(s.card_width(), 0.0);
        assert_eq!(s.track_offset(), 0.0);
        assert_eq!(s.max_slide(), 0);
        assert_eq!(s.dot_count(), 1);
        s.next();
        s.prev();
        s.drag_start(100.0);
        s.drag_move(400.0);
        s.drag_end();
        assert_eq!(s.current_slide(), 0);
    }

    #[test]
    fn page_size_at_least_card_count_means_single_page() {
        let mut s = state(3, WIDE);
        assert_eq!(s.page_size(), 4);
        assert_eq!(s.max_slide(), 0);
        assert_eq!(s.dot_count(), 1);
        assert!(!s.can_prev());
        assert!(!s.can_next());
        s.next();
        assert_eq!(s.current_slide(), 0);
    }

    #[test]
    fn track_offset_is_slide_times_card_width_plus_gap() {
        let mut s = state(10, WIDE);
        s.go_to(2);
        let expected = 2.0 * (s.card_width() + CARD_GAP);
        assert_eq!(s.track_offset(), expected);
    }

    #[test]
    fn debounce_coalesces_a_burst_into_one_commit() {
        let mut debounce = ResizeDebounce::default();
        let start = Instant::now();

        // Ten observations inside the window; only the last may commit.
        for i in 0..10 {
            let now = start + Duration::from_millis(i * 10);
            debounce.observe(600.0 + i as f32, now);
            assert_eq!(debounce.poll(now), None);
        }

        let last_observed = start + Duration::from_millis(90);
        let before_deadline = last_observed + RESIZE_DEBOUNCE - Duration::from_millis(1);
        assert_eq!(debounce.poll(before_deadline), None);

        let after_deadline = last_observed + RESIZE_DEBOUNCE;
        assert_eq!(debounce.poll(after_deadline), Some(609.0));

        // Committed once; nothing left pending.
        assert!(!debounce.is_pending());
        assert_eq!(debounce.poll(after_deadline + Duration::from_secs(1)), None);
    }

    #[test]
    fn newer_observation_supersedes_pending_one() {
        let mut debounce = ResizeDebounce::default();
        let start = Instant::now();

        debounce.observe(400.0, start);
        let later = start + Duration::from_millis(100);
        debounce.observe(800.0, later);

        // The first deadline passes without a commit.
        assert_eq!(debounce.poll(start + RESIZE_DEBOUNCE), None);
        assert_eq!(debounce.poll(later + RESIZE_DEBOUNCE), Some(800.0));
    }
}
