mod tests {
    use striptease_shows::{Duration, Instant, ModeController, ModeControllerConfig};

    const DEBOUNCE_MS: u64 = 500;

    fn controller(max_mode: u8) -> ModeController {
        ModeController::new(ModeControllerConfig {
            max_mode,
            debounce: Duration::from_millis(DEBOUNCE_MS),
        })
    }

    #[test]
    fn test_default_config() {
        let config = ModeControllerConfig::default();
        assert_eq!(config.max_mode, 9);
        assert_eq!(config.debounce, Duration::from_millis(500));

        let modes = ModeController::default();
        assert_eq!(modes.current_mode(), 0);
        assert!(!modes.mode_changed());
    }

    #[test]
    fn test_bounce_inside_window_is_ignored() {
        let modes = controller(9);
        assert!(modes.on_edge(Instant::from_millis(1_000)));
        assert!(!modes.on_edge(Instant::from_millis(1_200)));
        assert!(!modes.on_edge(Instant::from_millis(1_499)));
        assert_eq!(modes.current_mode(), 1);
    }

    #[test]
    fn test_edges_a_window_apart_both_count() {
        let modes = controller(9);
        assert!(modes.on_edge(Instant::from_millis(1_000)));
        assert!(modes.on_edge(Instant::from_millis(1_500)));
        assert_eq!(modes.current_mode(), 2);
    }

    #[test]
    fn test_window_restarts_from_last_accepted_edge() {
        let modes = controller(9);
        assert!(modes.on_edge(Instant::from_millis(1_000)));
        assert!(!modes.on_edge(Instant::from_millis(1_400)));
        // 1_400 was a bounce, so the window still ends at 1_500
        assert!(modes.on_edge(Instant::from_millis(1_500)));
        assert_eq!(modes.current_mode(), 2);
    }

    #[test]
    fn test_edges_right_after_boot_are_bounces() {
        let modes = controller(9);
        assert!(!modes.on_edge(Instant::from_millis(100)));
        assert_eq!(modes.current_mode(), 0);
        assert!(!modes.mode_changed());
    }

    #[test]
    fn test_mode_wraps_after_max() {
        let modes = controller(2);
        let mut now = 1_000;
        let mut seen = [0u8; 4];
        for slot in &mut seen {
            assert!(modes.on_edge(Instant::from_millis(now)));
            *slot = modes.current_mode();
            now += DEBOUNCE_MS;
        }
        assert_eq!(seen, [1, 2, 0, 1]);
    }

    #[test]
    fn test_accepted_edge_raises_signal() {
        let modes = controller(9);
        assert!(modes.on_edge(Instant::from_millis(1_000)));
        assert!(modes.mode_changed());
        assert!(modes.signal().is_raised());

        modes.signal().clear();
        assert!(!modes.on_edge(Instant::from_millis(1_100)));
        assert!(!modes.mode_changed());
    }

    #[test]
    fn test_unrepresentable_window_drops_edge() {
        let modes = controller(9);
        let end_of_time = Instant::from_ticks(u64::MAX);
        assert!(modes.on_edge(end_of_time));
        assert_eq!(modes.current_mode(), 1);

        modes.signal().clear();
        assert!(!modes.on_edge(end_of_time));
        assert_eq!(modes.current_mode(), 1);
        assert!(!modes.mode_changed());
    }

    #[test]
    fn test_controller_in_static() {
        static MODES: ModeController = ModeController::new(ModeControllerConfig::DEFAULT);
        assert_eq!(MODES.config().max_mode, 9);
        assert_eq!(MODES.current_mode(), 0);
    }
}
