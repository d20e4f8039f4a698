mod tests {
    use embassy_time::Duration;
    use ws2811_fader::{TickCounter, TickScheduler};

    #[test]
    fn test_whole_ticks_only() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(10));
        assert_eq!(scheduler.consume(0), 0);
        assert_eq!(scheduler.consume(9), 0);
        assert_eq!(scheduler.consume(10), 1);
        assert_eq!(scheduler.consume(19), 0);
        assert_eq!(scheduler.consume(20), 1);
    }

    #[test]
    fn test_catch_up_keeps_remainder() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(10));
        scheduler.reset(0);
        assert_eq!(scheduler.consume(35), 3);
        assert_eq!(scheduler.last(), 30);
        // The 5 ms remainder counts towards the next tick
        assert_eq!(scheduler.consume(40), 1);
        assert_eq!(scheduler.last(), 40);
    }

    #[test]
    fn test_no_drift() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(10));
        scheduler.reset(0);
        let mut total = 0;
        let mut now = 0u32;
        for _ in 0..1000 {
            now += 13;
            total += scheduler.consume(now);
        }
        assert_eq!(total, 13_000 / 10);
    }

    #[test]
    fn test_counter_wraparound() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(10));
        scheduler.reset(u32::MAX - 14);
        assert_eq!(scheduler.consume(u32::MAX - 4), 1);
        // 5 ms before the wrap, 20 ms after it
        assert_eq!(scheduler.consume(20), 2);
        assert_eq!(scheduler.last(), 15);
    }

    #[test]
    fn test_first_poll_anchors() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(10));
        assert!(!scheduler.is_anchored());
        assert_eq!(scheduler.consume(123_456), 0);
        assert!(scheduler.is_anchored());
        assert_eq!(scheduler.last(), 123_456);
        assert_eq!(scheduler.consume(123_486), 3);

        scheduler.unanchor();
        assert_eq!(scheduler.consume(900_000), 0);
        assert_eq!(scheduler.consume(900_010), 1);
    }

    #[test]
    fn test_default_period() {
        let scheduler = TickScheduler::default();
        assert_eq!(scheduler.period_ms(), 10);
        assert_eq!(TickScheduler::new(Duration::from_micros(100)).period_ms(), 1);
    }

    #[test]
    fn test_tick_counter() {
        static COUNTER: TickCounter = TickCounter::new();
        assert_eq!(COUNTER.now(), 0);
        for _ in 0..25 {
            COUNTER.increment();
        }
        assert_eq!(COUNTER.now(), 25);

        COUNTER.advance(u32::MAX);
        assert_eq!(COUNTER.now(), 24);
    }
}
