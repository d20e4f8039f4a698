mod tests {
    use ws2811_fader::{ChangeTracker, Pixel, PixelStore, Rgb};

    #[test]
    fn test_store_init() {
        let mut store = PixelStore::<5>::new();
        assert!(store.is_empty());
        store.init(5);
        assert_eq!(store.len(), 5);
        assert_eq!(store.get(4), Some(&Pixel::new()));
        assert_eq!(store.get(5), None);

        store.set_target(0, Rgb { r: 9, g: 9, b: 9 }, 1024, 0);
        store.init(2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.current(0), Some(Rgb::default()));
    }

    #[test]
    fn test_init_capped_at_capacity() {
        let mut store = PixelStore::<3>::new();
        store.init(usize::MAX);
        assert_eq!(store.len(), 3);
        assert!(store.colors().all(|color| color == Rgb::default()));
        store.init(0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_target_scales_brightness() {
        let mut store = PixelStore::<2>::new();
        store.init(2);
        assert!(store.set_target(1, Rgb { r: 255, g: 128, b: 0 }, 1023, 7));

        let pixel = store.get(1).unwrap();
        assert_eq!(pixel.target, Rgb { r: 254, g: 127, b: 0 });
        assert_eq!(pixel.current, Rgb::default());
        assert_eq!(pixel.start, Rgb::default());
        assert_eq!(pixel.total, 7);
        assert_eq!(pixel.remaining(), 7);
        assert!(store.is_fading());
    }

    #[test]
    fn test_zero_duration_assigns() {
        let mut store = PixelStore::<1>::new();
        store.init(1);
        store.set_target(0, Rgb { r: 255, g: 0, b: 0 }, 1023, 9);
        store.set_target(0, Rgb { r: 0, g: 255, b: 255 }, 1023, 0);

        let pixel = store.get(0).unwrap();
        assert_eq!(pixel.current, Rgb { r: 0, g: 254, b: 254 });
        assert_eq!(pixel.start, pixel.current);
        assert_eq!(pixel.target, pixel.current);
        assert!(!pixel.is_fading());
    }

    #[test]
    fn test_out_of_range_target() {
        let mut store = PixelStore::<4>::new();
        store.init(2);
        assert!(!store.set_target(2, Rgb { r: 1, g: 1, b: 1 }, 1023, 0));
        assert!(store.colors().all(|color| color == Rgb::default()));
    }

    #[test]
    fn test_set_all() {
        let mut store = PixelStore::<3>::new();
        store.init(3);
        store.set_all(Rgb { r: 255, g: 255, b: 255 }, 800, 200);
        for index in 0..3 {
            let pixel = store.get(index).unwrap();
            assert_eq!(pixel.target, Rgb { r: 199, g: 199, b: 199 });
            assert_eq!(pixel.total, 200);
        }
    }

    #[test]
    fn test_finish() {
        let mut pixel = Pixel::new();
        pixel.retarget(Rgb { r: 3, g: 2, b: 1 }, 4);
        assert!(pixel.finish());
        assert_eq!(pixel.current, Rgb { r: 3, g: 2, b: 1 });
        assert!(!pixel.finish());
    }

    #[test]
    fn test_change_tracker() {
        let mut tracker = ChangeTracker::new();
        let mut sent = 0;
        assert!(!tracker.flush_with(|| sent += 1));
        assert_eq!(sent, 0);

        tracker.mark();
        assert!(tracker.is_dirty());
        assert!(tracker.flush_with(|| sent += 1));
        assert_eq!(sent, 1);
        assert!(!tracker.is_dirty());

        tracker.mark();
        tracker.clear();
        assert!(!tracker.flush_with(|| sent += 1));
        assert_eq!(sent, 1);
    }
}
