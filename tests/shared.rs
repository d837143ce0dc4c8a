mod tests {
    use ws2812_pwm_stream::{Error, PwmDma, Rgb, SharedWs2812, State, TransferEvent, Ws2812};

    #[derive(Default)]
    struct CountingBackend {
        starts: usize,
        stops: usize,
    }

    impl PwmDma for CountingBackend {
        fn start(&mut self, _duty_codes: &[u32]) {
            self.starts += 1;
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    #[test]
    fn operations_work_through_the_shared_handle() {
        let mut pixels = [Rgb::default(); 3];
        let shared = SharedWs2812::new(Ws2812::new(CountingBackend::default(), &mut pixels));

        shared.with(|driver| driver.pixels_mut()[0] = Rgb::new(32, 0, 64));

        shared.update().unwrap();
        assert_eq!(shared.update(), Err(Error::Busy));
        assert!(shared.status() < 0);

        shared.on_transfer_event(TransferEvent::HalfComplete);
        shared.on_transfer_event(TransferEvent::Complete);
        shared.on_transfer_event(TransferEvent::HalfComplete);
        shared.on_transfer_event(TransferEvent::Complete);

        assert_eq!(shared.status(), 0);
        assert_eq!(shared.with(|driver| driver.state()), State::Idle);
        assert_eq!(shared.with(|driver| driver.backend().starts), 1);
        assert_eq!(shared.with(|driver| driver.backend().stops), 1);
    }

    #[test]
    fn abort_through_the_shared_handle() {
        let mut pixels = [Rgb::default(); 2];
        let shared = SharedWs2812::new(Ws2812::new(CountingBackend::default(), &mut pixels));

        assert_eq!(shared.abort(), Err(Error::NotRunning));
        shared.update().unwrap();
        shared.abort().unwrap();
        assert_eq!(shared.status(), 0);
        assert_eq!(shared.with(|driver| driver.backend().stops), 1);
    }
}
