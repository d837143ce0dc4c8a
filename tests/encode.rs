mod tests {
    use ws2812_pwm_stream::Rgb;
    use ws2812_pwm_stream::encode::{encode_frame, encode_reset};
    use ws2812_pwm_stream::timing::{FRAME_LEN, ONE_CODE, ZERO_CODE};

    #[test]
    fn black_pixel_encodes_to_all_zero_codes() {
        let mut slot = [0u32; FRAME_LEN];
        encode_frame(&mut slot, Rgb::new(0, 0, 0));
        assert_eq!(slot, [ZERO_CODE; FRAME_LEN]);
    }

    #[test]
    fn white_pixel_encodes_to_all_one_codes() {
        let mut slot = [0u32; FRAME_LEN];
        encode_frame(&mut slot, Rgb::new(255, 255, 255));
        assert_eq!(slot, [ONE_CODE; FRAME_LEN]);
    }

    #[test]
    fn channels_map_to_grb_offsets_msb_first() {
        // r = 0b10101010, g = 0b01010101, b = 0
        let mut slot = [0u32; FRAME_LEN];
        encode_frame(&mut slot, Rgb::new(170, 85, 0));

        // green occupies the first eight codes
        for (bit, code) in slot[0..8].iter().enumerate() {
            let expected = if bit % 2 == 1 { ONE_CODE } else { ZERO_CODE };
            assert_eq!(*code, expected, "green bit {bit}");
        }
        // red the next eight
        for (bit, code) in slot[8..16].iter().enumerate() {
            let expected = if bit % 2 == 0 { ONE_CODE } else { ZERO_CODE };
            assert_eq!(*code, expected, "red bit {bit}");
        }
        // blue the last eight
        assert_eq!(slot[16..24], [ZERO_CODE; 8]);
    }

    #[test]
    fn single_channel_colors_land_in_their_own_slot_range() {
        let mut slot = [0u32; FRAME_LEN];
        encode_frame(&mut slot, Rgb::new(255, 0, 0));
        assert_eq!(slot[0..8], [ZERO_CODE; 8]);
        assert_eq!(slot[8..16], [ONE_CODE; 8]);
        assert_eq!(slot[16..24], [ZERO_CODE; 8]);

        encode_frame(&mut slot, Rgb::new(0, 0, 255));
        assert_eq!(slot[0..8], [ZERO_CODE; 8]);
        assert_eq!(slot[8..16], [ZERO_CODE; 8]);
        assert_eq!(slot[16..24], [ONE_CODE; 8]);
    }

    #[test]
    fn reset_block_is_all_off_codes() {
        let mut slot = [0u32; FRAME_LEN];
        encode_frame(&mut slot, Rgb::new(255, 255, 255));
        encode_reset(&mut slot);
        assert_eq!(slot, [0; FRAME_LEN]);
    }
}
