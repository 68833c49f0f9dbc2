#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;
use rp_pico::hal as _;

#[defmt_test::tests]
mod tests {
    use lm35_monitor::format::format_celsius;
    use lm35_monitor::sensor::{raw_to_celsius, round_hundredths};
    use num_traits::float::FloatCore;

    #[test]
    fn matches_reference_formula() {
        for raw in [0u16, 1, 655, 13401, 32768, 65535] {
            let expected = ((raw as f32 / 65536.0) * 3.3 - 0.0330) * 1000.0 / 10.0;
            assert!(raw_to_celsius(raw) == expected, "raw = {}", raw);
        }
    }

    #[test]
    fn grounded_input_reads_below_zero() {
        // 0 V in minus the diode offset comes out at -3.3 degrees
        let meas = raw_to_celsius(0);
        debug_assert!(f32::abs(meas - -3.3) < 1e-4, "meas = {}°C", meas);
    }

    #[test]
    fn mid_scale_sample() {
        let meas = round_hundredths(raw_to_celsius(13401));
        debug_assert!(f32::abs(meas - 64.18) < 1e-3, "meas = {}°C", meas);
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        for (value, rounded) in [
            (64.1805f32, 64.18f32),
            (64.156, 64.16),
            (-3.299999, -3.3),
            (0.004, 0.0),
            (21.5, 21.5),
        ] {
            let res = round_hundredths(value);
            debug_assert!(
                f32::abs(res - rounded) < 1e-4,
                "round({}) = {}",
                value,
                res
            );
        }
    }

    #[test]
    fn format_two_decimals() {
        let res = format_celsius(64.18);
        assert_eq!(res.as_str(), "64.18");
    }

    #[test]
    fn format_trims_trailing_zero() {
        let res = format_celsius(64.5);
        assert_eq!(res.as_str(), "64.5");
    }

    #[test]
    fn format_whole_number_keeps_one_decimal() {
        let res = format_celsius(64.0);
        assert_eq!(res.as_str(), "64.0");
    }

    #[test]
    fn format_negative() {
        let res = format_celsius(-3.3);
        assert_eq!(res.as_str(), "-3.3");
    }

    #[test]
    fn format_small_fraction() {
        let res = format_celsius(0.05);
        assert_eq!(res.as_str(), "0.05");
    }
}
