// ═══════════════════════════════════════════════════════════════════
// Format Tests — price, 24h change, and grouped display forms.
// The price formatter is user-facing and boundary-sensitive, so every
// magnitude band and its edges get pinned down here.
// ═══════════════════════════════════════════════════════════════════

use crypto_dashboard_core::format::{format_change_24h, format_grouped, format_price};

// ── format_price: abbreviated bands ─────────────────────────────────

mod abbreviated {
    use super::*;

    #[test]
    fn millions() {
        assert_eq!(format_price(1_500_000.0), "$1.50M");
        assert_eq!(format_price(1_000_000.0), "$1.00M");
        assert_eq!(format_price(73_249_000.0), "$73.25M");
    }

    #[test]
    fn thousands() {
        assert_eq!(format_price(1_000.0), "$1.00K");
        assert_eq!(format_price(42_000.5), "$42.00K");
        assert_eq!(format_price(999_000.0), "$999.00K");
    }

    #[test]
    fn just_below_a_million_stays_in_thousands() {
        assert_eq!(format_price(999_999.0), "$1000.00K");
    }
}

// ── format_price: standard band [1, 1000) ───────────────────────────

mod standard {
    use super::*;

    #[test]
    fn two_decimals() {
        assert_eq!(format_price(1.0), "$1.00");
        assert_eq!(format_price(42.421), "$42.42");
        assert_eq!(format_price(999.0), "$999.00");
    }

    #[test]
    fn boundary_just_below_one_thousand() {
        // 999.995 lands just above the decimal midpoint in binary, so
        // two decimals round it up to 1000.00 while the value itself
        // still misses the K band.
        assert_eq!(format_price(999.995), "$1000.00");
    }
}

// ── format_price: sub-dollar bands ──────────────────────────────────

mod sub_dollar {
    use super::*;

    #[test]
    fn four_decimals_down_to_a_cent() {
        assert_eq!(format_price(0.5), "$0.5000");
        assert_eq!(format_price(0.4219), "$0.4219");
        assert_eq!(format_price(0.01), "$0.0100");
    }

    #[test]
    fn adaptive_precision_below_a_cent() {
        // Leading zeros + 2 significant digits, floor of 6 decimals.
        assert_eq!(format_price(0.0099), "$0.009900");
        assert_eq!(format_price(0.002), "$0.002000");
        assert_eq!(format_price(0.0000032), "$0.0000032");
    }

    #[test]
    fn adaptive_precision_widens_near_the_micro_boundary() {
        // One micro is the last value on the adaptive path; below it the
        // formatter switches to exponential.
        assert_eq!(format_price(0.000001), "$0.0000010");
        assert_eq!(format_price(0.0000099), "$0.0000099");
    }

    #[test]
    fn exponential_below_one_micro() {
        assert_eq!(format_price(0.00000032), "$3.20e-7");
        assert_eq!(format_price(0.0000001), "$1.00e-7");
        assert_eq!(format_price(0.000000055), "$5.50e-8");
    }
}

// ── format_price: fallback ──────────────────────────────────────────

mod fallback {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn negative() {
        assert_eq!(format_price(-5.0), "$0.00");
    }

    #[test]
    fn non_numeric() {
        assert_eq!(format_price(f64::NAN), "$0.00");
        assert_eq!(format_price(f64::INFINITY), "$0.00");
        assert_eq!(format_price(f64::NEG_INFINITY), "$0.00");
    }
}

// ── format_change_24h ───────────────────────────────────────────────

mod change {
    use super::*;

    #[test]
    fn positive_gets_explicit_plus() {
        assert_eq!(format_change_24h(1.254), "+1.25%");
        assert_eq!(format_change_24h(0.0), "+0.00%");
    }

    #[test]
    fn negative_keeps_its_sign() {
        assert_eq!(format_change_24h(-0.5), "-0.50%");
        assert_eq!(format_change_24h(-12.345), "-12.35%");
    }
}

// ── format_grouped ──────────────────────────────────────────────────

mod grouped {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(1_234_567.0), "1,234,567");
        assert_eq!(format_grouped(1_000.0), "1,000");
        assert_eq!(format_grouped(999.0), "999");
    }

    #[test]
    fn zero_and_small() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(42.0), "42");
    }

    #[test]
    fn negative() {
        assert_eq!(format_grouped(-1_234_567.0), "-1,234,567");
    }

    #[test]
    fn non_finite_falls_back_to_zero() {
        assert_eq!(format_grouped(f64::NAN), "0");
    }
}
