//! Property tests for cadence labels and parsing.

use goalhabit_core::{Cadence, CadenceMode};
use proptest::prelude::*;

proptest! {
    #[test]
    fn label_is_never_empty(days in 1u32..400, times in 1u32..50) {
        prop_assert!(!Cadence::new(days, times).label().is_empty());
    }

    #[test]
    fn single_occurrence_is_every_n_days(days in 2u32..400) {
        prop_assert_eq!(Cadence::new(days, 1).label(), format!("Каждые {} дней", days));
    }

    #[test]
    fn weekly_and_monthly_use_named_periods(times in 2u32..50) {
        prop_assert_eq!(Cadence::new(7, times).label(), format!("{} раз в неделю", times));
        prop_assert_eq!(Cadence::new(30, times).label(), format!("{} раз в месяц", times));
    }

    #[test]
    fn custom_form_parses_back(days in 1u32..400, times in 1u32..50) {
        let parsed: Cadence = format!("{times}/{days}").parse().unwrap();
        prop_assert_eq!(parsed, Cadence::new(days, times));
        prop_assert_eq!(Cadence::from(parsed.mode()), parsed);
    }

    #[test]
    fn zero_components_are_invalid(n in 0u32..50) {
        prop_assert!(Cadence::new(0, n).validate().is_err());
        prop_assert!(Cadence::new(n, 0).validate().is_err());
    }
}

#[test]
fn daily_mode() {
    assert_eq!(Cadence::DAILY.mode(), CadenceMode::Daily);
}
