#[cfg(test)]
mod tests {
    use growth_tracker::reference::{MAX_TABULATED_MONTH, median_table};
    use growth_tracker::{ExtrapolationRates, Metric, Sex, WhoReference, evaluate};
    use proptest::prelude::*;

    fn metric_and_sex() -> impl Strategy<Value = (Metric, Sex)> {
        (
            prop_oneof![Just(Metric::Height), Just(Metric::Weight)],
            prop_oneof![Just(Sex::Male), Just(Sex::Female)],
        )
    }

    #[test]
    fn test_every_tabulated_age_is_exact() {
        for metric in [Metric::Height, Metric::Weight] {
            for sex in [Sex::Male, Sex::Female] {
                for &(month, value) in median_table(metric, sex) {
                    let age = i32::try_from(month).unwrap();
                    assert_eq!(evaluate(metric, age, sex), value, "{metric:?}/{sex:?} at {month}");
                }
            }
        }
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(evaluate(Metric::Height, 9, Sex::Male), 72.0);
        assert_eq!(evaluate(Metric::Weight, 9, Sex::Male), 8.9);

        let height = evaluate(Metric::Height, 13, Sex::Male);
        assert!((height - 76.833_333_333).abs() < 1e-6, "got {height}");
        let weight = evaluate(Metric::Weight, 13, Sex::Male);
        assert!((weight - 9.833_333_333).abs() < 1e-6, "got {weight}");

        let extrapolated = evaluate(Metric::Height, 72, Sex::Female);
        assert!((extrapolated - 112.6).abs() < 1e-9, "got {extrapolated}");
    }

    proptest! {
        #[test]
        fn prop_interpolation_stays_between_neighbours(
            (metric, sex) in metric_and_sex(),
            age in 0u32..MAX_TABULATED_MONTH,
        ) {
            let table = median_table(metric, sex);
            prop_assume!(table.binary_search_by_key(&age, |(m, _)| *m).is_err());

            let upper = table.iter().position(|(m, _)| *m > age).unwrap();
            let (_, lower_value) = table[upper - 1];
            let (_, upper_value) = table[upper];
            let value = evaluate(metric, i32::try_from(age).unwrap(), sex);

            prop_assert!(value > lower_value && value < upper_value,
                "{value} not within ({lower_value}, {upper_value})");
        }

        #[test]
        fn prop_extrapolation_follows_rate(
            (metric, sex) in metric_and_sex(),
            age in 61i32..600,
        ) {
            let rate = ExtrapolationRates::default().rate(metric, sex);
            let expected = evaluate(metric, 60, sex) + f64::from(age - 60) * rate;
            prop_assert!((evaluate(metric, age, sex) - expected).abs() < 1e-9);
        }

        #[test]
        fn prop_negative_ages_clamp(
            (metric, sex) in metric_and_sex(),
            age in i32::MIN..0,
        ) {
            prop_assert_eq!(evaluate(metric, age, sex), evaluate(metric, 0, sex));
        }

        #[test]
        fn prop_curves_are_monotone(
            (metric, sex) in metric_and_sex(),
            age in 0i32..120,
        ) {
            let reference = WhoReference::default();
            prop_assert!(reference.evaluate(metric, age + 1, sex) > reference.evaluate(metric, age, sex));
        }
    }
}
