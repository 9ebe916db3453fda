#[cfg(test)]
mod tests {
    use crate::utils::date;
    use chrono::Days;
    use growth_tracker::{
        ChartSummary, GrowthConfig, Measurement, NormalityThresholds, SeriesBuilder, Sex,
        build_series,
    };
    use proptest::prelude::*;

    fn measurements() -> impl Strategy<Value = Vec<Measurement>> {
        prop::collection::vec(
            (0u64..2_500, prop::option::of(40.0f64..120.0), prop::option::of(2.0f64..25.0)),
            0..12,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(offset, height, weight)| {
                    let mut m = Measurement::new(date(2020, 1, 1) + Days::new(offset));
                    m.height = height;
                    m.weight = weight;
                    m
                })
                .collect()
        })
    }

    #[test]
    fn test_validation_attached_to_complete_pairs() {
        let birth = date(2023, 2, 1);
        let measurements = vec![
            Measurement::new(date(2024, 8, 3)).with_height(80.0).with_weight(11.0),
            Measurement::new(date(2023, 5, 1)).with_weight(6.0),
        ];
        let series = build_series(24, Sex::Male, &measurements, birth);

        let month_18 = &series[18];
        assert_eq!(month_18.reference_height, 82.3);
        let validation = month_18.validation.expect("both values recorded");
        assert!((validation.height_percent_diff - 2.7946).abs() < 1e-3);
        assert!(validation.height_normal);
        assert!(validation.weight_normal);

        let month_3 = &series[3];
        assert_eq!(month_3.actual_weight, Some(6.0));
        assert_eq!(month_3.actual_height, None);
        assert!(month_3.validation.is_none());
    }

    #[test]
    fn test_configured_thresholds_are_used() {
        let config = GrowthConfig {
            thresholds: NormalityThresholds {
                height_percent: 1.0,
                weight_percent: 1.0,
            },
            ..GrowthConfig::default()
        };
        let birth = date(2023, 2, 1);
        let measurements = vec![Measurement::new(date(2024, 8, 3)).with_height(80.0).with_weight(11.0)];
        let series = SeriesBuilder::from_config(&config).build(20, Sex::Male, &measurements, birth);

        let validation = series[18].validation.unwrap();
        assert!(!validation.height_normal);
        assert_eq!(ChartSummary::from_series(&series).flagged_months, vec![18]);
    }

    #[test]
    fn test_zero_horizon() {
        let series = build_series(0, Sex::Female, &[], date(2024, 1, 1));
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].month, 0);
        assert_eq!(series[0].reference_weight, 3.2);
    }

    proptest! {
        #[test]
        fn prop_one_point_per_month(max_months in 0u32..100, input in measurements()) {
            let series = build_series(max_months, Sex::Male, &input, date(2020, 1, 1));
            prop_assert_eq!(series.len(), max_months as usize + 1);
            for (idx, point) in series.iter().enumerate() {
                prop_assert_eq!(point.month as usize, idx);
                prop_assert!(point.reference_height > 0.0 && point.reference_weight > 0.0);
                prop_assert_eq!(
                    point.validation.is_some(),
                    point.actual_height.is_some() && point.actual_weight.is_some()
                );
            }
        }

        #[test]
        fn prop_build_is_idempotent(max_months in 0u32..80, input in measurements()) {
            let birth = date(2020, 1, 1);
            let first = build_series(max_months, Sex::Female, &input, birth);
            let second = build_series(max_months, Sex::Female, &input, birth);
            prop_assert_eq!(first, second);
        }
    }
}
