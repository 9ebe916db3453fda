#[cfg(test)]
mod tests {
    use crate::utils::{SAMPLE_SNAPSHOT, date};
    use growth_tracker::{
        ChartSummary, EntryDraft, GrowthConfig, GrowthError, GrowthSnapshot, Sex,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_snapshot_profile() {
        let snapshot = GrowthSnapshot::from_json_str(SAMPLE_SNAPSHOT).unwrap();
        let config = GrowthConfig::default();

        assert_eq!(snapshot.growth_logs.len(), 5);
        assert_eq!(snapshot.sex().unwrap(), Sex::Female);
        assert_eq!(
            snapshot.birth_date(&config.date_format_config).unwrap(),
            Some(date(2024, 1, 10))
        );
        // The entry with an unreadable date is skipped
        assert_eq!(snapshot.measurements(&config.date_format_config).len(), 4);
    }

    #[test]
    fn test_sample_snapshot_series() {
        let snapshot = GrowthSnapshot::from_json_str(SAMPLE_SNAPSHOT).unwrap();
        let config = GrowthConfig::default();
        let series = snapshot.series(&config, 12, Sex::Female).unwrap();

        assert_eq!(series.len(), 13);
        assert_eq!(series[0].actual_height, Some(50.1));
        assert_eq!(series[0].actual_head_circumference, Some(34.5));
        assert!(series[0].validation.unwrap().is_normal());
        assert_eq!(series[3].actual_weight, Some(6.2));
        assert_eq!(series[6].actual_height, Some(66.0));
        assert!(series[6].validation.is_none());

        let month_12 = series[12].validation.unwrap();
        assert!(month_12.height_normal);
        assert!(!month_12.weight_normal);

        let summary = ChartSummary::from_series(&series);
        assert_eq!(summary.measured_months, 4);
        assert_eq!(summary.flagged_months, vec![12]);
        assert_eq!(summary.latest_actual.map(|p| p.month), Some(12));
    }

    #[test]
    fn test_series_without_birth_date() {
        let mut snapshot = GrowthSnapshot::from_json_str(SAMPLE_SNAPSHOT).unwrap();
        snapshot.baby_dob = None;
        let series = snapshot.series(&GrowthConfig::default(), 6, Sex::Male).unwrap();
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|p| !p.has_actual()));
    }

    #[test]
    fn test_invalid_profile_values() {
        let mut snapshot = GrowthSnapshot::default();
        snapshot.baby_gender = Some("unicorn".to_string());
        snapshot.baby_dob = Some("yesterday".to_string());
        assert!(matches!(snapshot.sex(), Err(GrowthError::InvalidEntry(_))));
        assert!(matches!(
            snapshot.birth_date(&GrowthConfig::default().date_format_config),
            Err(GrowthError::DateParsing(_))
        ));
        assert!(snapshot.series(&GrowthConfig::default(), 6, Sex::Male).is_err());
    }

    #[test]
    fn test_edit_entries() {
        let mut snapshot = GrowthSnapshot::default();
        snapshot.set_birth_date(date(2024, 2, 1));
        snapshot.set_sex(Sex::Female);

        let id = snapshot
            .add_entry(EntryDraft::new("2024-03-02", "55.0", "4.3").with_comment("first visit"))
            .unwrap();
        assert!(matches!(
            snapshot.add_entry(EntryDraft::new("", "55.0", "4.3")),
            Err(GrowthError::InvalidEntry(_))
        ));

        snapshot
            .update_entry(id, EntryDraft::new("2024-03-02", "55.5", "4.4").with_head("37"))
            .unwrap();
        let entry = snapshot.entry(id).unwrap();
        assert_eq!(entry.height, "55.5");
        assert_eq!(entry.head, "37");
        assert_eq!(entry.comment, "");

        let removed = snapshot.delete_entry(id).unwrap();
        assert_eq!(removed.id, id);
        assert!(snapshot.growth_logs.is_empty());
    }

    #[test]
    fn test_save_and_load_through_file() {
        let mut snapshot = GrowthSnapshot::default();
        snapshot.set_birth_date(date(2023, 11, 5));
        snapshot.set_sex(Sex::Male);
        snapshot.add_entry(EntryDraft::new("2024-01-06", "57.9", "5.5")).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("growth.json");
        snapshot.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"growthLogs\""));
        assert!(raw.contains("\"babyDOB\": \"2023-11-05\""));
        assert!(raw.contains("\"babyGender\": \"male\""));

        let loaded = GrowthSnapshot::load(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_unknown_entry_fields_round_trip() {
        let snapshot = GrowthSnapshot::from_json_str(SAMPLE_SNAPSHOT).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("growth.json");
        snapshot.save(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["growthLogs"][1]["whoHeight"], "53.5");
        assert_eq!(raw["growthLogs"][1]["whoWeight"], "5.0");
        assert!(raw["growthLogs"][0].get("whoHeight").is_none());

        let loaded = GrowthSnapshot::load(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GrowthSnapshot::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GrowthError::Io(_)));
    }
}
