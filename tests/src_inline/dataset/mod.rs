use super::*;
use crate::model::levels::AlertLevel;
use crate::profiles::loader::load_builtin;

fn meteo() -> (RegionDataset, ThresholdTable) {
    let profile = load_builtin("meteo").expect("meteo");
    let dataset = RegionDataset::from_profile(&profile).expect("dataset");
    (dataset, profile.thresholds())
}

fn values(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn builds_rows_in_declaration_order() {
    let (ds, _) = meteo();
    assert_eq!(ds.len(), 10);
    assert_eq!(
        ds.parameters(),
        &["Température".to_string(), "Vent".to_string(), "Précipitations".to_string()]
    );
    assert_eq!(ds.names().next(), Some("Extrême-Nord"));
    let centre = ds.select("Centre").unwrap();
    assert_eq!(centre.values, vec![31.0, 8.0, 85.0]);
    assert_eq!(centre.latitude, 4.75);
}

#[test]
fn select_unknown_region() {
    let (ds, _) = meteo();
    assert_eq!(
        ds.select("Atlantis").unwrap_err(),
        DatasetError::NotFound("Atlantis".to_string())
    );
}

#[test]
fn update_touches_only_named_region_and_parameter() {
    let (mut ds, _) = meteo();
    let before = ds.clone();
    ds.update("Centre", &values(&[("Température", 40.0)])).unwrap();

    for (old, new) in before.regions().iter().zip(ds.regions()) {
        if new.name == "Centre" {
            assert_eq!(new.values, vec![40.0, old.values[1], old.values[2]]);
            assert_eq!(new.impact, old.impact);
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn rejected_update_leaves_dataset_untouched() {
    let (mut ds, _) = meteo();
    let before = ds.clone();

    let err = ds
        .update("Centre", &values(&[("Température", 40.0), ("Humidité", 3.0)]))
        .unwrap_err();
    assert_eq!(err, DatasetError::UnknownParameter("Humidité".to_string()));
    assert_eq!(ds, before);

    let err = ds
        .update("Centre", &values(&[("Vent", f64::INFINITY)]))
        .unwrap_err();
    assert!(matches!(err, DatasetError::NonFinite { .. }));
    assert_eq!(ds, before);

    let err = ds.update("Atlantis", &values(&[("Vent", 1.0)])).unwrap_err();
    assert_eq!(err, DatasetError::NotFound("Atlantis".to_string()));
}

#[test]
fn implausible_values_are_accepted() {
    let (mut ds, table) = meteo();
    ds.update("Sud", &values(&[("Température", -60.0)])).unwrap();
    let view = ds.classified_view(&table).unwrap();
    let cell = view.row("Sud").unwrap().cell("Température").unwrap();
    assert_eq!(cell.level, AlertLevel::Green);
    assert!(cell.fallback);
}

#[test]
fn classified_view_is_idempotent_and_tracks_updates() {
    let (mut ds, table) = meteo();
    let first = ds.classified_view(&table).unwrap();
    let second = ds.classified_view(&table).unwrap();
    assert_eq!(first, second);

    let centre = first.row("Centre").unwrap();
    assert_eq!(centre.cell("Température").unwrap().level, AlertLevel::Orange);
    assert_eq!(centre.cell("Vent").unwrap().level, AlertLevel::Green);
    assert_eq!(centre.cell("Précipitations").unwrap().level, AlertLevel::Orange);

    ds.update("Centre", &values(&[("Température", 40.0)])).unwrap();
    let third = ds.classified_view(&table).unwrap();
    assert_eq!(
        third.row("Centre").unwrap().cell("Température").unwrap().level,
        AlertLevel::Red
    );
    assert_eq!(third.fallback_count(), 0);
}

#[test]
fn level_counts_cover_every_level() {
    let (ds, table) = meteo();
    let view = ds.classified_view(&table).unwrap();
    let counts = view.level_counts("Vent");
    assert_eq!(counts.len(), 4);
    assert_eq!(counts[&AlertLevel::Green], 8);
    assert_eq!(counts[&AlertLevel::Yellow], 2);
    assert_eq!(counts[&AlertLevel::Red], 0);
}

#[test]
fn classified_view_needs_matching_table() {
    let (ds, _) = meteo();
    let other = load_builtin("pluvio").unwrap().thresholds();
    assert!(matches!(
        ds.classified_view(&other),
        Err(DatasetError::Classify(ClassifyError::UnknownParameter(_)))
    ));
}

fn row(name: &str, values: Vec<f64>) -> Region {
    Region {
        name: name.to_string(),
        latitude: 0.0,
        longitude: 0.0,
        values,
        impact: String::new(),
    }
}

#[test]
fn new_rejects_rows_with_wrong_value_count() {
    let params = vec!["A".to_string(), "B".to_string()];

    let short = RegionDataset::new(params.clone(), vec![row("R", vec![1.0])]);
    assert_eq!(
        short.unwrap_err(),
        DatasetError::MissingValue {
            region: "R".to_string(),
            parameter: "B".to_string()
        }
    );

    let long = RegionDataset::new(params.clone(), vec![row("R", vec![1.0, 2.0, 3.0])]);
    assert_eq!(
        long.unwrap_err(),
        DatasetError::ValueCount {
            region: "R".to_string(),
            expected: 2,
            found: 3
        }
    );

    let mut ok = RegionDataset::new(params, vec![row("R", vec![1.0, 2.0])]).unwrap();
    ok.update("R", &values(&[("B", 5.0)])).unwrap();
    assert_eq!(ok.select("R").unwrap().values, vec![1.0, 5.0]);
}
