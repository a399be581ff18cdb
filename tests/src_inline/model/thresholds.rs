use super::*;
use crate::profiles::loader::load_builtin;

fn meteo() -> ThresholdTable {
    load_builtin("meteo").expect("meteo profile").thresholds()
}

fn pluvio() -> ThresholdTable {
    load_builtin("pluvio").expect("pluvio profile").thresholds()
}

fn level(table: &ThresholdTable, value: f64, parameter: &str) -> AlertLevel {
    table.classify(value, parameter).expect("classify").level
}

#[test]
fn documented_scenarios() {
    let t = meteo();
    assert_eq!(level(&t, 32.0, "Température"), AlertLevel::Orange);
    assert_eq!(level(&t, 5.0, "Vent"), AlertLevel::Green);
    assert_eq!(level(&t, 150.0, "Précipitations"), AlertLevel::Red);
    assert_eq!(level(&t, 40.0, "Température"), AlertLevel::Red);
}

#[test]
fn every_band_value_maps_to_its_level() {
    for table in [meteo(), pluvio()] {
        for spec in table.parameters() {
            for (i, band) in spec.bands.iter().enumerate() {
                let mid = (band.min + band.max) / 2.0;
                for v in [band.min, mid, band.max] {
                    let earlier = spec.bands[..i].iter().find(|b| b.contains(v));
                    let expected = earlier.map(|b| b.level).unwrap_or(band.level);
                    let got = spec.classify(v);
                    assert_eq!(got.level, expected, "{} at {}", spec.id, v);
                    assert!(!got.fallback);
                }
            }
        }
    }
}

#[test]
fn shared_boundary_goes_to_earlier_level() {
    let t = pluvio();
    assert_eq!(level(&t, 200.0, "Cumul_10j"), AlertLevel::Orange);
    assert_eq!(level(&t, 200.5, "Cumul_10j"), AlertLevel::Red);
    assert_eq!(level(&t, 75.0, "Cumul_Journalier"), AlertLevel::Orange);
    assert_eq!(level(&t, 76.0, "Cumul_Journalier"), AlertLevel::Red);
}

#[test]
fn values_outside_bands_fall_back_to_lowest_and_are_flagged() {
    let t = meteo();
    for v in [-5.0, 14.9, 24.95, 45.5, f64::NAN] {
        let c = t.classify(v, "Température").unwrap();
        assert_eq!(c.level, AlertLevel::Green, "value {v}");
        assert!(c.fallback, "value {v}");
    }
    let c = t.classify(19.5, "Vent").unwrap();
    assert!(c.fallback);
}

#[test]
fn unknown_parameter_is_an_error() {
    let err = meteo().classify(10.0, "Humidité").unwrap_err();
    assert_eq!(err, ClassifyError::UnknownParameter("Humidité".to_string()));
}

#[test]
fn band_lookup_and_labels() {
    let t = meteo();
    let spec = t.parameter("Température").unwrap();
    let band = spec.band(AlertLevel::Orange).unwrap();
    assert_eq!(band.title, "Chaleur intense");
    assert_eq!(band.recommendation, "Risque de coup de chaleur");
    assert_eq!(spec.label_with_unit(), "Température (°C)");
    assert_eq!(spec.heading(), "Température élevée");
    assert_eq!(
        t.ids().collect::<Vec<_>>(),
        vec!["Température", "Vent", "Précipitations"]
    );
}
