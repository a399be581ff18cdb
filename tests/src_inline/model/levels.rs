use super::*;

#[test]
fn levels_are_ordered_by_severity() {
    assert!(AlertLevel::Green < AlertLevel::Yellow);
    assert!(AlertLevel::Yellow < AlertLevel::Orange);
    assert!(AlertLevel::Orange < AlertLevel::Red);
    assert_eq!(AlertLevel::ordered().first(), Some(&AlertLevel::lowest()));
}

#[test]
fn only_orange_and_red_are_alerts() {
    let alerts: Vec<_> = AlertLevel::ordered()
        .iter()
        .filter(|l| l.is_alert())
        .collect();
    assert_eq!(alerts, vec![&AlertLevel::Orange, &AlertLevel::Red]);
}

#[test]
fn serde_uses_display_labels() {
    let json = serde_json::to_string(&AlertLevel::Red).unwrap();
    assert_eq!(json, "\"Rouge\"");
    let level: AlertLevel = serde_json::from_str("\"Jaune\"").unwrap();
    assert_eq!(level, AlertLevel::Yellow);
    assert_eq!(AlertLevel::Green.to_string(), "Vert");
}

#[test]
fn map_colors() {
    assert_eq!(AlertLevel::Green.color(), [0, 200, 0, 160]);
    assert_eq!(AlertLevel::Orange.color(), [255, 165, 0, 160]);
    assert_eq!(AlertLevel::Red.color(), [255, 0, 0, 160]);
}
