use super::*;
use crate::pipeline::stage1_load::run_stage1;
use crate::profiles::loader::ProfileSource;

fn session() -> SessionCtx {
    run_stage1(&ProfileSource::Builtin("meteo".to_string())).expect("stage1")
}

#[test]
fn defaults_to_first_region_without_edits() {
    let mut ctx = session();
    let before = ctx.dataset.clone();
    let selection = run_stage2(&mut ctx, &UpdateRequest::default()).unwrap();
    assert_eq!(selection.region, "Extrême-Nord");
    assert_eq!(selection.applied, 0);
    assert_eq!(ctx.dataset, before);
}

#[test]
fn applies_edits_to_selected_region() {
    let mut ctx = session();
    let request = UpdateRequest {
        region: Some("Centre".to_string()),
        values: BTreeMap::from([
            ("Température".to_string(), 40.0),
            ("Précipitations".to_string(), 10.0),
        ]),
    };
    let selection = run_stage2(&mut ctx, &request).unwrap();
    assert_eq!(selection.region, "Centre");
    assert_eq!(selection.applied, 2);
    assert_eq!(
        ctx.dataset.select("Centre").unwrap().values,
        vec![40.0, 8.0, 10.0]
    );
}

#[test]
fn unknown_region_is_not_found() {
    let mut ctx = session();
    let request = UpdateRequest {
        region: Some("Atlantis".to_string()),
        values: BTreeMap::new(),
    };
    let err = run_stage2(&mut ctx, &request).unwrap_err();
    assert!(matches!(err, Stage2Error::Dataset(DatasetError::NotFound(_))));
}
