use std::io::Write;

use starcargo::{load_contracts_from_json, ContractKind, ContractsDb, Requirements};

fn catalog() -> ContractsDb {
    load_contracts_from_json("data/contracts.json").expect("failed to load contracts.json")
}

fn load_inline(json: &str) -> Result<ContractsDb, String> {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(json.as_bytes()).expect("write json");
    load_contracts_from_json(file.path())
}

#[test]
fn standard_catalog_loads() {
    let db = catalog();
    assert_eq!(db.len(), 45);

    let asteroid = db.get("Asteroid Field").expect("known contract");
    assert_eq!(asteroid.kind, ContractKind::Explore);
    assert_eq!(asteroid.rewards.prestige, 2);
    assert_eq!(asteroid.rewards.credits, 8);
    assert_eq!(asteroid.rewards.cards, 0);
    assert_eq!(asteroid.requirements, Requirements::new(4, 0, 0, 0, 3));
    assert_eq!(asteroid.hazard_dice, 2);

    assert!(db.get("asteroid field").is_none(), "lookup is case-sensitive");
}

#[test]
fn hazard_pool_filters_by_dice() {
    let db = catalog();
    assert_eq!(db.max_hazard(0).len(), 4);
    assert_eq!(db.max_hazard(2).len(), 31);
    assert_eq!(db.max_hazard(u8::MAX).len(), db.len());
    assert!(db
        .max_hazard(1)
        .iter()
        .all(|contract| contract.hazard_dice <= 1));
}

#[test]
fn every_contract_has_requirements() {
    let db = catalog();
    assert!(db.iter().all(|contract| !contract.requirements.is_empty()));
}

#[test]
fn duplicate_names_are_rejected() {
    let json = r#"[
        { "name": "Twin", "type": "kill", "requirements": { "damage": 1 } },
        { "name": "Twin", "type": "kill", "requirements": { "damage": 2 } }
    ]"#;
    let err = load_inline(json).expect_err("duplicate names must fail");
    assert!(
        err.contains("Duplicate contract name 'Twin'"),
        "unexpected error: {err}"
    );
}

#[test]
fn contracts_without_requirements_are_rejected() {
    let json = r#"[
        { "name": "Free Lunch", "type": "delivery", "requirements": {} }
    ]"#;
    let err = load_inline(json).expect_err("empty requirements must fail");
    assert!(err.contains("has no requirements"), "unexpected error: {err}");
}

#[test]
fn empty_catalog_is_rejected() {
    let err = load_inline("[]").expect_err("empty catalog must fail");
    assert!(err.contains("No contracts"), "unexpected error: {err}");
}

#[test]
fn omitted_axes_default_to_zero() {
    let json = r#"[
        { "name": "Sprint", "type": "delivery", "requirements": { "thrusters": 2 } }
    ]"#;
    let db = load_inline(json).expect("load");
    let sprint = db.get("Sprint").expect("present");
    assert_eq!(sprint.requirements, Requirements::new(0, 2, 0, 0, 0));
    assert_eq!(sprint.rewards.credits, 0);
    assert_eq!(sprint.hazard_dice, 0);
}
