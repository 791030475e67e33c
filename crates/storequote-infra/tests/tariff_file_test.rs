use std::fs;

use storequote_domain::repository::TariffRepository;
use storequote_domain::service::quote_form;
use storequote_infra::{load_form, FileTariffRepository, TariffLoader};
use tempfile::TempDir;

#[test]
fn test_quote_form_file_with_file_tariff() {
    let dir = TempDir::new().unwrap();

    let tariff_path = dir.path().join("tariff.toml");
    fs::write(
        &tariff_path,
        "[household]\nincluded_km = 0.0\n\n[household.labour]\nrate_per_person = 1000.0\n",
    )
    .unwrap();

    let form_path = dir.path().join("form.json");
    fs::write(
        &form_path,
        r#"{
            "storageType": "household",
            "duration": "1-3months",
            "furniture": {"extraLarge": 1, "large": 0, "medium": 0, "small": 0},
            "distanceKm": 10
        }"#,
    )
    .unwrap();

    let tariff = FileTariffRepository::new(tariff_path).unwrap().load().unwrap();
    let form = load_form(&form_path).unwrap();
    let result = quote_form(&tariff, &form).unwrap().unwrap();
    let quote = result.as_household().unwrap();

    // 1200 + 10 km × 30 with no free allowance
    assert_eq!(quote.vehicle_cost, 1500);
    assert_eq!(quote.labour_cost, 3000);
    assert_eq!(quote.pickup_charges, 452 + 3000 + 1500);
}

#[test]
fn test_written_default_tariff_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tariff.toml");
    let toml = TariffLoader::to_toml_string(&Default::default()).unwrap();
    fs::write(&path, toml).unwrap();

    let repo = FileTariffRepository::new(path).unwrap();
    let tariff = repo.load().unwrap();
    assert_eq!(tariff.household.vehicles[0].name, "Tata Ace");
    assert_eq!(tariff.document.representative_counts.over_100, 500);
}
