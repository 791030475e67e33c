use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const HOUSEHOLD_FORM: &str = r#"{
    "storageType": "household",
    "duration": "1-3months",
    "furniture": {"extraLarge": 1, "large": 0, "medium": 0, "small": 0},
    "deliveryMethod": "pickup",
    "customerName": "Priya Nair",
    "customerEmail": "priya@example.com"
}"#;

/// Run the binary with its config directory redirected into `home`
fn storequote(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_storequote"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .expect("failed to run storequote")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_quote_json_with_distance_override() {
    let home = TempDir::new().unwrap();
    let form = home.path().join("form.json");
    fs::write(&form, HOUSEHOLD_FORM).unwrap();

    let output = storequote(
        home.path(),
        &["quote", form.to_str().unwrap(), "--distance-km", "10", "-f", "json"],
    );
    assert!(output.status.success());

    let quote: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(quote["branch"], "household");
    assert_eq!(quote["totalVolume"], 60);
    assert_eq!(quote["recommendedVehicle"], "Tata Ace");
    assert_eq!(quote["pickupCharges"], 4202);
}

#[test]
fn test_summary_written_to_directory() {
    let home = TempDir::new().unwrap();
    let form = home.path().join("form.json");
    fs::write(&form, HOUSEHOLD_FORM).unwrap();
    let out_dir = home.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    let output = storequote(
        home.path(),
        &[
            "quote",
            form.to_str().unwrap(),
            "--render",
            "summary",
            "-o",
            out_dir.to_str().unwrap(),
        ],
    );
    assert!(output.status.success());

    let summary = fs::read_to_string(out_dir.join("storage-quote-Priya-Nair.txt")).unwrap();
    assert!(summary.starts_with("STORAGE QUOTE SUMMARY"));
    assert!(summary.contains("Name: Priya Nair"));
}

#[test]
fn test_callback_form_cannot_be_rendered() {
    let home = TempDir::new().unwrap();
    let form = home.path().join("callback.json");
    fs::write(&form, r#"{"storageType": "callback"}"#).unwrap();

    let output = storequote(home.path(), &["quote", form.to_str().unwrap(), "--render", "whatsapp"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("do not produce a quote"));
}

#[test]
fn test_tariff_init_and_check() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("tariff.toml");
    let path_str = path.to_str().unwrap();

    assert!(storequote(home.path(), &["tariff", "init", path_str]).status.success());
    assert!(path.exists());

    // Refuses to overwrite without --force
    assert!(!storequote(home.path(), &["tariff", "init", path_str]).status.success());
    assert!(storequote(home.path(), &["tariff", "init", path_str, "--force"]).status.success());

    let check = storequote(home.path(), &["tariff", "check", path_str]);
    assert!(check.status.success());
    assert!(stdout(&check).contains("Tariff OK"));
}

#[test]
fn test_batch_then_export() {
    let home = TempDir::new().unwrap();
    let forms = home.path().join("forms");
    fs::create_dir(&forms).unwrap();
    fs::write(forms.join("a.json"), HOUSEHOLD_FORM).unwrap();
    fs::write(forms.join("b.json"), "not json").unwrap();

    let output = storequote(home.path(), &["batch", forms.to_str().unwrap()]);
    assert!(output.status.success());
    let results_path = forms.join("quote-results.json");
    assert!(results_path.exists());

    let results: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&results_path).unwrap()).unwrap();
    assert_eq!(results["successful"], 1);
    assert_eq!(results["failed"], 1);

    let export = storequote(home.path(), &["export", results_path.to_str().unwrap()]);
    assert!(export.status.success());
    assert!(forms.join("quote-results.xlsx").exists());
}

#[test]
fn test_callback_flags() {
    let home = TempDir::new().unwrap();
    let output = storequote(
        home.path(),
        &["callback", "--name", "Sam", "--mobile", "9900000002", "-f", "json"],
    );
    assert!(output.status.success());

    let message: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(message["to"], "info@storagians.com");
    assert!(message["body"].as_str().unwrap().contains("Sam"));

    let missing = storequote(home.path(), &["callback", "--name", "Sam"]);
    assert!(!missing.status.success());
}

#[test]
fn test_config_set_and_show() {
    let home = TempDir::new().unwrap();
    let output = storequote(
        home.path(),
        &["config", "--set-company", "Acme Storage", "--set-validity", "15", "--show"],
    );
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Configuration updated"));
    assert!(text.contains("Acme Storage"));
    assert!(text.contains("15 days"));
}
