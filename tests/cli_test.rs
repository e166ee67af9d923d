use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn checkout(dir: &TempDir) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.env("UPI_CHECKOUT_DIR", dir.path()).env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn test_link_prints_upi_uri() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    checkout(&dir)?
        .args([
            "link",
            "--name",
            "Asha Rao",
            "--email",
            "asha@x.com",
            "--phone",
            "9876543210",
            "--promo",
            "AndroidX2025",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone:       +919876543210"))
        .stdout(predicate::str::contains(
            "upi://pay?pa=kiransinghpay@axl&pn=Kiran%20Singh",
        ))
        .stdout(predicate::str::contains("&am=8999&cu=INR"));

    Ok(())
}

#[test]
fn test_link_rejects_bad_email() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    checkout(&dir)?
        .args([
            "link",
            "--name",
            "Asha Rao",
            "--email",
            "asha@x",
            "--phone",
            "9876543210",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email format."))
        .stdout(predicate::str::contains("upi://").not());

    Ok(())
}

#[test]
fn test_link_rejects_wrong_promo() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    checkout(&dir)?
        .args([
            "link",
            "--name",
            "Asha Rao",
            "--email",
            "asha@x.com",
            "--phone",
            "9876543210",
            "--promo",
            "SAVEBIG",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid promo code. Please try again."));

    Ok(())
}

#[test]
fn test_currencies_table() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    checkout(&dir)?
        .arg("currencies")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹45,000"))
        .stdout(predicate::str::contains("$540.00"))
        .stdout(predicate::str::contains("AED"));

    checkout(&dir)?
        .args(["currencies", "--promo", "AndroidX2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹8,999"))
        .stdout(predicate::str::contains("List price"));

    Ok(())
}

#[test]
fn test_terms() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    checkout(&dir)?
        .arg("terms")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Refund Policy"))
        .stdout(predicate::str::contains("6. Intellectual Property"));

    Ok(())
}

#[test]
fn test_record_validates_before_sending() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    checkout(&dir)?
        .args([
            "record",
            "--name",
            "Asha Rao",
            "--phone",
            "9876543210",
            "--txn-id",
            "UPI123",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Enter a valid Transaction ID (min 8 characters).",
        ));

    checkout(&dir)?
        .args([
            "record",
            "--name",
            "Asha Rao",
            "--phone",
            "12345",
            "--txn-id",
            "UPI12345678",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Enter a valid 10-digit phone number."));

    Ok(())
}

#[test]
fn test_config_init_and_custom_settings() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    checkout(&dir)?
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Countdown:        20s"));
    assert!(dir.path().join("config.json").exists());

    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "countdown_secs": 10, "course": { "promo_code": "SPRING", "discounted_price": 1000000 } }"#,
    )?;

    checkout(&dir)?
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Countdown:        10s"))
        .stdout(predicate::str::contains("SPRING -> ₹10,000"));

    checkout(&dir)?
        .args(["currencies", "--promo", "SPRING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹10,000"));

    Ok(())
}

#[test]
fn test_invalid_settings_file_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "merchant": { "vpa": "not-a-vpa" } }"#,
    )?;

    checkout(&dir)?
        .arg("terms")
        .assert()
        .failure()
        .stderr(predicate::str::contains("merchant.vpa"));

    Ok(())
}
