use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn dukaan(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dukaan").unwrap();
    cmd.env("DUKAAN_HOME", home);
    cmd
}

#[test]
fn seeds_browses_and_orders() {
    let dir = tempfile::tempdir().unwrap();

    dukaan(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 products"));

    dukaan(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Premium Leather Wallet"));

    dukaan(dir.path())
        .args(["list", "--search", "headphones"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wireless Noise Cancelling"))
        .stdout(predicate::str::contains("Wallet").not());

    // Silver variant of the headphones costs 4699
    dukaan(dir.path())
        .args(["order", "2", "--variant", "v2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://wa.me/919846750898?text="))
        .stdout(predicate::str::contains("4699"));
}

#[test]
fn owner_gate_blocks_mutations_until_login() {
    let dir = tempfile::tempdir().unwrap();

    dukaan(dir.path())
        .args(["add", "Desk Lamp", "799", "Electronics"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Owner mode required"));

    // A rejected code is a message, not a crash, and opens nothing
    dukaan(dir.path())
        .args(["login", "wrong"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid code."));
    dukaan(dir.path())
        .args(["remove", "1"])
        .assert()
        .failure();

    dukaan(dir.path())
        .args(["login", "Bismillah"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Owner mode enabled."));

    dukaan(dir.path())
        .args(["add", "Desk Lamp", "799", "Electronics", "--stock", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added"));

    dukaan(dir.path())
        .args(["list", "--search", "desk lamp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Desk Lamp"));

    dukaan(dir.path())
        .args(["remove", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product removed"));
    dukaan(dir.path())
        .args(["show", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found"));

    dukaan(dir.path()).arg("logout").assert().success();
    dukaan(dir.path())
        .args(["remove", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Owner mode required"));
}

#[test]
fn wishlist_toggles_and_lists() {
    let dir = tempfile::tempdir().unwrap();

    dukaan(dir.path())
        .args(["wishlist", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to wishlist"));

    dukaan(dir.path())
        .arg("wishlist")
        .assert()
        .success()
        .stdout(predicate::str::contains("Premium Leather Wallet"));

    dukaan(dir.path())
        .args(["wishlist", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from wishlist"));

    dukaan(dir.path())
        .arg("wishlist")
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));
}

#[test]
fn config_is_readable_by_anyone_and_writable_by_the_owner() {
    let dir = tempfile::tempdir().unwrap();

    dukaan(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("919846750898"));

    dukaan(dir.path())
        .args(["config", "whatsapp", "911112223334"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Owner mode required"));

    dukaan(dir.path()).args(["login", "Bismillah"]).assert().success();
    dukaan(dir.path())
        .args(["config", "whatsapp", "911112223334"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Store configuration saved."));

    dukaan(dir.path())
        .args(["config", "whatsapp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("whatsapp = 911112223334"));

    // The new number flows into order links
    dukaan(dir.path())
        .args(["order", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wa.me/911112223334"));
}
