//! Load → correct → save round trip on a prediction document file.

use bet_points::document::{audit_document, fix_document};
use bet_points::storage::{load_document, save_document};
use bet_points::Notation;
use serde_json::json;

fn temp_path() -> String {
    let mut p = std::env::temp_dir();
    p.push(format!("bet_points_it_{}.json", uuid::Uuid::new_v4()));
    p.to_string_lossy().to_string()
}

#[test]
fn test_correct_document_on_disk() {
    let path = temp_path();
    let doc = json!({
        "races": [
            {
                "raceNumber": "11R",
                "raceName": "メインレース",
                "strategies": {
                    "safe": { "bets": [{ "type": "馬単", "numbers": "9 ⇔ 1,7,12,3　8点" }] },
                    "balance": { "bets": [{ "type": "馬単", "numbers": "10 ⇔ 2,4,6,7,9,13,14　7点" }] },
                    "aggressive": { "bets": ["馬単 未定"] }
                }
            }
        ]
    });
    save_document(&doc, Some(&path)).unwrap();

    let mut loaded = load_document(Some(&path)).unwrap();
    let audit = audit_document(&loaded, &Notation::default());
    assert_eq!(audit.corrections.len(), 1);

    let report = fix_document(&mut loaded, &Notation::default());
    assert_eq!(report.corrections.len(), 1);
    assert_eq!(report.corrections[0].race, "11R");
    assert_eq!(report.corrections[0].strategy, "balance");
    assert_eq!(report.corrections[0].to, "10 ⇔ 2,4,6,7,9,13,14　14点");
    assert_eq!(report.skipped.len(), 1);

    save_document(&loaded, Some(&path)).unwrap();
    let reloaded = load_document(Some(&path)).unwrap();
    assert_eq!(
        reloaded["races"][0]["strategies"]["balance"]["bets"][0]["numbers"],
        "10 ⇔ 2,4,6,7,9,13,14　14点"
    );
    assert_eq!(reloaded["races"][0]["strategies"]["aggressive"]["bets"][0], "馬単 未定");

    let again = audit_document(&reloaded, &Notation::default());
    assert!(!again.has_changes());

    std::fs::remove_file(&path).unwrap();
}
