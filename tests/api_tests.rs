//! API integration tests
//!
//! These tests run against a live server with a migrated database.
//! Run with: cargo test -- --ignored --test-threads=1

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create a customer and return its ID
async fn create_customer(client: &Client) -> i64 {
    let response = client
        .post(format!("{}/customers", BASE_URL))
        .json(&json!({
            "company_name": "Stavby Novák s.r.o.",
            "ico": "12345678",
            "city": "Brno"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No id in response")
}

/// Helper to create an equipment unit and return its ID
async fn create_equipment(client: &Client, customer_id: i64) -> i64 {
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "customer_id": customer_id,
            "name": "Věžový jeřáb MB 1030",
            "category": "crane",
            "manufacturer": "Liebherr",
            "capacity_kg": 4000
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No id in response")
}

fn revision_payload(equipment_id: i64, revision_number: &str) -> Value {
    json!({
        "equipment_id": equipment_id,
        "revision_number": revision_number,
        "technician_name": "Ing. Karel Dvořák",
        "certification_number": "TIČR 1234/2023",
        "procedure_type": "ZKOUŠKA",
        "revision_date": "2026-06-15",
        "next_revision_date": "2027-06-15",
        "documentation_check": {
            "pruvodka_jerabu": "Předložen",
            "navod_k_obsluze": "Předložen"
        },
        "equipment_check": {
            "ocelova_konstrukce": "Vyhovuje",
            "brzdy": "Vyhovuje"
        },
        "functional_test": {
            "zdvih_spousteni": "Vyhovuje"
        },
        "load_test": {
            "staticka_zkouska": {"load": "5000 kg", "result": "Vyhovuje"},
            "dynamicka_zkouska": "Vyhovuje"
        },
        "evaluation": "VYHOVUJE"
    })
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_customer_crud() {
    let client = Client::new();
    let id = create_customer(&client).await;

    let response = client
        .get(format!("{}/customers/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["company_name"], "Stavby Novák s.r.o.");

    let response = client
        .put(format!("{}/customers/{}", BASE_URL, id))
        .json(&json!({
            "company_name": "Stavby Novák a.s.",
            "city": "Brno"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["company_name"], "Stavby Novák a.s.");

    let response = client
        .delete(format!("{}/customers/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/customers/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_customer_invalid_ico_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/customers", BASE_URL))
        .json(&json!({
            "company_name": "Test",
            "ico": "123"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_equipment_requires_existing_customer() {
    let client = Client::new();

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "customer_id": 99999999,
            "name": "Kladkostroj"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_revision_round_trip() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&revision_payload(equipment_id, "RE100001"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let revision_id = body["id"].as_i64().expect("No id in response");
    // All checklists pass, so no defects may exist
    assert_eq!(body["defects"].as_array().map(Vec::len), Some(0));
    // The object-shaped load-test value is canonicalized
    assert_eq!(body["load_test"]["staticka_zkouska"], "Vyhovuje");
    assert_eq!(body["load_test_loads"]["staticka_zkouska"], "5000 kg");

    let response = client
        .get(format!("{}/revisions/{}", BASE_URL, revision_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["revision_number"], "RE100001");
}

#[tokio::test]
#[ignore]
async fn test_revision_number_format_enforced() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&revision_payload(equipment_id, "RE12345"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_revision_number_conflicts() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&revision_payload(equipment_id, "RE100002"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&revision_payload(equipment_id, "RE100002"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_failing_checklist_item_derives_defect() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    let mut payload = revision_payload(equipment_id, "RE100003");
    payload["equipment_check"]["brzdy"] = json!("Nevyhovuje");
    payload["evaluation"] = json!("NEVYHOVUJE");
    payload["defects"] = json!([{
        "section": "equipment_check",
        "item_key": "brzdy",
        "description": "Opotřebené brzdové obložení zdvihu",
        "severity": "high"
    }]);

    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let defects = body["defects"].as_array().expect("defects not an array");
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0]["section"], "equipment_check");
    assert_eq!(defects[0]["item_key"], "brzdy");
    assert_eq!(defects[0]["item_name"], "Brzdy zdvihu a pojezdu");
    assert_eq!(defects[0]["description"], "Opotřebené brzdové obložení zdvihu");
    assert_eq!(defects[0]["severity"], "high");
}

#[tokio::test]
#[ignore]
async fn test_client_cannot_fabricate_defects() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    // Every checklist item passes but the client submits a defect anyway
    let mut payload = revision_payload(equipment_id, "RE100004");
    payload["defects"] = json!([{
        "section": "equipment_check",
        "item_key": "brzdy",
        "description": "Vymyšlená závada",
        "severity": "high"
    }]);

    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["defects"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore]
async fn test_update_clears_resolved_defects() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    let mut payload = revision_payload(equipment_id, "RE100005");
    payload["functional_test"]["koncove_vypinace"] = json!("Nevyhovuje");

    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let revision_id = body["id"].as_i64().expect("No id in response");
    assert_eq!(body["defects"].as_array().map(Vec::len), Some(1));

    // Fix the item and resubmit
    let mut payload = revision_payload(equipment_id, "RE100005");
    payload["functional_test"]["koncove_vypinace"] = json!("Vyhovuje");

    let response = client
        .put(format!("{}/revisions/{}", BASE_URL, revision_id))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["defects"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore]
async fn test_unknown_checklist_item_rejected() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    let mut payload = revision_payload(equipment_id, "RE100006");
    payload["equipment_check"]["vymysleny_bod"] = json!("Vyhovuje");

    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_revision_pdf_download() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&revision_payload(equipment_id, "RE100007"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let revision_id = body["id"].as_i64().expect("No id in response");

    let response = client
        .get(format!("{}/revisions/{}/pdf", BASE_URL, revision_id))
        .send()
        .await
        .expect("Failed to send request");

    // 503 means no Chromium on the test host; anything else must be a PDF
    if response.status() == 503 {
        return;
    }
    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["content-type"],
        "application/pdf"
    );
    let bytes = response.bytes().await.expect("Failed to read body");
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
#[ignore]
async fn test_equipment_location_assignment() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    let response = client
        .post(format!("{}/locations", BASE_URL))
        .json(&json!({
            "name": "Stavba Vlněna",
            "city": "Brno",
            "customer_id": customer_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let location_id = body["id"].as_i64().expect("No id in response");

    let response = client
        .post(format!("{}/equipment/{}/locations", BASE_URL, equipment_id))
        .json(&json!({
            "location_id": location_id,
            "assigned_from": "2026-05-01"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/equipment/{}/locations", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let history: Value = response.json().await.expect("Failed to parse response");
    let history = history.as_array().expect("history not an array");
    assert_eq!(history.len(), 1);
    assert!(history[0]["assigned_to"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_logbook_entries() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    let response = client
        .post(format!("{}/logbook/entries", BASE_URL))
        .json(&json!({
            "equipment_id": equipment_id,
            "entry_date": "2026-06-01",
            "author": "Jan Vazač",
            "entry_type": "maintenance",
            "text": "Promazání lan a kontrola kladek"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/logbook/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let entries: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(entries.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
#[ignore]
async fn test_stats_counters() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["customers"].is_number());
    assert!(body["equipment"].is_number());
    assert!(body["revisions"].is_number());
    assert!(body["revisions_due_soon"].is_number());
}

async fn due_soon_counter(client: &Client) -> i64 {
    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    body["revisions_due_soon"]
        .as_i64()
        .expect("revisions_due_soon not a number")
}

#[tokio::test]
#[ignore]
async fn test_superseded_revision_not_counted_as_due() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    let baseline = due_soon_counter(&client).await;

    // An old revision whose next-revision date has long passed
    let mut payload = revision_payload(equipment_id, "RE100020");
    payload["revision_date"] = json!("2024-06-01");
    payload["next_revision_date"] = json!("2025-06-01");
    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    assert_eq!(due_soon_counter(&client).await, baseline + 1);

    // A newer revision pushes the next date far beyond the window; the unit
    // must stop counting as due
    let mut payload = revision_payload(equipment_id, "RE100021");
    payload["revision_date"] = json!("2026-06-15");
    payload["next_revision_date"] = json!("2030-06-15");
    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    assert_eq!(due_soon_counter(&client).await, baseline);
}

#[tokio::test]
#[ignore]
async fn test_missing_entities_report_specific_codes() {
    let client = Client::new();

    for (path, code) in [
        ("customers", 3),
        ("equipment", 4),
        ("revisions", 5),
        ("locations", 6),
    ] {
        let response = client
            .get(format!("{}/{}/99999999", BASE_URL, path))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 404);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["code"], code, "wrong error code for {}", path);
    }
}

#[tokio::test]
#[ignore]
async fn test_update_keeps_submitted_severity() {
    let client = Client::new();
    let customer_id = create_customer(&client).await;
    let equipment_id = create_equipment(&client, customer_id).await;

    let mut payload = revision_payload(equipment_id, "RE100022");
    payload["equipment_check"]["brzdy"] = json!("Nevyhovuje");
    payload["defects"] = json!([{
        "section": "equipment_check",
        "item_key": "brzdy",
        "item_name": "",
        "description": "Opotřebené brzdové obložení zdvihu",
        "severity": "high"
    }]);
    let response = client
        .post(format!("{}/revisions", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let revision_id = body["id"].as_i64().expect("No id in response");

    // Resubmit with a downgraded severity and no description: the severity
    // must stick, the stored description fills the gap
    let mut payload = revision_payload(equipment_id, "RE100022");
    payload["equipment_check"]["brzdy"] = json!("Nevyhovuje");
    payload["defects"] = json!([{
        "section": "equipment_check",
        "item_key": "brzdy",
        "item_name": "",
        "description": "",
        "severity": "low"
    }]);
    let response = client
        .put(format!("{}/revisions/{}", BASE_URL, revision_id))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let defects = body["defects"].as_array().expect("defects not an array");
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0]["severity"], "low");
    assert_eq!(defects[0]["description"], "Opotřebené brzdové obložení zdvihu");

    // A submission that does not mention the item at all keeps the stored
    // annotation as a whole
    let mut payload = revision_payload(equipment_id, "RE100022");
    payload["equipment_check"]["brzdy"] = json!("Nevyhovuje");
    let response = client
        .put(format!("{}/revisions/{}", BASE_URL, revision_id))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    let defects = body["defects"].as_array().expect("defects not an array");
    assert_eq!(defects.len(), 1);
    assert_eq!(defects[0]["severity"], "low");
    assert_eq!(defects[0]["description"], "Opotřebené brzdové obložení zdvihu");
}
