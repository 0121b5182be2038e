//! Submission payload shape tests against the backend contract.

use common::model::process::ProcessRequest;
use common::model::requirement::RequirementBlock;

#[test]
fn payload_carries_every_key_the_backend_reads() {
    let request = ProcessRequest {
        geo: vec!["United States".into()],
        sheet_url: "https://docs.example.com/sheet/ab12".into(),
        goal: "100".into(),
        lpc: "2".into(),
        process_type: Some("search_by_domain".into()),
        requirements: vec![RequirementBlock {
            job_function: vec!["Finance".into()],
            level1: vec!["C Level".into()],
            level2: vec!["Middle Managment (Manager)".into()],
            level3: vec!["Ownership".into()],
            keywords: "audit, controls".into(),
        }],
        ..ProcessRequest::default()
    };

    let value = serde_json::to_value(&request).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "geo",
        "exclude_keywords",
        "sheet_url",
        "company_geo",
        "sup_emails_sheet_url",
        "sup_domains_sheet_url",
        "sup_names_sheet_url",
        "goal",
        "lpc",
        "size",
        "industry",
        "revenue",
        "requirements",
        "process_type",
    ] {
        assert!(object.contains_key(key), "missing payload key {key}");
    }

    let block = &value["requirements"][0];
    assert_eq!(block["job_function"][0], "Finance");
    assert_eq!(block["keywords"], "audit, controls");
}

#[test]
fn requirement_order_is_preserved() {
    let request = ProcessRequest {
        requirements: (0..4)
            .map(|n| RequirementBlock {
                keywords: format!("block {n}"),
                ..RequirementBlock::default()
            })
            .collect(),
        ..ProcessRequest::default()
    };

    let value = serde_json::to_value(&request).unwrap();
    let blocks = value["requirements"].as_array().unwrap();
    assert_eq!(blocks.len(), 4);
    for (n, block) in blocks.iter().enumerate() {
        assert_eq!(block["keywords"], format!("block {n}"));
    }
}
