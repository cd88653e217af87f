// File: crates/plot-core/tests/group.rs
// Purpose: Validate first-seen-order grouping and key extraction.

use plot_core::group::{distinct, group_by_key, group_values};
use plot_core::Observation;

fn records() -> Vec<Observation> {
    vec![
        Observation::new("TikTok", 120.0),
        Observation::new("Instagram", 95.0),
        Observation::new("TikTok", 300.0),
        Observation::new("Facebook", 40.0),
        Observation::new("Instagram", 15.0),
    ]
}

#[test]
fn groups_keep_first_seen_key_order() {
    let records = records();
    let groups = group_values(&records, |r| r.category.as_str(), |r| r.value);
    let keys: Vec<&str> = groups.keys().map(String::as_str).collect();
    // Not alphabetical: axis order follows input discovery order.
    assert_eq!(keys, ["TikTok", "Instagram", "Facebook"]);
    assert_eq!(groups["TikTok"], [120.0, 300.0]);
    assert_eq!(groups["Instagram"], [95.0, 15.0]);
    assert_eq!(groups["Facebook"], [40.0]);
}

#[test]
fn group_by_key_keeps_record_order_within_groups() {
    let records = records();
    let groups = group_by_key(&records, |r| r.category.as_str());
    let tiktok = &groups["TikTok"];
    assert_eq!(tiktok.len(), 2);
    assert_eq!(tiktok[0].value, 120.0);
    assert_eq!(tiktok[1].value, 300.0);
}

#[test]
fn distinct_dedupes_in_first_seen_order() {
    let records = records();
    let keys = distinct(&records, |r| r.category.as_str());
    assert_eq!(keys, ["TikTok", "Instagram", "Facebook"]);
}
