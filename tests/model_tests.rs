//! Data model deserialization tests against NetBox-shaped payloads

use netbox_export::models::{ApiList, Device, Region, Site};

#[test]
fn test_region_list_from_api_payload() {
    let payload = r#"{
        "count": 2,
        "next": null,
        "previous": null,
        "results": [
            {"id": 1, "url": "https://nb/api/dcim/regions/1/", "name": "Europe", "slug": "europe", "parent": null, "site_count": 3},
            {"id": 2, "name": "Germany", "slug": "germany", "parent": {"id": 1, "name": "Europe", "slug": "europe", "_depth": 0}}
        ]
    }"#;

    let list: ApiList<Region> = serde_json::from_str(payload).unwrap();
    assert_eq!(list.results.len(), 2);
    assert!(list.results[0].parent.is_none());
    assert_eq!(list.results[1].parent.map(|p| p.id), Some(1));
}

#[test]
fn test_site_from_api_payload() {
    let payload = r#"{
        "results": [
            {"id": 10, "name": "Berlin DC", "slug": "berlin-dc", "status": {"value": "active"}, "region": {"id": 2, "name": "Germany", "slug": "germany"}}
        ]
    }"#;

    let list: ApiList<Site> = serde_json::from_str(payload).unwrap();
    assert_eq!(list.results[0].region.map(|r| r.id), Some(2));
}

#[test]
fn test_device_from_api_payload() {
    let payload = r#"{
        "results": [
            {
                "id": 100,
                "name": "edge-sw1",
                "device_type": {"id": 7, "model": "EX4300"},
                "site": {"id": 10, "name": "Berlin DC", "slug": "berlin-dc"},
                "primary_ip4": {"id": 55, "family": 4, "address": "192.0.2.10/24"},
                "primary_ip6": null
            },
            {"id": 101, "name": null, "site": null, "primary_ip4": null, "primary_ip6": null}
        ]
    }"#;

    let list: ApiList<Device> = serde_json::from_str(payload).unwrap();
    let named = &list.results[0];
    assert_eq!(named.site.map(|s| s.id), Some(10));
    assert_eq!(named.mgmt_ip().as_deref(), Some("192.0.2.10"));

    let unnamed = &list.results[1];
    assert!(unnamed.name.is_none());
    assert!(unnamed.site.is_none());
    assert_eq!(unnamed.mgmt_ip(), None);
}

#[test]
fn test_device_missing_optional_fields() {
    // Fields absent entirely, not just null
    let payload = r#"{"results": [{"id": 102}]}"#;

    let list: ApiList<Device> = serde_json::from_str(payload).unwrap();
    assert!(list.results[0].name.is_none());
    assert!(list.results[0].site.is_none());
}
