use edid_core::{version, EdidRecord};

#[test]
fn version_is_non_empty() {
    let v = version();
    assert!(!v.is_empty());
}

#[test]
fn record_size_tracks_bytes() {
    let record = EdidRecord::new(vec![0x00, 0xff, 0xff], "Panel");
    assert_eq!(record.size(), 3);
    assert_eq!(record.name, "Panel");
}
