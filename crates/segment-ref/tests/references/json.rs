use segment_ref::{
    timeline, EndByte, InitializationSegmentReference, MediaSegmentReference, SegmentError,
};
use serde::Deserialize;
use serde_json::json;

use crate::AssertWrapper;

#[derive(Deserialize)]
struct Representation {
    init: InitializationSegmentReference,
    segments: Vec<MediaSegmentReference>,
}

#[test]
fn test_load_representation() -> anyhow::Result<()> {
    let data = include_str!("../fixtures/timeline.json");
    let representation: Representation = serde_json::from_str(data)?;

    assert_eq!(
        representation.init,
        InitializationSegmentReference::new(
            vec!["https://cdn.example.com/video/720p/init.mp4".to_string()],
            0,
            EndByte::Bounded(743),
        )
    );

    let segments = representation.segments;
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[2].end_time(), 10.5);
    assert_eq!(segments[2].end_byte(), EndByte::Unbounded);
    timeline::check_order(&segments)?;

    Ok(())
}

#[test]
fn test_invalid_segment_fails_to_load() {
    let data = include_str!("../fixtures/invalid-segment.json");
    let err = serde_json::from_str::<MediaSegmentReference>(data).unwrap_err();
    assert!(err
        .to_string()
        .contains(&SegmentError::InvalidTimeRange {
            start_time: 4.0,
            end_time: 4.0
        }
        .to_string()));
}

#[test]
fn test_serialize_media_segment() -> anyhow::Result<()> {
    let segment =
        MediaSegmentReference::new(3, 8.0, 12.0, vec!["a.mp4".to_string()], 3000, EndByte::Unbounded)?;

    assert_eq!(
        serde_json::to_value(&segment)?,
        json!({
            "position": 3,
            "startTime": 8.0,
            "endTime": 12.0,
            "uris": ["a.mp4"],
            "startByte": 3000,
            "endByte": null,
        })
    );

    Ok(())
}

#[test]
fn test_init_segment_missing_end_byte() -> anyhow::Result<()> {
    let init: InitializationSegmentReference = serde_json::from_value(json!({
        "uris": ["init.mp4"],
        "startByte": 0,
    }))?;
    assert!(init.end_byte().is_unbounded());

    // init segments keep whatever range they are given
    serde_json::from_value::<InitializationSegmentReference>(json!({
        "uris": ["init.mp4"],
        "startByte": 900,
        "endByte": 100,
    }))
    .assert_success();

    Ok(())
}

#[test]
fn test_media_segment_byte_order_on_load() {
    serde_json::from_value::<MediaSegmentReference>(json!({
        "position": 2,
        "startTime": 4.0,
        "endTime": 8.0,
        "uris": ["a.mp4"],
        "startByte": 2000,
        "endByte": 1000,
    }))
    .assert_error();
}
