use std::io::Cursor;

use approx::assert_relative_eq;
use handcrate_core::{Error, HandFrame, HandLabel, HandLandmark, HandLandmarks, HandObservation, LANDMARK_COUNT};

use crate::{read_session, write_session, FrameReader, FrameWriter};

fn landmarks_json(count: usize, x: f32) -> String {
    let points: Vec<String> = (0..count)
        .map(|i| format!(r#"{{"x":{x},"y":{},"z":0.0,"visibility":null}}"#, i as f32 / 100.0))
        .collect();
    format!("[{}]", points.join(","))
}

fn sample_frame(sequence: u64) -> HandFrame {
    let mut points = [HandLandmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    points[8] = HandLandmark::new(0.25, 0.75, -0.1);
    HandFrame::new(
        sequence,
        vec![HandObservation {
            label: HandLabel::Left,
            score: 0.9,
            landmarks: HandLandmarks::new(points),
        }],
    )
}

#[test]
fn test_reads_detector_payload() {
    let input = format!(
        "{{\"multiHandLandmarks\": [{}], \"multiHandedness\": [{{\"label\":\"Right\",\"score\":0.97,\"index\":0,\"displayName\":null}}]}}\n",
        landmarks_json(21, 0.4)
    );
    let frames: Vec<_> = FrameReader::new(Cursor::new(input)).collect();
    assert_eq!(frames.len(), 1);

    let frame = frames.into_iter().next().unwrap().unwrap();
    assert_eq!(frame.sequence, 0);
    assert_eq!(frame.hands.len(), 1);
    assert_eq!(frame.hands[0].label, HandLabel::Right);
    assert_relative_eq!(frame.hands[0].landmarks[20].y, 0.2);
    assert_relative_eq!(frame.hands[0].score, 0.97);
}

#[test]
fn test_skips_blank_lines_and_counts_sequence() {
    let empty = r#"{"multiHandLandmarks": [], "multiHandedness": []}"#;
    let input = format!("{empty}\n\n   \n{empty}\n");
    let frames: Vec<HandFrame> = FrameReader::new(Cursor::new(input))
        .collect::<handcrate_core::Result<_>>()
        .unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1].sequence, 1);
    assert!(frames[0].is_empty());
}

#[test]
fn test_explicit_sequence_wins() {
    let input = "{\"sequence\": 41}\n{}\n";
    let frames: Vec<HandFrame> = FrameReader::new(Cursor::new(input))
        .collect::<handcrate_core::Result<_>>()
        .unwrap();
    assert_eq!(frames[0].sequence, 41);
    assert_eq!(frames[1].sequence, 42);
}

#[test]
fn test_malformed_line_reports_line_number() {
    let input = "{}\n{not json\n{}\n";
    let mut reader = FrameReader::new(Cursor::new(input));
    assert!(reader.next().unwrap().is_ok());
    match reader.next().unwrap() {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected parse error, got {:?}", other),
    }
    // the stream continues past a bad line
    assert!(reader.next().unwrap().is_ok());
    assert!(reader.next().is_none());
}

/// A stream whose every read fails
struct FailingRead;

impl std::io::Read for FailingRead {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "device gone"))
    }
}

#[test]
fn test_io_error_ends_the_stream() {
    let mut reader = FrameReader::new(std::io::BufReader::new(FailingRead));
    assert!(matches!(reader.next(), Some(Err(Error::Io(_)))));
    assert!(reader.next().is_none());
    assert_eq!(FrameReader::new(std::io::BufReader::new(FailingRead)).take(100).count(), 1);
}

#[test]
fn test_invalid_utf8_line_is_a_parse_error_with_its_line() {
    let mut input = b"{}\n".to_vec();
    input.extend_from_slice(b"\xff\xfe\n");
    input.extend_from_slice(b"{not json\n");
    input.extend_from_slice(b"{}\n");
    let items: Vec<_> = FrameReader::new(Cursor::new(input)).collect();

    assert_eq!(items.len(), 4);
    assert!(items[0].is_ok());
    assert!(matches!(items[1], Err(Error::Parse { line: 2, .. })));
    assert!(matches!(items[2], Err(Error::Parse { line: 3, .. })));
    assert_eq!(items[3].as_ref().unwrap().sequence, 1);
}

#[test]
fn test_largest_sequence_does_not_overflow() {
    let input = format!("{{\"sequence\": {}}}\n{{}}\n", u64::MAX);
    let mut reader = FrameReader::new(Cursor::new(input));
    match reader.next().unwrap() {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 1),
        other => panic!("expected parse error, got {:?}", other),
    }
    assert!(reader.next().unwrap().is_ok());
}

#[test]
fn test_short_hand_is_rejected() {
    let input = format!("{{\"multiHandLandmarks\": [{}]}}\n", landmarks_json(20, 0.5));
    let result = FrameReader::new(Cursor::new(input)).next().unwrap();
    match result {
        Err(Error::Parse { line, message }) => {
            assert_eq!(line, 1);
            assert!(message.contains("expected 21, found 20"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_writer_output_reads_back() {
    let mut writer = FrameWriter::new(Vec::new());
    writer.write_frame(&sample_frame(3)).unwrap();
    writer.write_frame(&sample_frame(4)).unwrap();
    let bytes = writer.into_inner();

    let text = String::from_utf8(bytes.clone()).unwrap();
    assert!(text.contains("multiHandLandmarks"));
    assert_eq!(text.lines().count(), 2);

    let frames: Vec<HandFrame> = FrameReader::new(Cursor::new(bytes))
        .collect::<handcrate_core::Result<_>>()
        .unwrap();
    assert_eq!(frames, vec![sample_frame(3), sample_frame(4)]);
}

#[test]
fn test_session_files_by_extension() {
    let dir = std::env::temp_dir();
    let path = dir.join(format!("handcrate_session_{}.jsonl", std::process::id()));
    write_session(&[sample_frame(0)], &path).unwrap();
    let frames = read_session(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(frames, vec![sample_frame(0)]);

    assert!(read_session(dir.join("session.csv")).is_err());
    assert!(write_session(&[], dir.join("session.json")).is_err());
}

#[test]
fn test_json_array_session() {
    let path = std::env::temp_dir().join(format!("handcrate_array_{}.json", std::process::id()));
    let content = format!(
        "[{{\"multiHandLandmarks\": [{}]}}, {{}}]",
        landmarks_json(21, 0.3)
    );
    std::fs::write(&path, content).unwrap();
    let frames = read_session(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].hands[0].label, HandLabel::Right);
    assert_eq!(frames[1].sequence, 1);
}
