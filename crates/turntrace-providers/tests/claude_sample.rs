use turntrace_providers::{DecodeOptions, decode_events, read_events_file};
use turntrace_testing::SampleFiles;
use turntrace_types::{ContentBlock, EventKind, MessageContent};

#[test]
fn test_decode_claude_sample() {
    let bytes = SampleFiles::new().read("claude_session.jsonl").unwrap();

    let events = decode_events(&bytes).unwrap();

    assert_eq!(events.len(), 15);

    // file-history-snapshot carries no top-level timestamp
    assert_eq!(
        events[0].kind,
        EventKind::Other("file-history-snapshot".to_string())
    );
    assert!(events[0].timestamp.is_none());

    assert_eq!(events[1].kind, EventKind::User);
    assert_eq!(events[1].plain_text(), Some("Why does the build fail?"));

    let parallel_calls = events[5]
        .blocks()
        .iter()
        .filter(|b| matches!(b, ContentBlock::ToolUse { .. }))
        .count();
    assert_eq!(parallel_calls, 2);

    assert_eq!(events[4].caused_by.as_deref(), Some("a-2"));

    assert_eq!(events[11].kind, EventKind::System);
    assert_eq!(events[11].subtype.as_deref(), Some("turn_duration"));
    assert_eq!(events[11].duration_ms, Some(10500));
}

#[test]
fn test_thinking_blocks_decode_as_other() {
    let bytes = SampleFiles::new().read("claude_session.jsonl").unwrap();
    let events = decode_events(&bytes).unwrap();

    let message = events[2].message.as_ref().unwrap();
    match &message.content {
        MessageContent::Blocks(blocks) => {
            assert_eq!(blocks[0], ContentBlock::Other);
            assert!(matches!(blocks[1], ContentBlock::Text { .. }));
        }
        other => panic!("expected blocks, got {:?}", other),
    }
}

#[test]
fn test_file_and_bytes_agree() {
    let samples = SampleFiles::new();
    let bytes = samples.read("claude_session.jsonl").unwrap();

    let from_bytes = decode_events(&bytes).unwrap();
    let from_file =
        read_events_file(&samples.path("claude_session.jsonl"), &DecodeOptions::default())
            .unwrap();

    assert_eq!(from_bytes, from_file);
}
