use super::{MessagePart, SegmentKind, TextSegment, parse_inline, parse_message};

/// Re-insert emphasis markers around segments. Used to check the inline
/// pass is a lossless partition of its input.
fn rebuild_inline(segments: &[TextSegment<'_>]) -> String {
    let mut out = String::new();
    for seg in segments {
        match seg.kind {
            SegmentKind::Normal => out.push_str(seg.text),
            SegmentKind::Bold => {
                out.push_str("**");
                out.push_str(seg.text);
                out.push_str("**");
            }
            SegmentKind::Italic => {
                out.push('_');
                out.push_str(seg.text);
                out.push('_');
            }
        }
    }
    out
}

#[test]
fn parse_inline_plain_text_single_segment() {
    let segs = parse_inline("just plain text");
    assert_eq!(
        segs,
        vec![TextSegment {
            kind: SegmentKind::Normal,
            text: "just plain text"
        }]
    );
}

#[test]
fn parse_inline_empty_input() {
    let segs = parse_inline("");
    assert_eq!(
        segs,
        vec![TextSegment {
            kind: SegmentKind::Normal,
            text: ""
        }]
    );
}

#[test]
fn parse_inline_bold_and_italic_in_order() {
    let segs = parse_inline("**bold** and _italic_ text");
    assert_eq!(segs.len(), 4);
    assert_eq!(segs[0].kind, SegmentKind::Bold);
    assert_eq!(segs[0].text, "bold");
    assert_eq!(segs[1].kind, SegmentKind::Normal);
    assert_eq!(segs[1].text, " and ");
    assert_eq!(segs[2].kind, SegmentKind::Italic);
    assert_eq!(segs[2].text, "italic");
    assert_eq!(segs[3].kind, SegmentKind::Normal);
    assert_eq!(segs[3].text, " text");
}

#[test]
fn parse_inline_italic_before_bold() {
    let segs = parse_inline("_first_ then **second**");
    assert_eq!(segs[0].kind, SegmentKind::Italic);
    assert_eq!(segs[0].text, "first");
    assert_eq!(segs[2].kind, SegmentKind::Bold);
    assert_eq!(segs[2].text, "second");
}

#[test]
fn parse_inline_unpaired_markers_stay_literal() {
    let segs = parse_inline("a ** b _ c");
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].kind, SegmentKind::Normal);
    assert_eq!(segs[0].text, "a ** b _ c");
}

#[test]
fn parse_inline_bold_with_stray_asterisk_inside_is_literal() {
    // `**a*b**` has no asterisk-free interior, so nothing matches.
    let segs = parse_inline("**a*b**");
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].kind, SegmentKind::Normal);
}

#[test]
fn parse_inline_empty_pair_is_literal() {
    let segs = parse_inline("**** and __");
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].text, "**** and __");
}

#[test]
fn parse_inline_reconstruction_is_lossless() {
    for input in [
        "plain",
        "**b** mid _i_ end",
        "_i_**b**_i2_",
        "tail **b**",
        "unicode **অসমীয়া** _ভাল_",
    ] {
        assert_eq!(rebuild_inline(&parse_inline(input)), input);
    }
}

#[test]
fn parse_inline_idempotent() {
    let input = "**b** and _i_";
    assert_eq!(parse_inline(input), parse_inline(input));
}

#[test]
fn parse_message_no_fence_single_text_part() {
    let parts = parse_message("no code here");
    assert_eq!(parts.len(), 1);
    match &parts[0] {
        MessagePart::Text(segs) => {
            assert_eq!(segs.len(), 1);
            assert_eq!(segs[0].text, "no code here");
        }
        _ => panic!("expected Text"),
    }
}

#[test]
fn parse_message_empty_input() {
    let parts = parse_message("");
    assert_eq!(parts.len(), 1);
    match &parts[0] {
        MessagePart::Text(segs) => {
            assert_eq!(segs.len(), 1);
            assert_eq!(segs[0].kind, SegmentKind::Normal);
            assert_eq!(segs[0].text, "");
        }
        _ => panic!("expected Text"),
    }
}

#[test]
fn parse_message_text_code_text() {
    let parts = parse_message("before ```js\nconsole.log(1)\n``` after");
    assert_eq!(parts.len(), 3);
    match &parts[0] {
        MessagePart::Text(segs) => assert_eq!(segs[0].text, "before "),
        _ => panic!("expected Text"),
    }
    match &parts[1] {
        MessagePart::Code { lang, code } => {
            assert_eq!(*lang, "js");
            assert_eq!(*code, "console.log(1)");
        }
        _ => panic!("expected Code"),
    }
    match &parts[2] {
        MessagePart::Text(segs) => assert_eq!(segs[0].text, " after"),
        _ => panic!("expected Text"),
    }
}

#[test]
fn parse_message_code_without_lang() {
    let parts = parse_message("```\nlet x = 1;\n```");
    assert_eq!(parts.len(), 1);
    match &parts[0] {
        MessagePart::Code { lang, code } => {
            assert!(lang.is_empty());
            assert_eq!(*code, "let x = 1;");
        }
        _ => panic!("expected Code"),
    }
}

#[test]
fn parse_message_unterminated_fence_becomes_code() {
    let parts = parse_message("intro\n```py\nprint(1)");
    assert_eq!(parts.len(), 2);
    match &parts[1] {
        MessagePart::Code { lang, code } => {
            assert_eq!(*lang, "py");
            assert_eq!(*code, "print(1)");
        }
        _ => panic!("expected Code"),
    }
}

#[test]
fn parse_message_multiple_code_blocks() {
    let parts = parse_message("```a\n1\n```mid```b\n2\n```");
    assert_eq!(parts.len(), 3);
    assert!(matches!(&parts[0], MessagePart::Code { lang, code } if *lang == "a" && *code == "1"));
    assert!(matches!(&parts[1], MessagePart::Text(_)));
    assert!(matches!(&parts[2], MessagePart::Code { lang, code } if *lang == "b" && *code == "2"));
}

#[test]
fn parse_message_emphasis_inside_text_parts() {
    let parts = parse_message("**bold** then ```\ncode\n``` then _italic_");
    match &parts[0] {
        MessagePart::Text(segs) => {
            assert_eq!(segs[0].kind, SegmentKind::Bold);
            assert_eq!(segs[0].text, "bold");
        }
        _ => panic!("expected Text"),
    }
    match &parts[2] {
        MessagePart::Text(segs) => {
            assert_eq!(segs[1].kind, SegmentKind::Italic);
            assert_eq!(segs[1].text, "italic");
        }
        _ => panic!("expected Text"),
    }
}

#[test]
fn parse_message_markers_inside_code_are_literal() {
    let parts = parse_message("```\n**not bold**\n```");
    assert_eq!(parts.len(), 1);
    assert!(matches!(&parts[0], MessagePart::Code { code, .. } if *code == "**not bold**"));
}
