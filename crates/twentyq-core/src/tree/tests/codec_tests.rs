use std::io::{self, ErrorKind, Write};

use crate::{MAX_DEPTH, Node, QuestionTree, Tag, TreeError};

const THREE_NODE_FILE: &str = "Q:Does it use electricity?\nA:computer\nA:rock\n";

#[test]
fn load_then_save_reproduces_file() {
    let mut tree = QuestionTree::new();
    tree.load(THREE_NODE_FILE.as_bytes()).expect("valid file loads");

    assert_eq!(
        tree.root(),
        &Node::question(
            "Does it use electricity?",
            Node::answer("computer"),
            Node::answer("rock")
        )
    );

    let mut out = Vec::new();
    tree.save(&mut out).expect("save to memory succeeds");
    assert_eq!(String::from_utf8(out).expect("utf8"), THREE_NODE_FILE);
}

#[test]
fn save_writes_preorder_yes_before_no() {
    let tree = QuestionTree::with_root(Node::question(
        "Is it alive?",
        Node::question("Does it bark?", Node::answer("dog"), Node::answer("cat")),
        Node::answer("rock"),
    ));

    assert_eq!(
        tree.to_text(),
        "Q:Is it alive?\nQ:Does it bark?\nA:dog\nA:cat\nA:rock\n"
    );
}

#[test]
fn text_after_prefix_is_kept_verbatim() {
    let tree = QuestionTree::from_text("Q: Is it big? : yes\nA:A:odd\nA:\n").expect("loads");

    assert_eq!(tree.root().text(), " Is it big? : yes");
    assert_eq!(tree.root().yes().map(Node::text), Some("A:odd"));
    assert_eq!(tree.root().no().map(Node::text), Some(""));
}

#[test]
fn crlf_line_endings_are_accepted() {
    let tree = QuestionTree::from_text("Q:Is it blue?\r\nA:sky\r\nA:grass\r\n").expect("loads");
    assert_eq!(tree.root().answers(), ["sky", "grass"]);
}

#[test]
fn lines_after_complete_tree_are_ignored() {
    let tree = QuestionTree::from_text("A:computer\nA:ignored\n").expect("loads");
    assert_eq!(tree.root(), &Node::answer("computer"));
}

#[test]
fn missing_children_is_a_format_error() {
    let err = QuestionTree::from_text("Q:Does it bark?\nA:dog\n").expect_err("truncated");
    assert!(matches!(err, TreeError::UnexpectedEof { line: 3 }));
    assert!(err.is_format_error());
}

#[test]
fn empty_input_is_a_format_error() {
    let err = QuestionTree::from_text("").expect_err("empty");
    assert!(matches!(err, TreeError::UnexpectedEof { line: 1 }));
}

#[test]
fn unknown_tag_is_rejected() {
    let err = QuestionTree::from_text("Q:Is it red?\nX:apple\nA:sky\n").expect_err("bad tag");
    assert!(matches!(err, TreeError::UnknownTag { line: 2, tag: 'X' }));
}

#[test]
fn missing_separator_is_rejected() {
    let err = QuestionTree::from_text("A-computer\n").expect_err("bad separator");
    assert!(matches!(err, TreeError::MalformedRecord { line: 1, .. }));

    let err = QuestionTree::from_text("A\n").expect_err("too short");
    assert!(matches!(err, TreeError::MalformedRecord { line: 1, .. }));
}

#[test]
fn failed_load_keeps_previous_tree() {
    let mut tree = QuestionTree::from_text(THREE_NODE_FILE).expect("loads");
    let before = tree.root().clone();

    let err = tree
        .load("Q:Is it new?\nQ:Is it half?\nA:only\n".as_bytes())
        .expect_err("incomplete tree");

    assert!(err.is_format_error());
    assert_eq!(tree.root(), &before);
}

#[test]
fn load_keeps_session_counters() {
    let mut tree = QuestionTree::new();
    let mut ui = crate::ScriptedUi::from_script([true], Vec::<String>::new());
    tree.play(&mut ui);

    tree.load(THREE_NODE_FILE.as_bytes()).expect("loads");

    assert_eq!(tree.total_games_played(), 1);
    assert_eq!(tree.total_games_won(), 1);
}

#[test]
fn tags_map_to_record_characters() {
    assert_eq!(Tag::Question.as_char(), 'Q');
    assert_eq!(Tag::from_char('A'), Some(Tag::Answer));
    assert_eq!(Tag::from_char('q'), None);
    assert_eq!(Node::answer("x").tag(), Tag::Answer);
}

/// Sink that rejects every write.
struct FullDisk;

impl Write for FullDisk {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn nested_questions(depth: usize) -> String {
    let mut text = "Q:x\n".repeat(depth);
    text.push_str(&"A:leaf\n".repeat(depth + 1));
    text
}

#[test]
fn failing_sink_surfaces_io_error() {
    let tree = QuestionTree::from_text(THREE_NODE_FILE).expect("loads");

    let err = tree.save(&mut FullDisk).expect_err("sink always fails");

    assert!(matches!(&err, TreeError::Io(io_err) if io_err.to_string() == "disk full"));
    assert!(!err.is_format_error());
}

#[test]
fn invalid_utf8_mid_tree_is_io_error_and_keeps_tree() {
    let mut tree = QuestionTree::new();

    let err = tree
        .load(&b"Q:x\nA:\xff\nA:b\n"[..])
        .expect_err("invalid utf8");

    assert!(matches!(&err, TreeError::Io(io_err) if io_err.kind() == ErrorKind::InvalidData));
    assert_eq!(tree.root(), &Node::answer("computer"));
}

#[test]
fn nesting_up_to_the_limit_loads() {
    let tree = QuestionTree::from_text(&nested_questions(MAX_DEPTH)).expect("at the limit");
    assert_eq!(tree.root().depth(), MAX_DEPTH);
    assert_eq!(tree.root().node_count(), 2 * MAX_DEPTH + 1);
}

#[test]
fn nesting_past_the_limit_is_a_format_error() {
    let mut tree = QuestionTree::new();

    let err = tree
        .load("Q:x\n".repeat(200_000).as_bytes())
        .expect_err("too deep");

    assert!(matches!(
        err,
        TreeError::TooDeep { line, limit: MAX_DEPTH } if line == MAX_DEPTH + 1
    ));
    assert!(err.is_format_error());
    assert_eq!(tree.root(), &Node::answer("computer"));
}
