use chordal_core::{Accidental, ChordNode, ChordTree, NoteLetter, Quality, RootNote};
use chordal_parser::error::ErrorCode;
use chordal_parser::{ParseError, Span, parse};

#[test]
fn test_simple_chord() {
    let tree = parse("Dm").expect("Failed to parse");

    match tree {
        ChordTree::Chord(chord) => {
            assert_eq!(chord.root(), RootNote::natural(NoteLetter::D));
            assert_eq!(chord.quality(), Some(Quality::Minor));
            assert_eq!(chord.bass(), None);
        }
        _ => panic!("Expected a single chord"),
    }
}

#[test]
fn test_full_chord() {
    let tree = parse("Bbmaj7/F").expect("Failed to parse");

    assert_eq!(
        tree,
        ChordTree::Chord(
            ChordNode::new(RootNote::new(NoteLetter::B, Some(Accidental::Flat)))
                .with_quality(Quality::Major7)
                .with_bass(NoteLetter::F)
        )
    );
    assert_eq!(tree.to_string(), "Bbmaj7/F");
}

#[test]
fn test_progression() {
    let tree = parse("C-Am-F-G7").expect("Failed to parse");

    let ChordTree::Progression(progression) = &tree else {
        panic!("Expected a progression");
    };
    assert_eq!(progression.len(), 4);

    // Chords keep their written order
    let chords = progression.chords();
    assert_eq!(chords[0], ChordNode::new(NoteLetter::C));
    assert_eq!(chords[1], ChordNode::new(NoteLetter::A).with_quality(Quality::Minor));
    assert_eq!(chords[2], ChordNode::new(NoteLetter::F));
    assert_eq!(
        chords[3],
        ChordNode::new(NoteLetter::G).with_quality(Quality::Dominant7)
    );
}

#[test]
fn test_display_normalizes_spelling() {
    let tree = parse("CM7-F+-G").expect("Failed to parse");
    assert_eq!(tree.to_string(), "Cmaj7-Faug-G");

    // Canonical text parses back to the same tree
    assert_eq!(parse(&tree.to_string()), Ok(tree));
}

#[test]
fn test_errors_by_kind() {
    let cases = [
        ("H", ErrorCode::E001, 0),
        ("C Am", ErrorCode::E001, 1),
        ("", ErrorCode::E002, 0),
        ("C-", ErrorCode::E002, 2),
        ("Cmin7", ErrorCode::E003, 1),
        ("Dm7", ErrorCode::E003, 1),
        ("Bbb", ErrorCode::E001, 2),
        ("Cx", ErrorCode::E003, 1),
        ("C/Em", ErrorCode::E004, 3),
    ];

    for (source, code, offset) in cases {
        let err = parse(source).expect_err(source);
        assert_eq!(err.code(), code, "code for `{source}`");
        assert_eq!(err.offset(), offset, "offset for `{source}`");
    }
}

#[test]
fn test_error_diagnostic() {
    let err = parse("G/Bm").expect_err("bass with quality");
    assert_eq!(
        err,
        ParseError::InvalidBassRoot {
            offset: 3,
            found: 'm',
            slash: 1
        }
    );

    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.code(), Some(ErrorCode::E004));
    assert_eq!(diagnostic.labels()[0].span(), Span::new(3..4));
    assert_eq!(diagnostic.to_string(), "error[E004]: bass note must be a bare root");
}
