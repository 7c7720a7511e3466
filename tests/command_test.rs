//! Grammar tests for the roster command parser

use rostree::{Command, CommandParser, ParseError};
use rstest::{fixture, rstest};

#[fixture]
fn parser() -> CommandParser {
    CommandParser::new()
}

// ============================================================
// Well-Formed Lines
// ============================================================

#[rstest]
fn given_quoted_name_and_eight_digits_when_parsing_insert_then_fields_come_back(
    parser: CommandParser,
) {
    let command = parser.parse(r#"insert "Brandon" 45679999"#).unwrap();
    assert_eq!(
        command,
        Command::Insert {
            name: "Brandon".to_string(),
            id: 45679999
        }
    );
}

#[rstest]
fn given_name_with_spaces_when_parsing_insert_then_name_survives_verbatim(parser: CommandParser) {
    let command = parser.parse(r#"insert "Brandon Petersen" 45679999"#).unwrap();
    assert_eq!(
        command,
        Command::Insert {
            name: "Brandon Petersen".to_string(),
            id: 45679999
        }
    );
}

#[rstest]
fn given_leading_zero_id_when_parsing_then_numeric_value_is_small(parser: CommandParser) {
    assert_eq!(
        parser.parse("remove 00000001").unwrap(),
        Command::Remove { id: 1 }
    );
}

#[rstest]
fn given_empty_quoted_name_when_parsing_insert_then_it_is_accepted(parser: CommandParser) {
    let command = parser.parse(r#"insert "" 00000002"#).unwrap();
    assert_eq!(
        command,
        Command::Insert {
            name: String::new(),
            id: 2
        }
    );
}

#[rstest]
fn given_surrounding_whitespace_when_parsing_then_line_is_trimmed(parser: CommandParser) {
    assert_eq!(
        parser.parse("  printInorder  ").unwrap(),
        Command::PrintInorder
    );
}

#[rstest]
fn given_position_argument_when_parsing_remove_inorder_then_any_width_is_legal(
    parser: CommandParser,
) {
    assert_eq!(
        parser.parse("removeInorder 0").unwrap(),
        Command::RemoveInorder { position: 0 }
    );
    assert_eq!(
        parser.parse("removeInorder 123").unwrap(),
        Command::RemoveInorder { position: 123 }
    );
}

#[rstest]
fn given_quoted_argument_when_parsing_search_then_it_is_a_name_search(parser: CommandParser) {
    assert_eq!(
        parser.parse(r#"search "Brandon""#).unwrap(),
        Command::SearchName {
            name: "Brandon".to_string()
        }
    );
}

#[rstest]
fn given_bare_digits_when_parsing_search_then_it_is_an_id_search(parser: CommandParser) {
    assert_eq!(
        parser.parse("search 45679999").unwrap(),
        Command::SearchId { id: 45679999 }
    );
}

#[rstest]
fn given_print_words_when_parsing_then_each_maps_to_its_traversal(parser: CommandParser) {
    assert_eq!(parser.parse("printInorder").unwrap(), Command::PrintInorder);
    assert_eq!(
        parser.parse("printPreorder").unwrap(),
        Command::PrintPreorder
    );
    assert_eq!(
        parser.parse("printPostorder").unwrap(),
        Command::PrintPostorder
    );
    assert_eq!(
        parser.parse("printLevelCount").unwrap(),
        Command::PrintLevelCount
    );
}

// ============================================================
// Malformed Lines
// ============================================================

#[rstest]
fn given_malformed_lines_when_parsing_then_every_one_is_rejected(parser: CommandParser) {
    let malformed = [
        // id width violations
        r#"insert "Ada" 1234567"#,
        r#"insert "Ada" 123456789"#,
        "remove 1234567",
        "search 123456789",
        // non-numeric ids
        r#"insert "Ada" 1234567a"#,
        "remove 12E45678",
        // missing or broken quotes
        "insert Brandon 45679999",
        r#"insert "Brandon 45679999"#,
        r#"search Brandon"#,
        // missing arguments
        "insert",
        "remove",
        "removeInorder",
        "search",
        // trailing text after a complete command
        r#"insert "Ada" 45679999 extra"#,
        "printInorder now",
        "printLevelCount 3",
        // signed positions are not digits
        "removeInorder -1",
    ];

    for line in malformed {
        assert!(
            parser.parse(line).is_err(),
            "line should be rejected: {:?}",
            line
        );
    }
}

#[rstest]
fn given_unknown_or_miscased_words_when_parsing_then_unknown_command(parser: CommandParser) {
    assert_eq!(
        parser.parse(r#"Insert "Ada" 45679999"#),
        Err(ParseError::UnknownCommand("Insert".to_string()))
    );
    assert_eq!(
        parser.parse("printinorder"),
        Err(ParseError::UnknownCommand("printinorder".to_string()))
    );
}

#[rstest]
fn given_blank_line_when_parsing_then_empty_error(parser: CommandParser) {
    assert_eq!(parser.parse(""), Err(ParseError::Empty));
    assert_eq!(parser.parse("   "), Err(ParseError::Empty));
}
