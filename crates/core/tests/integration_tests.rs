//! Integration tests for argsift-core
//!
//! These tests verify that definition loading, indexing, classification and
//! conversion work together by running complete workflows end-to-end.

use argsift_core::convert::CommaSeparatedStrings;
use argsift_core::file_handling::{load_definitions, write_result};
use argsift_core::{Error, InvalidFlagKind, OptionDefinition, Parser};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_definitions(yaml_content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    temp_file
}

/// Test loading a definition file and classifying a realistic command line
#[test]
fn test_complete_definition_file_workflow() {
    let yaml_content = r#"
- name: "help"
  flags: ["-h", "--help"]
  help: "print help"

- name: "verbose"
  flags: ["-v", "--verbose"]
  help: "increase verbosity"

- name: "include"
  flags: ["-I", "--include"]
  help: "add an include directory"
  arity: 1

- name: "define"
  flags: ["-D"]
  help: "define a macro"
  arity: 1
"#;

    let temp_file = write_definitions(yaml_content);
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let definitions = load_definitions(&temp_path).unwrap();
    assert_eq!(definitions.len(), 4);
    assert_eq!(definitions[2].arity, 1);
    assert_eq!(definitions[0].arity, 0);

    let parser = Parser::new(definitions);
    let result = parser
        .parse([
            "cc",
            "-vv",
            "-I/usr/include",
            "--include",
            "/opt/include",
            "-DNDEBUG",
            "main.c",
            "--",
            "-weird-file.c",
        ])
        .unwrap();

    assert_eq!(result.program, "cc");
    assert!(!result.has_option("help"));
    assert_eq!(result.get("verbose").unwrap().count(), 2);
    assert_eq!(
        result.get("include").unwrap().all_as::<String>().unwrap(),
        vec!["/usr/include", "/opt/include"]
    );
    assert_eq!(
        result.get("define").unwrap().as_value::<String>().unwrap(),
        "NDEBUG"
    );
    assert_eq!(result.positionals, vec!["main.c", "-weird-file.c"]);
}

#[test]
fn test_load_missing_definition_file() {
    let err = load_definitions("/nonexistent/argsift/definitions.yml").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_load_empty_definition_file() {
    let temp_file = write_definitions("[]\n");
    let err = load_definitions(temp_file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, Error::EmptyDefinitionFile { .. }));
}

#[test]
fn test_load_malformed_definition_file() {
    let temp_file = write_definitions("- name: verbose\n  flags: -v\n  arity: many\n");
    let err = load_definitions(temp_file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, Error::Yaml { .. }));
}

/// Invalid flags in a loaded file only surface when parsing
#[test]
fn test_loaded_definitions_are_validated_at_parse_time() {
    let temp_file = write_definitions(
        "- name: verbose\n  flags: [\"-v\"]\n- name: version\n  flags: [\"-v\"]\n",
    );
    let definitions = load_definitions(temp_file.path().to_str().unwrap()).unwrap();

    let err = Parser::new(definitions).parse(["test"]).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidFlag {
            kind: InvalidFlagKind::Duplicate { .. },
            ..
        }
    ));
}

#[test]
fn test_write_result_as_yaml() {
    let parser = Parser::new(vec![
        OptionDefinition::new("verbose", ["-v"], "", 0),
        OptionDefinition::new("output", ["-o"], "", 1),
    ]);
    let result = parser.parse(["test", "-o", "out.txt", "bar"]).unwrap();

    let mut buffer = Vec::new();
    write_result(&mut buffer, &result).unwrap();
    let yaml = String::from_utf8(buffer).unwrap();

    assert!(yaml.contains("program: test"));
    assert!(yaml.contains("verbose: []"));
    assert!(yaml.contains("out.txt"));
    assert!(yaml.contains("- bar"));
}

#[test]
fn test_comma_separated_option_value() {
    let parser = Parser::new(vec![OptionDefinition::new(
        "names",
        ["--names"],
        "names as a comma separated list",
        1,
    )]);

    let result = parser.parse(["test", "--names", "alice,,,bob"]).unwrap();
    let names = result
        .get("names")
        .unwrap()
        .as_value::<CommaSeparatedStrings>()
        .unwrap();
    assert_eq!(names.values, vec!["alice", "", "", "bob"]);

    let result = parser.parse(["test", "--names", ""]).unwrap();
    let names = result
        .get("names")
        .unwrap()
        .as_value::<CommaSeparatedStrings>()
        .unwrap();
    assert_eq!(names.values, vec![""]);
}

#[test]
fn test_positional_conversions() {
    let parser = Parser::new(vec![OptionDefinition::new(
        "number",
        ["-n", "--num", "--number"],
        "number",
        1,
    )]);

    let result = parser.parse(["test", "1", "2"]).unwrap();
    assert_eq!(result.positional_as::<i32>(0).unwrap(), 1);
    assert_eq!(result.positional_as::<i64>(1).unwrap(), 2);
    assert_eq!(result.positional_as::<String>(1).unwrap(), "2");

    let result = parser.parse(["test", "3.141592653", "2.71828182846"]).unwrap();
    let floats = result.all_positionals_as::<f64>().unwrap();
    assert!((floats[0] - 3.141_592_653).abs() < 1e-9);
    assert!((floats[1] - 2.718_281_828_46).abs() < 1e-9);
}

#[test]
fn test_option_value_default_when_absent() {
    let parser = Parser::new(vec![OptionDefinition::new("sep", ["-s", "--sep"], "", 1)]);

    let result = parser.parse(["test", "a", "b"]).unwrap();
    let sep = result
        .get("sep")
        .unwrap()
        .as_value_or(",".to_string())
        .unwrap();
    assert_eq!(sep, ",");

    let result = parser.parse(["test", "--sep=;", "a"]).unwrap();
    let sep = result
        .get("sep")
        .unwrap()
        .as_value_or(",".to_string())
        .unwrap();
    assert_eq!(sep, ";");
}

/// Each successive parse is independent of the one before
#[test]
fn test_repeated_parses_do_not_share_state() {
    let compiled = Parser::new(vec![
        OptionDefinition::new("verbose", ["-v"], "", 0),
        OptionDefinition::new("pair", ["-p"], "", 2),
    ])
    .compile()
    .unwrap();

    assert!(matches!(
        compiled.parse(["test", "--", "-v"]).unwrap().positionals.as_slice(),
        [only] if only == "-v"
    ));
    assert!(compiled.parse(["test", "-v"]).unwrap().has_option("verbose"));
    assert!(matches!(
        compiled.parse(["test", "-p", "1"]).unwrap_err(),
        Error::OptionLacksArgument(_)
    ));
    assert!(compiled.parse(["test", "-p", "1", "2"]).is_ok());
}
