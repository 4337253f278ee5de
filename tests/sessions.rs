use std::{fs, path::Path};

use plang::{
    interpreter::config::{Config, Dialect},
    shell::run_session,
};
use walkdir::WalkDir;

/// Replays every `tests/sessions/**/*.in` file through the shell and compares
/// the result with the `.out` file next to it. Files under a `base` directory
/// run in the base dialect.
#[test]
fn recorded_sessions_match() {
    let mut count = 0;

    for entry in WalkDir::new("tests/sessions").into_iter()
                                               .filter_map(Result::ok)
                                               .filter(|e| {
                                                   e.path()
                                                    .extension()
                                                    .is_some_and(|ext| ext == "in")
                                               })
    {
        let path = entry.path();
        count += 1;

        let input =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        let mut output = Vec::new();
        run_session(input.as_bytes(), &mut output, &config_for(path), false).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output, expected, "session {path:?} diverged");
    }

    assert!(count > 0, "No sessions found in tests/sessions");
}

fn config_for(path: &Path) -> Config {
    if path.components().any(|c| c.as_os_str() == "base") {
        Config::new(Dialect::Base)
    } else {
        Config::default()
    }
}

#[test]
fn prompt_precedes_every_read() {
    let mut output = Vec::new();
    run_session("print 1 ;\n".as_bytes(), &mut output, &Config::default(), true).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), ">> >> 1\n>> ");
}

#[test]
fn end_of_input_without_blank_line_stops() {
    let mut output = Vec::new();
    run_session("print 1 ;\nprint 2 ;".as_bytes(), &mut output, &Config::default(), false).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), ">> 1\n>> 2\n");
}

#[test]
fn invalid_utf8_line_fails_alone() {
    let mut output = Vec::new();
    let input: &[u8] = b"print 1 ;\n\xff ;\nprint 2 ;\n";
    run_session(input, &mut output, &Config::default(), false).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), ">> 1\n>> Syntax Error!\n>> 2\n");
}
