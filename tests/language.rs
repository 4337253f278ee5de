use plang::{
    interpreter::{
        config::{Config, Dialect, Limits, MAX_DEPTH},
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::parse_program,
    },
    run_line,
};

fn output_of(src: &str, config: &Config) -> String {
    match run_line(src, config) {
        Ok(buffer) => buffer.into_line(),
        Err(e) => panic!("Line failed: {src}\nError: {e}"),
    }
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output_of(src, &Config::default()), expected, "line: {src}");
}

fn assert_base_output(src: &str, expected: &str) {
    assert_eq!(output_of(src, &Config::new(Dialect::Base)), expected, "line: {src}");
}

fn assert_failure(src: &str) {
    assert!(run_line(src, &Config::default()).is_err(),
            "Line succeeded but was expected to fail: {src}");
}

fn assert_base_failure(src: &str) {
    assert!(run_line(src, &Config::new(Dialect::Base)).is_err(),
            "Line succeeded but was expected to fail: {src}");
}

#[test]
fn base_assignment_and_print() {
    assert_base_output("k = 5 ; print k ;", ">> 5\n");
    assert_base_output("a = 1 ; b = a + 2 ; print a ; print b ;", ">> 1 3\n");
}

#[test]
fn base_variables_default_to_zero() {
    assert_base_output("print x ;", ">> 0\n");
    assert_base_output("y = x + 4 ; print y ;", ">> 4\n");
}

#[test]
fn base_plus_and_star_share_a_level() {
    // (2 + 3) * 4
    assert_base_output("x = 2 + 3 * 4 ; print x ;", ">> 20\n");
    // 2 * (5 - 1)
    assert_base_output("x = 2 * 5 - 1 ; print x ;", ">> 8\n");
    assert_base_output("x = 10 - 2 - 3 ; print x ;", ">> 5\n");
}

#[test]
fn base_keywords_of_the_extended_dialect_are_names() {
    assert_base_output("while = 3 ; if = while * 2 ; print if ;", ">> 6\n");
}

#[test]
fn base_rejects_extended_syntax() {
    assert_base_failure("integer k ;");
    assert_base_failure("k = 1 ; { } ;");
}

#[test]
fn extended_precedence_is_conventional() {
    assert_output("integer x ; x = 10 + 5 * 2 ; print x ;", ">> 20\n");
    assert_output("integer x ; x = 20 - 5 - 5 ; print x ;", ">> 10\n");
    assert_output("integer x ; x = ( 1 + 2 ) * 3 ; print x ;", ">> 9\n");
}

#[test]
fn unary_minus() {
    assert_output("integer x ; x = - 4 * 3 ; print x ; print - x ;", ">> -12 12\n");
    assert_output("print - ( 2 - 7 ) ;", ">> 5\n");
    assert_failure("print - - 5 ;");
}

#[test]
fn unicode_dashes_subtract() {
    assert_output("integer x ; x = 9 \u{2013} 4 ; print x \u{2212} 1 ;", ">> 5 4\n");
    assert_output("print 10 \u{2014} 3 ;", ">> 7\n");
}

#[test]
fn print_without_declarations_uses_literals() {
    assert_output("print 7 ; print 2 * 3 ;", ">> 7 6\n");
}

#[test]
fn while_loop_counts_down() {
    assert_output("integer k ; integer j ; k = 30 ; j = 25 ; while ( k > j ) do { print ( k - j ) * 10 ; k = k - 1 ; } ; print k ;",
                  ">> 50 40 30 20 10 25\n");
}

#[test]
fn while_loop_that_never_runs() {
    assert_output("integer a ; integer b ; a = 1 ; b = 2 ; while ( a > b ) do { print a ; } ; print b ;",
                  ">> 2\n");
}

#[test]
fn stray_semicolons_after_loop_are_ignored() {
    assert_output("integer a ; integer b ; b = 2 ; while ( a < b ) do { a = a + 1 ; } ; ; ; print a ;",
                  ">> 2\n");
}

#[test]
fn if_takes_else_branch() {
    assert_output("integer x ; integer y ; x = 10 + 5 * 2 ; y = 20 - 5 ; if ( x < y ) { print x - 5 ; } else { x = 7 ; print x + 5 ; } ;",
                  ">> 12\n");
}

#[test]
fn if_takes_then_branch() {
    assert_output("integer x ; integer y ; x = 1 ; y = 2 ; if ( x != y ) { print x ; } else { print y ; } ;",
                  ">> 1\n");
}

#[test]
fn nested_if_inside_while() {
    assert_output("integer i ; integer j ; integer k ; i = 0 ; j = 5 ; k = 3 ; while ( i < j ) do { if ( i < k ) { i = i + 1 ; print i ; } else { i = i + 1 ; } ; } ; print i ; print j * k ;",
                  ">> 1 2 3 5 15\n");
}

#[test]
fn nested_while_loops() {
    assert_output("integer i ; integer j ; integer n ; integer z ; n = 2 ; while ( i < n ) do { i = i + 1 ; j = 0 ; while ( j < n ) do { j = j + 1 ; print i * 10 + j ; } ; } ;",
                  ">> 11 12 21 22\n");
}

#[test]
fn empty_statements_and_empty_blocks() {
    assert_output("integer a ; ; ; a = 1 ; ;", "");
    assert_output("integer a ; integer b ; if ( a == b ) { } else { } ; print a ;",
                  ">> 0\n");
}

#[test]
fn silent_program_prints_nothing() {
    assert_output("integer a ; a = 3 ;", "");
    assert_output("   ", "");
}

#[test]
fn missing_semicolon_is_an_error() {
    assert_failure("integer k ; k = 5 ; print k");
    assert_base_failure("k = 5 print k ;");
}

#[test]
fn literal_in_comparison_is_an_error() {
    assert_failure("integer k ; k = 3 ; while ( k > 0 ) do { k = k - 1 ; } ;");
    assert_failure("integer k ; if ( 1 == k ) { } else { } ;");
}

#[test]
fn undeclared_and_duplicate_variables_are_errors() {
    assert_failure("k = 5 ;");
    assert_failure("integer k ; print j ;");
    assert_failure("integer k ; integer k ;");
    assert_failure("integer k ; if ( k == j ) { } else { } ;");
}

#[test]
fn declarations_must_come_first() {
    assert_failure("integer k ; k = 1 ; integer j ;");
}

#[test]
fn unbalanced_and_missing_blocks_are_errors() {
    assert_failure("integer k ; while ( k > k ) do { print k ; ;");
    assert_failure("integer k ; if ( k == k ) { print k ; } ;");
    assert_failure("integer k ; if ( k == k ) { print k ; } else { } }");
    assert_failure("integer k ; while ( k > k ) { } ;");
    assert_failure("integer k ; while ( k > k ) do { } print k ;");
}

#[test]
fn branch_that_is_not_taken_must_still_parse() {
    assert_failure("integer x ; if ( x == x ) { print x ; } else { print x : } ;");
    assert_failure("integer x ; integer y ; y = 1 ; while ( x > y ) do { print ; } ;");
}

#[test]
fn over_long_words_are_errors() {
    assert_output("integer abcdefghij ; abcdefghij = 9999999999 ; print abcdefghij ;",
                  ">> 9999999999\n");
    assert_failure("integer abcdefghijk ;");
    assert_failure("print 12345678901 ;");
}

#[test]
fn invalid_words_are_errors() {
    assert_failure("integer k ; k = 5 ; print K ;");
    assert_failure("integer k ; k=5 ;");
    assert_failure("print 3 / 1 ;");
}

#[test]
fn overflow_is_an_error() {
    assert_failure("integer x ; x = 9999999999 ; x = x * x ; x = x * x ; print x ;");
}

#[test]
fn same_line_twice_gives_same_output() {
    let line = "integer k ; integer j ; k = 3 ; while ( k > j ) do { print k ; k = k - 1 ; } ;";
    let first = output_of(line, &Config::default());
    let second = output_of(line, &Config::default());
    assert_eq!(first, ">> 3 2 1\n");
    assert_eq!(first, second);
}

#[test]
fn no_state_survives_a_line() {
    assert_output("integer k ; k = 5 ;", "");
    assert_failure("print k ;");
    assert_base_output("print k ;", ">> 0\n");
}

#[test]
fn failed_run_keeps_prior_assignments_but_not_output() {
    let config = Config::default();
    let tokens = tokenize("integer x ; x = 5 ; print x ; print y ;", &config).unwrap();
    let program = parse_program(&mut tokens.iter().peekable(), config.dialect).unwrap();

    let mut context = Context::new(&config);
    assert!(context.run(&program).is_err());
    assert_eq!(context.symbols.find("x"), Some(5));

    assert!(run_line("integer x ; x = 5 ; print x ; print y ;", &config).is_err());
}

#[test]
fn symbol_table_capacity_is_enforced() {
    let config = Config { dialect: Dialect::Base,
                          limits:  Limits { max_variables: 2,
                                            ..Limits::default() }, };
    assert!(run_line("a = 1 ; b = 2 ; print a + b ;", &config).is_ok());
    assert!(run_line("a = 1 ; b = 2 ; c = 3 ;", &config).is_err());
    assert!(run_line("a = 1 ; print b + c ;", &config).is_err());

    let config = Config { limits: Limits { max_variables: 1,
                                           ..Limits::default() },
                          ..Config::default() };
    assert!(run_line("integer a ; integer b ;", &config).is_err());
}

#[test]
fn output_capacity_is_enforced() {
    let config = Config { limits: Limits { output_capacity: 8,
                                           ..Limits::default() },
                          ..Config::default() };
    assert_eq!(output_of("print 1 ; print 2 ;", &config), ">> 1 2\n");
    assert!(run_line("print 1 ; print 2 ; print 3 ;", &config).is_err());
}

#[test]
fn loop_cap_is_off_by_default_and_configurable() {
    let line = "integer i ; integer n ; n = 1000 ; while ( i < n ) do { i = i + 1 ; } ; print i ;";
    assert_output(line, ">> 1000\n");

    let config = Config { limits: Limits { max_loop_iterations: Some(999),
                                           ..Limits::default() },
                          ..Config::default() };
    assert!(run_line(line, &config).is_err());

    let config = Config { limits: Limits { max_loop_iterations: Some(1000),
                                           ..Limits::default() },
                          ..Config::default() };
    assert_eq!(output_of(line, &config), ">> 1000\n");
}

fn nested_parens(depth: usize) -> String {
    format!("print {} 1 {} ;", "( ".repeat(depth), ") ".repeat(depth))
}

#[test]
fn deep_nesting_fails_the_line_instead_of_the_process() {
    assert_output(&nested_parens(MAX_DEPTH), ">> 1\n");
    assert_failure(&nested_parens(MAX_DEPTH + 1));
    assert_failure(&nested_parens(700));

    let blocks = format!("integer a ; {} print a ; {}",
                         "if ( a == a ) { ".repeat(MAX_DEPTH + 1),
                         "} else { } ; ".repeat(MAX_DEPTH + 1));
    assert_failure(&blocks);
}
