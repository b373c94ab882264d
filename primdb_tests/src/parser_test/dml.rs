use super::*;

fn assignments(cmd: &Command) -> Vec<(String, String)> {
    match cmd {
        Command::Update { assignments, .. } => assignments
            .iter()
            .map(|Assignment { column, value }| (column.clone(), value.clone()))
            .collect(),
        _ => panic!("Expected Update command"),
    }
}

fn pair(column: &str, value: &str) -> (String, String) {
    (column.to_string(), value.to_string())
}

#[test]
fn parse_insert_basic() {
    let cmd = parse(r#"insert into users values ("Ann", 30)"#).unwrap();
    assert_eq!(
        cmd,
        Command::Insert {
            table: "users".to_string(),
            values: strings(&[r#""Ann""#, "30"]),
        }
    );
}

#[test]
fn parse_insert_keeps_commas_inside_quotes() {
    let cmd = parse(r#"insert into t values ("Lee, Ann", 'a,b', 3)"#).unwrap();
    match cmd {
        Command::Insert { values, .. } => {
            assert_eq!(values, strings(&[r#""Lee, Ann""#, "'a,b'", "3"]));
        }
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn parse_insert_keywords_are_case_insensitive() {
    let cmd = parse("INSERT INTO t VALUES (1)").unwrap();
    assert!(matches!(cmd, Command::Insert { .. }));
}

#[test]
fn parse_insert_rejects_bad_shapes() {
    for bad in [
        "insert into t",
        "insert t values (1)",
        "insert into t vals (1)",
        "insert into t values 1, 2",
        "insert into t values (1, 2",
        "insert into t values ()",
        r#"insert "into" t values (1)"#,
    ] {
        assert!(matches!(parse(bad), Err(DbError::Parse(_))), "{bad}");
    }
}

#[test]
fn parse_update_single_assignment_with_where() {
    let cmd = parse("update users set age = 31 where name = Ann").unwrap();
    assert_eq!(assignments(&cmd), vec![pair("age", "31")]);
    match cmd {
        Command::Update {
            table, condition, ..
        } => {
            assert_eq!(table, "users");
            assert_eq!(condition, Some(strings(&["name", "=", "Ann"])));
        }
        _ => panic!("Expected Update command"),
    }
}

#[test]
fn parse_update_without_where_targets_all_rows() {
    let cmd = parse("update users set active = false").unwrap();
    assert!(matches!(cmd, Command::Update { condition: None, .. }));
}

#[test]
fn parse_update_splits_multiple_assignments() {
    let cmd = parse(r#"update users set name = "Bob", age = 5 where ID = 1"#).unwrap();
    assert_eq!(
        assignments(&cmd),
        vec![pair("name", r#""Bob""#), pair("age", "5")]
    );
}

#[test]
fn parse_update_comma_not_followed_by_assignment_stays_in_value() {
    let cmd = parse("update t set note = hello, world, n = 2").unwrap();
    assert_eq!(
        assignments(&cmd),
        vec![pair("note", "hello, world"), pair("n", "2")]
    );
}

#[test]
fn parse_update_comma_inside_quotes_stays_in_value() {
    let cmd = parse(r#"update t set note = "a, b = c", n = 2"#).unwrap();
    assert_eq!(
        assignments(&cmd),
        vec![pair("note", r#""a, b = c""#), pair("n", "2")]
    );
}

#[test]
fn parse_update_quoted_where_is_not_a_keyword() {
    let cmd = parse(r#"update t set note = "where" where ID = 1"#).unwrap();
    assert_eq!(assignments(&cmd), vec![pair("note", r#""where""#)]);
}

#[test]
fn parse_update_rejects_bad_shapes() {
    for bad in [
        "update t",
        "update t put a = 1",
        "update t set where ID = 1",
        "update t set a = 1 where",
        "update t set a",
        "update t set = 1",
        "update t set a =",
    ] {
        assert!(matches!(parse(bad), Err(DbError::Parse(_))), "{bad}");
    }
}

#[test]
fn parse_delete_requires_where() {
    let cmd = parse("delete from users where age = 30").unwrap();
    assert_eq!(
        cmd,
        Command::Delete {
            table: "users".to_string(),
            condition: strings(&["age", "=", "30"]),
        }
    );
    assert!(matches!(parse("delete from users"), Err(DbError::Parse(_))));
    assert!(matches!(parse("delete from users where"), Err(DbError::Parse(_))));
    assert!(matches!(parse("delete users where a = 1"), Err(DbError::Parse(_))));
}

#[test]
fn parse_insert_escaped_quote_does_not_end_value() {
    let cmd = parse(r#"insert into t values ("a\"b", 1)"#).unwrap();
    match cmd {
        Command::Insert { values, .. } => {
            assert_eq!(values, strings(&[r#""a"b""#, "1"]));
        }
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn parse_insert_escaped_comma_stays_in_value() {
    let cmd = parse(r#"insert into t values ("x\\", a\,b)"#).unwrap();
    match cmd {
        Command::Insert { values, .. } => {
            assert_eq!(values, strings(&[r#""x\""#, "a,b"]));
        }
        _ => panic!("Expected Insert command"),
    }
}

#[test]
fn parse_update_escaped_quote_does_not_end_value() {
    let cmd = parse(r#"update t set name = "a\"b", n = 2"#).unwrap();
    assert_eq!(
        assignments(&cmd),
        vec![pair("name", r#""a"b""#), pair("n", "2")]
    );
}
