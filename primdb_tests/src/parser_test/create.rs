use super::*;
use primdb_core::parser::parser::parse_column_spec;

#[test]
fn parse_create_table_keeps_column_specs() {
    let cmd = parse("create_table users name:str age:int").unwrap();
    assert_eq!(
        cmd,
        Command::CreateTable {
            table: "users".to_string(),
            columns: strings(&["name:str", "age:int"]),
        }
    );
}

#[test]
fn parse_create_table_keyword_is_case_insensitive() {
    let cmd = parse("CREATE_TABLE t flag:bool").unwrap();
    assert!(matches!(cmd, Command::CreateTable { .. }));
}

#[test]
fn parse_create_table_requires_a_column() {
    assert!(matches!(parse("create_table users"), Err(DbError::Parse(_))));
    assert!(matches!(parse("create_table"), Err(DbError::Parse(_))));
}

#[test]
fn parse_create_table_rejects_bad_column_syntax() {
    for bad in ["name", "name:", ":int", "a:b:c", " : "] {
        let err = parse(&format!("create_table t '{bad}'")).unwrap_err();
        assert!(matches!(err, DbError::BadColumnSyntax(_)), "{bad}: {err:?}");
    }
}

#[test]
fn column_spec_is_trimmed() {
    assert_eq!(
        parse_column_spec(" name : str ").unwrap(),
        ("name".to_string(), "str".to_string())
    );
}

#[test]
fn column_spec_does_not_check_the_type() {
    assert_eq!(
        parse_column_spec("x:float").unwrap(),
        ("x".to_string(), "float".to_string())
    );
}

#[test]
fn parse_drop_table_and_info_take_one_argument() {
    assert_eq!(
        parse("drop_table users").unwrap(),
        Command::DropTable {
            table: "users".to_string()
        }
    );
    assert_eq!(
        parse("info users").unwrap(),
        Command::Info {
            table: "users".to_string()
        }
    );
    assert!(matches!(parse("drop_table"), Err(DbError::Parse(_))));
    assert!(matches!(parse("drop_table a b"), Err(DbError::Parse(_))));
    assert!(matches!(parse("info"), Err(DbError::Parse(_))));
    assert!(matches!(parse("info a b"), Err(DbError::Parse(_))));
}
