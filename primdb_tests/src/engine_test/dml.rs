use super::*;

#[test]
fn insert_assigns_sequential_keys() {
    let mut db = mem_db();
    run(&mut db, "create_table t n:int");
    for expected in 1..=5 {
        let out = run(&mut db, &format!("insert into t values ({})", expected * 10));
        assert_eq!(
            text(&out),
            format!(r#"Record with ID={expected} inserted into table "t"."#)
        );
    }
    let ids: Vec<Value> = rows(&run(&mut db, "select from t"))
        .into_iter()
        .map(|r| r[0].clone())
        .collect();
    assert_eq!(ids, (1..=5).map(int).collect::<Vec<_>>());
}

#[test]
fn deleted_keys_are_never_reused() {
    let mut db = mem_db();
    seed_users(&mut db);
    run(&mut db, "delete from users where ID = 2");
    let out = run(&mut db, r#"insert into users values ("Dee", 40)"#);
    assert!(text(&out).contains("ID=4"));

    // removing the largest key must not hand it out again either
    run(&mut db, "delete from users where ID = 4");
    let out = run(&mut db, r#"insert into users values ("Eve", 50)"#);
    assert!(text(&out).contains("ID=5"));
}

#[test]
fn insert_converts_values_by_declared_type() {
    let mut db = mem_db();
    run(&mut db, "create_table t name:str n:int ok:bool");
    run(&mut db, r#"insert into t values ("Lee, Ann", -7, TRUE)"#);
    run(&mut db, "insert into t values ('x', 0, 0)");
    assert_eq!(
        rows(&run(&mut db, "select from t")),
        vec![
            vec![int(1), s("Lee, Ann"), int(-7), Value::Bool(true)],
            vec![int(2), s("x"), int(0), Value::Bool(false)],
        ]
    );
}

#[test]
fn insert_value_count_must_match_data_columns() {
    let mut db = mem_db();
    run(&mut db, "create_table t a:int b:int");
    assert!(matches!(
        run_err(&mut db, "insert into t values (1)"),
        DbError::ValueCountMismatch { expected: 2, got: 1 }
    ));
    assert!(matches!(
        run_err(&mut db, "insert into t values (1, 2, 3)"),
        DbError::ValueCountMismatch { expected: 2, got: 3 }
    ));
}

#[test]
fn insert_into_missing_table() {
    let mut db = mem_db();
    assert!(matches!(
        run_err(&mut db, "insert into ghosts values (1)"),
        DbError::TableNotExists(_)
    ));
}

#[test]
fn insert_with_bad_value_changes_nothing() {
    let mut db = mem_db();
    run(&mut db, "create_table t name:str n:int");
    let before = db.store().get(BlobKey::Table("t")).map(str::to_string);
    assert!(matches!(
        run_err(&mut db, r#"insert into t values ("a", 1.5)"#),
        DbError::InvalidValue(_)
    ));
    assert_eq!(db.store().get(BlobKey::Table("t")).map(str::to_string), before);
    let out = run(&mut db, r#"insert into t values ("a", 1)"#);
    assert!(text(&out).contains("ID=1"));
}

#[test]
fn insert_with_primary_key_declared_later() {
    let mut db = mem_db();
    run(&mut db, "create_table t name:str ID:int age:int");
    run(&mut db, r#"insert into t values ("Ann", 30)"#);
    assert_eq!(
        rows(&run(&mut db, "select from t")),
        vec![vec![s("Ann"), int(1), int(30)]]
    );
}

#[test]
fn update_matching_rows_reports_each() {
    let mut db = mem_db();
    seed_users(&mut db);
    let out = run(&mut db, "update users set age = 31 where age = 30");
    assert_eq!(
        out.notices,
        vec![
            r#"Record with ID=1 in table "users" updated."#.to_string(),
            r#"Record with ID=3 in table "users" updated."#.to_string(),
        ]
    );
    assert_eq!(
        rows(&run(&mut db, "select from users")),
        vec![
            vec![int(1), s("Ann"), int(31)],
            vec![int(2), s("Bob"), int(20)],
            vec![int(3), s("Cid"), int(31)],
        ]
    );
}

#[test]
fn update_without_where_touches_every_row() {
    let mut db = mem_db();
    seed_users(&mut db);
    let out = run(&mut db, r#"update users set name = "X, Y", age = 1"#);
    assert_eq!(out.notices.len(), 3);
    assert!(
        rows(&run(&mut db, "select from users"))
            .iter()
            .all(|r| r[1] == s("X, Y") && r[2] == int(1))
    );
}

#[test]
fn update_with_no_match_leaves_document_untouched() {
    let mut db = mem_db();
    seed_users(&mut db);
    let before = db.store().get(BlobKey::Table("users")).unwrap().to_string();
    let out = run(&mut db, "update users set age = 1 where ID = 999");
    assert_eq!(text(&out), "No records match the condition.");
    assert_eq!(db.store().get(BlobKey::Table("users")).unwrap(), before);
}

#[test]
fn update_validates_every_assignment_before_mutating() {
    let mut db = mem_db();
    seed_users(&mut db);
    let before = db.store().get(BlobKey::Table("users")).unwrap().to_string();

    assert!(matches!(
        run_err(&mut db, "update users set age = 5, email = x"),
        DbError::UnknownColumn(c) if c == "email"
    ));
    assert!(matches!(
        run_err(&mut db, "update users set name = Z, age = old"),
        DbError::InvalidValue(_)
    ));
    assert!(matches!(
        run_err(&mut db, "update users set ID = 7 where name = Ann"),
        DbError::ReadOnlyColumn(_)
    ));
    assert!(matches!(
        run_err(&mut db, "update users set age = 5 where email = x"),
        DbError::UnknownColumn(_)
    ));
    assert!(matches!(
        run_err(&mut db, "update ghosts set age = 5"),
        DbError::TableNotExists(_)
    ));
    assert_eq!(db.store().get(BlobKey::Table("users")).unwrap(), before);
}

#[test]
fn delete_removes_matches_and_keeps_order() {
    let mut db = mem_db();
    seed_users(&mut db);
    let out = run(&mut db, "delete from users where age = 30");
    assert_eq!(
        out.notices,
        vec![
            r#"Record with ID=1 deleted from table "users"."#.to_string(),
            r#"Record with ID=3 deleted from table "users"."#.to_string(),
        ]
    );
    assert_eq!(
        rows(&run(&mut db, "select from users")),
        vec![vec![int(2), s("Bob"), int(20)]]
    );
}

#[test]
fn delete_with_no_match() {
    let mut db = mem_db();
    seed_users(&mut db);
    let before = db.store().get(BlobKey::Table("users")).unwrap().to_string();
    let out = run(&mut db, "delete from users where name = Zed");
    assert_eq!(text(&out), "No records match the condition.");
    assert_eq!(db.store().get(BlobKey::Table("users")).unwrap(), before);
}

#[test]
fn delete_validates_condition() {
    let mut db = mem_db();
    seed_users(&mut db);
    assert!(matches!(
        run_err(&mut db, "delete from users where email = x"),
        DbError::UnknownColumn(_)
    ));
    assert!(matches!(
        run_err(&mut db, "delete from users where age = old"),
        DbError::InvalidValue(_)
    ));
    assert!(matches!(
        run_err(&mut db, "delete from users where age > 3"),
        DbError::InvalidValue(_)
    ));
}

#[test]
fn escaped_quotes_survive_insert_and_update() {
    let mut db = mem_db();
    run(&mut db, "create_table t name:str n:int");
    run(&mut db, r#"insert into t values ("a\"b", 1)"#);
    assert_eq!(rows(&run(&mut db, "select from t")), vec![vec![int(1), s("a\"b"), int(1)]]);

    run(&mut db, r#"update t set name = "c\", d", n = 2 where ID = 1"#);
    assert_eq!(rows(&run(&mut db, "select from t")), vec![vec![int(1), s("c\", d"), int(2)]]);
}
