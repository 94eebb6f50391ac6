//! Tests for the session module.

use log::Level;
use tempfile::TempDir;

use super::*;
use crate::{
    console::ScriptedConsole,
    events::MemorySink,
    models::{Employee, NewEmployee},
};

/// Helper function to create a test database in a temporary directory
fn create_test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::connect(temp_dir.path().join("test.db")).expect("Failed to create database");
    (temp_dir, db)
}

fn seed(db: &mut Database, name: &str, age: i64, department: &str, salary: f64) -> i64 {
    db.insert_employee(&NewEmployee {
        name: name.to_string(),
        age,
        department: department.to_string(),
        salary,
    })
    .expect("Failed to seed employee")
}

fn find(db: &Database, id: i64) -> Option<Employee> {
    db.list_employees()
        .expect("Failed to list employees")
        .into_iter()
        .find(|e| e.id == id)
}

fn page_size(n: usize) -> PageSize {
    PageSize::new(n).expect("valid page size")
}

#[test]
fn test_create_employee_inserts_record() {
    let (_temp_dir, db) = create_test_db();
    let mut console = ScriptedConsole::new(["Alice", "30", "Eng", "50000"]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    session.dispatch(MenuChoice::Create).expect("create");

    let employees = session.database().list_employees().expect("list");
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name, "Alice");
    assert_eq!(employees[0].age, 30);
    assert_eq!(employees[0].department, "Eng");
    assert_eq!(employees[0].salary, 50000.0);
    let id = employees[0].id;
    drop(session);

    assert!(console.transcript().contains("Employee added successfully!"));
    assert_eq!(
        sink.events(),
        &[Event::Created {
            id,
            name: "Alice".to_string()
        }]
    );
}

#[test]
fn test_create_reprompts_invalid_numbers() {
    let (_temp_dir, db) = create_test_db();
    let mut console =
        ScriptedConsole::new(["Bob", "zero", "0", "-2", "25", "Ops", "abc", "-1", "1200.50"]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    session.dispatch(MenuChoice::Create).expect("create");

    let employees = session.database().list_employees().expect("list");
    assert_eq!(employees[0].age, 25);
    assert_eq!(employees[0].salary, 1200.5);
    drop(session);

    assert_eq!(console.transcript().matches("Invalid input").count(), 5);
}

#[test]
fn test_read_shows_all_pages() {
    let (_temp_dir, mut db) = create_test_db();
    for i in 1..=12 {
        seed(&mut db, &format!("Worker {i}"), 20 + i, "Ops", 1000.0);
    }
    let mut console = ScriptedConsole::new(["", ""]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, page_size(5));
    session.dispatch(MenuChoice::Read).expect("read");
    drop(session);

    let transcript = console.transcript();
    assert!(transcript.contains("## Employees Page 1"));
    assert!(transcript.contains("## Employees Page 2"));
    assert!(transcript.contains("## Employees Page 3"));
    assert!(!transcript.contains("## Employees Page 4"));
    assert_eq!(transcript.matches("- ID: ").count(), 12);
    assert_eq!(console.remaining(), 0);
}

#[test]
fn test_read_exit_stops_pagination() {
    let (_temp_dir, mut db) = create_test_db();
    for i in 1..=12 {
        seed(&mut db, &format!("Worker {i}"), 20 + i, "Ops", 1000.0);
    }
    let mut console = ScriptedConsole::new(["exit", "left over"]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, page_size(5));
    session.dispatch(MenuChoice::Read).expect("read");
    drop(session);

    assert!(console.transcript().contains("## Employees Page 1"));
    assert!(!console.transcript().contains("## Employees Page 2"));
    assert_eq!(console.transcript().matches("- ID: ").count(), 5);
    assert_eq!(console.remaining(), 1);
}

#[test]
fn test_read_empty_table_prints_nothing() {
    let (_temp_dir, db) = create_test_db();
    let mut console = ScriptedConsole::new(Vec::<String>::new());
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    session.dispatch(MenuChoice::Read).expect("read");
    drop(session);

    assert!(console.transcript().is_empty());
}

#[test]
fn test_update_without_changes_issues_no_statement() {
    let (_temp_dir, mut db) = create_test_db();
    let id = seed(&mut db, "Alice", 30, "Eng", 50000.0);
    let mut console = ScriptedConsole::new([id.to_string(), "".into(), "".into(), "".into(), "".into()]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    let before = session.database().statements_issued();
    session.dispatch(MenuChoice::Update).expect("update");
    assert_eq!(session.database().statements_issued(), before);
    drop(session);

    assert!(console.transcript().contains("No changes were made."));
    assert!(sink.events().is_empty());
}

#[test]
fn test_update_age_only_leaves_other_fields() {
    let (_temp_dir, mut db) = create_test_db();
    let id = seed(&mut db, "Alice", 30, "Eng", 50000.0);
    let other = seed(&mut db, "Bob", 41, "Ops", 42000.0);
    let mut console = ScriptedConsole::new([id.to_string(), "".into(), "31".into(), "".into(), "".into()]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    let before = session.database().statements_issued();
    session.dispatch(MenuChoice::Update).expect("update");
    assert_eq!(session.database().statements_issued(), before + 1);

    let updated = find(session.database(), id).expect("updated record");
    assert_eq!(
        updated,
        Employee {
            id,
            name: "Alice".to_string(),
            age: 31,
            department: "Eng".to_string(),
            salary: 50000.0,
        }
    );
    assert_eq!(find(session.database(), other).expect("other record").age, 41);
    drop(session);

    assert!(console.transcript().contains("Employee updated successfully!"));
    assert_eq!(
        sink.events(),
        &[Event::Updated {
            id,
            rows_affected: 1
        }]
    );
}

#[test]
fn test_update_reprompts_invalid_numbers() {
    let (_temp_dir, mut db) = create_test_db();
    let id = seed(&mut db, "Alice", 30, "Eng", 50000.0);
    let mut console = ScriptedConsole::new([
        id.to_string(),
        "Alicia".into(),
        "thirty".into(),
        "32".into(),
        "".into(),
        "-5".into(),
        "70000".into(),
    ]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    session.dispatch(MenuChoice::Update).expect("update");

    let updated = find(session.database(), id).expect("updated record");
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.age, 32);
    assert_eq!(updated.department, "Eng");
    assert_eq!(updated.salary, 70000.0);
    drop(session);

    assert_eq!(console.transcript().matches("Invalid input").count(), 2);
}

#[test]
fn test_update_missing_id_reports_success_and_logs_warning() {
    let (_temp_dir, db) = create_test_db();
    let mut console = ScriptedConsole::new(["77", "Ghost", "", "", ""]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    session.dispatch(MenuChoice::Update).expect("update");
    drop(session);

    // The user-facing message does not distinguish a missing id.
    assert!(console.transcript().contains("Employee updated successfully!"));
    assert_eq!(sink.events()[0].level(), Level::Warn);
}

#[test]
fn test_delete_removes_record() {
    let (_temp_dir, mut db) = create_test_db();
    let id = seed(&mut db, "Alice", 30, "Eng", 50000.0);
    let mut console = ScriptedConsole::new([id.to_string()]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    session.dispatch(MenuChoice::Delete).expect("delete");
    assert!(find(session.database(), id).is_none());
    drop(session);

    assert_eq!(
        sink.events(),
        &[Event::Deleted {
            id,
            rows_affected: 1
        }]
    );
}

#[test]
fn test_delete_nonexistent_id_is_a_no_op() {
    let (_temp_dir, mut db) = create_test_db();
    seed(&mut db, "Alice", 30, "Eng", 50000.0);
    seed(&mut db, "Bob", 41, "Ops", 42000.0);
    let mut console = ScriptedConsole::new(["999"]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    let before = session.database().list_employees().expect("list");
    session.dispatch(MenuChoice::Delete).expect("delete");
    let after = session.database().list_employees().expect("list");
    assert_eq!(before, after);
    drop(session);

    // Mismatch: nothing was deleted, yet the message reports success.
    assert!(console.transcript().contains("Employee deleted successfully!"));
    assert_eq!(
        sink.events(),
        &[Event::Deleted {
            id: 999,
            rows_affected: 0
        }]
    );
    assert_eq!(sink.events()[0].level(), Level::Warn);
}

#[test]
fn test_search_without_matches_issues_one_query() {
    let (_temp_dir, mut db) = create_test_db();
    seed(&mut db, "Alice", 30, "Eng", 50000.0);
    let mut console = ScriptedConsole::new(["Zebra"]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    let before = session.database().statements_issued();
    session.dispatch(MenuChoice::Search).expect("search");
    assert_eq!(session.database().statements_issued(), before + 1);
    drop(session);

    assert!(console.transcript().contains("No matching records found."));
}

#[test]
fn test_search_matches_name_or_department() {
    let (_temp_dir, mut db) = create_test_db();
    seed(&mut db, "Alice", 30, "Engineering", 50000.0);
    seed(&mut db, "Bob", 41, "Operations", 42000.0);
    seed(&mut db, "Reena", 35, "Sales", 39000.0);
    let mut console = ScriptedConsole::new(["en"]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    session.dispatch(MenuChoice::Search).expect("search");
    drop(session);

    let transcript = console.transcript();
    assert!(transcript.contains("## Search Results"));
    assert!(transcript.contains("Name: Alice"));
    assert!(transcript.contains("Name: Reena"));
    assert!(!transcript.contains("Name: Bob"));
}

#[test]
fn test_end_to_end_create_read_delete() {
    let (temp_dir, db) = create_test_db();
    let mut console = ScriptedConsole::new([
        "1", "Alice", "30", "Eng", "50000", // create
        "2", // read
        "4", "1", // delete id 1
        "2", // read again
        "6",
    ]);
    let mut sink = MemorySink::new();

    Session::new(db, &mut console, &mut sink, PageSize::default())
        .run()
        .expect("session");

    let transcript = console.transcript();
    assert!(transcript.contains("- ID: 1, Name: Alice, Age: 30, Department: Eng, Salary: 50000"));
    assert_eq!(transcript.matches("## Employees Page 1").count(), 1);
    assert!(transcript.contains("Employee deleted successfully!"));
    assert!(transcript.contains("Exiting the system."));

    assert_eq!(
        sink.events(),
        &[
            Event::Created {
                id: 1,
                name: "Alice".to_string()
            },
            Event::Deleted {
                id: 1,
                rows_affected: 1
            },
            Event::Exited,
        ]
    );

    let reopened = Database::connect(temp_dir.path().join("test.db")).expect("reopen");
    assert!(find(&reopened, 1).is_none());
}

#[test]
fn test_invalid_choice_returns_to_menu() {
    let (_temp_dir, db) = create_test_db();
    let mut console = ScriptedConsole::new(["9", "abc", "6"]);
    let mut sink = MemorySink::new();

    Session::new(db, &mut console, &mut sink, PageSize::default())
        .run()
        .expect("session");

    let transcript = console.transcript();
    assert_eq!(transcript.matches("Invalid choice! Please try again.").count(), 2);
    assert_eq!(transcript.matches("# Employee Management System").count(), 3);
    assert_eq!(sink.events(), &[Event::Exited]);
}

#[test]
fn test_closed_input_exits_cleanly() {
    let (_temp_dir, db) = create_test_db();
    let mut console = ScriptedConsole::new(["1", "Half typed"]);
    let mut sink = MemorySink::new();

    Session::new(db, &mut console, &mut sink, PageSize::default())
        .run()
        .expect("session");

    assert!(console.transcript().contains("Exiting the system."));
    assert_eq!(sink.events(), &[Event::Exited]);
}

#[test]
fn test_backend_failure_reports_generic_message() {
    let (temp_dir, mut db) = create_test_db();
    seed(&mut db, "Alice", 30, "Eng", 50000.0);

    rusqlite::Connection::open(temp_dir.path().join("test.db"))
        .expect("Failed to open side connection")
        .execute_batch("DROP TABLE employees")
        .expect("Failed to drop table");

    let mut console = ScriptedConsole::new(["Bob", "41", "Ops", "42000", "Bob", "6"]);
    let mut sink = MemorySink::new();

    let mut session = Session::new(db, &mut console, &mut sink, PageSize::default());
    session.dispatch(MenuChoice::Create).expect("create");
    session.dispatch(MenuChoice::Read).expect("read");
    session.dispatch(MenuChoice::Search).expect("search");
    drop(session);

    let transcript = console.transcript();
    assert!(transcript.contains("Failed to add employee."));
    assert!(transcript.contains("Error retrieving employee data."));
    assert!(transcript.contains("Error searching employees."));
    assert!(!transcript.contains("no such table"));

    assert_eq!(sink.events().len(), 3);
    assert!(matches!(sink.events()[0], Event::CreateFailed { .. }));
    assert!(matches!(sink.events()[1], Event::ReadFailed { .. }));
    assert!(matches!(sink.events()[2], Event::SearchFailed { .. }));
    assert!(sink.events().iter().all(|e| e.level() == Level::Error));
}

#[test]
fn test_open_database_records_outcome() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut sink = MemorySink::new();

    let path = temp_dir.path().join("roster.db");
    open_database(&path, &mut sink).expect("Failed to open database");
    assert_eq!(sink.events(), &[Event::Connected { path }]);

    let missing = temp_dir.path().join("missing").join("roster.db");
    let err = open_database(&missing, &mut sink).unwrap_err();
    assert!(matches!(err, RosterError::Connection { .. }));
    assert!(matches!(sink.events()[1], Event::ConnectionFailed { .. }));
}
