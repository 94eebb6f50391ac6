use roster_core::{Database, NewEmployee};
use tempfile::TempDir;

/// Helper function to create a database in a temporary directory
pub fn create_test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::connect(temp_dir.path().join("test.db")).expect("Failed to create database");
    (temp_dir, db)
}

pub fn new_employee(name: &str, age: i64, department: &str, salary: f64) -> NewEmployee {
    NewEmployee {
        name: name.to_string(),
        age,
        department: department.to_string(),
        salary,
    }
}
