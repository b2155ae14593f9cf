//! Tests for environment writers

use cfprov_providers::environment::{EnvWriter, InMemoryEnvWriter, ProcessEnvWriter};

#[test]
fn test_in_memory_writer_overwrites() {
    let writer = InMemoryEnvWriter::new();
    assert!(writer.is_empty());

    writer.set_var("A", "1").expect("set");
    writer.set_var("A", "2").expect("set");

    assert_eq!(writer.get("A").as_deref(), Some("2"));
    assert_eq!(writer.len(), 1);
}

#[test]
fn test_process_writer_sets_variable() {
    let key = "CFPROV_WRITER_TEST_VARIABLE";
    ProcessEnvWriter::new().set_var(key, "bound").expect("set");
    assert_eq!(std::env::var(key).as_deref(), Ok("bound"));
}

#[test]
fn test_process_writer_rejects_invalid_names() {
    let writer = ProcessEnvWriter::new();
    assert!(writer.set_var("", "x").is_err());
    assert!(writer.set_var("A=B", "x").is_err());
    assert!(writer.set_var("A", "x\0y").is_err());
}
