//! Integration tests for reading database settings from the environment

use portfolio_common::{DatabaseConfig, DatabaseError};
use serial_test::serial;

#[test]
#[serial]
fn invalid_port_is_reported_as_configuration_error() {
    unsafe {
        std::env::set_var("DB_PORT", "not-a-port");
    }

    let result = DatabaseConfig::from_env();

    unsafe {
        std::env::remove_var("DB_PORT");
    }

    match result {
        Err(DatabaseError::Configuration(_)) => {}
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
#[serial]
fn numeric_password_keeps_leading_zeros() {
    unsafe {
        std::env::set_var("DB_PASSWORD", "007123");
    }

    let config = DatabaseConfig::from_env();

    unsafe {
        std::env::remove_var("DB_PASSWORD");
    }

    assert_eq!(config.unwrap().password, "007123");
}
