use crate::ENV_LOCK;
use faucet_verify::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        env::set_var("FV_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("FV_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("FV_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        env::remove_var("FV_MISSING_VAR");
        let result: String = get_env_or_default("FV_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        env::set_var("FV_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("FV_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("FV_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        env::set_var("FV_TEST_VAR_OPTION", "123");
        let result: Option<u32> = get_env_or_none("FV_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("FV_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_empty_var() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        env::set_var("FV_TEST_VAR_EMPTY", "  ");
        let result: Option<String> = get_env_or_none("FV_TEST_VAR_EMPTY");
        assert_eq!(result, None);
        env::remove_var("FV_TEST_VAR_EMPTY");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        env::remove_var("FV_MISSING_VAR_OPTION");
        let result: Option<i32> = get_env_or_none("FV_MISSING_VAR_OPTION");
        assert_eq!(result, None);
    }
}
