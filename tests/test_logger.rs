use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_logger_from_file() {
    let tmp_dir = tempdir().unwrap();
    let log_path = tmp_dir.path().join("titan.log");
    let config_path = tmp_dir.path().join("log4rs.yaml");
    let config = format!(
        "appenders:\n  file:\n    kind: file\n    path: \"{}\"\n    encoder:\n      pattern: \"{{l}} {{m}}{{n}}\"\nroot:\n  level: trace\n  appenders:\n    - file\n",
        log_path.display()
    );
    fs::write(&config_path, config).unwrap();

    titan::init_logger(&config_path).unwrap();
    let options = titan::new_db_options();
    log::info!("max_open_files={}", options.max_open_files);

    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("INFO Logger configured from"));
    assert!(!content.contains("new db options"));
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("INFO max_open_files=-1"));

    assert!(titan::init_logger(&config_path).is_err());
}
