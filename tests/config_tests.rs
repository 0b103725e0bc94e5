use std::path::PathBuf;

use tui_blockfall::config::{
    Config, CELL_WIDTH_VAR, DEFAULT_CELL_WIDTH, LOG_PATH_VAR, SEED_VAR,
};

fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn test_defaults_without_variables() {
    let config = Config::from_lookup(|_| None);
    assert_eq!(config.log_path, None);
    assert_eq!(config.cell_width, DEFAULT_CELL_WIDTH);
    assert!(config.rejected.is_empty());
}

#[test]
fn test_reads_all_variables() {
    let vars = [
        (SEED_VAR, "12345"),
        (LOG_PATH_VAR, " /tmp/blockfall.log "),
        (CELL_WIDTH_VAR, "3"),
    ];
    let config = Config::from_lookup(lookup(&vars));

    assert_eq!(config.seed, 12345);
    assert_eq!(config.log_path, Some(PathBuf::from("/tmp/blockfall.log")));
    assert_eq!(config.cell_width, 3);
    assert!(config.rejected.is_empty());
}

#[test]
fn test_invalid_values_fall_back() {
    let vars = [(SEED_VAR, "not-a-number"), (CELL_WIDTH_VAR, "9")];
    let config = Config::from_lookup(lookup(&vars));

    assert_eq!(config.cell_width, DEFAULT_CELL_WIDTH);
    assert_eq!(config.rejected.len(), 2);
    assert!(config.rejected[0].contains(SEED_VAR));
    assert!(config.rejected[1].contains(CELL_WIDTH_VAR));
}

#[test]
fn test_zero_cell_width_is_rejected() {
    let config = Config::from_lookup(lookup(&[(CELL_WIDTH_VAR, "0")]));
    assert_eq!(config.cell_width, DEFAULT_CELL_WIDTH);
    assert_eq!(config.rejected.len(), 1);
}
