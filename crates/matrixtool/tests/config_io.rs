use matrixtool::config::DEFAULT_MAX_COFACTOR_DIM;
use matrixtool::io::{read_matrix, write_matrix};
use matrixtool::{Delimiter, KernelConfig, Matrix};

#[test]
fn config_round_trips_through_json() {
    let config = KernelConfig {
        seed: Some(7),
        precision: Some(3),
        delimiter: Delimiter::Tab,
        ..KernelConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: KernelConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn missing_config_fields_take_defaults() {
    let config: KernelConfig = serde_json::from_str(r#"{"seed": 11}"#).unwrap();
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.max_cofactor_dim, Some(DEFAULT_MAX_COFACTOR_DIM));
    assert_eq!(config.delimiter, Delimiter::Auto);

    let config: KernelConfig =
        serde_json::from_str(r#"{"max_cofactor_dim": null, "delimiter": "comma"}"#).unwrap();
    assert_eq!(config.max_cofactor_dim, None);
    assert_eq!(config.delimiter, Delimiter::Comma);
}

#[test]
fn config_accepts_file_type_delimiter_names() {
    let config: KernelConfig = serde_json::from_str(r#"{"delimiter": "csv"}"#).unwrap();
    assert_eq!(config.delimiter, Delimiter::Comma);
    let config: KernelConfig = serde_json::from_str(r#"{"delimiter": "tsv"}"#).unwrap();
    assert_eq!(config.delimiter, Delimiter::Tab);
    assert!(serde_json::from_str::<KernelConfig>(r#"{"delimiter": "pipe"}"#).is_err());
}

#[test]
fn seeded_random_matrix_survives_a_file_round_trip() {
    let config = KernelConfig::new(None, Some(42));
    let mut rng = config.rng();
    let x = Matrix::random_range(3, 4, -5.0, 5.0, &mut rng).unwrap();
    assert!(x.as_slice().iter().all(|v| (-5.0..5.0).contains(v)));

    let mut again = config.rng();
    assert_eq!(Matrix::random_range(3, 4, 5.0, -5.0, &mut again).unwrap(), x);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("random.tsv");
    write_matrix(&path, &x, Delimiter::Auto).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.lines().all(|line| line.split('\t').count() == 4));
    assert_eq!(read_matrix(&path).unwrap(), x);
}
