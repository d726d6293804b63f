use super::*;

#[test]
fn default_matches_reference_policy() {
    let cfg = PipelineConfig::default();
    assert_eq!(cfg.chunk_size, 2300);
    assert_eq!(cfg.out_dir, PathBuf::from("."));
    assert!(cfg.validate().is_ok());
}

#[test]
fn zero_chunk_size_is_rejected() {
    let err = PipelineConfig::default()
        .with_chunk_size(0)
        .validate()
        .unwrap_err();
    assert!(matches!(err, QrsplitError::Validation(_)));
}

#[test]
fn image_path_uses_label_and_bmp_extension() {
    let cfg = PipelineConfig::default().with_out_dir("out");
    assert_eq!(cfg.image_path("SEG3-17"), PathBuf::from("out").join("SEG3-17.bmp"));
}
