//! Library integration tests.

use cairn::CairnError;

#[test]
fn error_types_are_public() {
    let err = CairnError::ResolveFailed {
        name: "test/name".into(),
        message: "unreachable".into(),
    };
    assert!(err.to_string().contains("test/name"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> cairn::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn anyhow_errors_convert_for_custom_providers() {
    let err: CairnError = anyhow::anyhow!("backend threw").into();
    assert!(matches!(err, CairnError::Other(_)));
}
