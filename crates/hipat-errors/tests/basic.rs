use hipat_errors::prelude::*;

#[test]
fn builder_fills_defaults() {
    let obj = ErrorBuilder::new(codes::UNKNOWN_INTERNAL).build();
    assert_eq!(obj.code, codes::UNKNOWN_INTERNAL);
    assert_eq!(obj.message_user, "Something went wrong.");
    assert!(obj.message_dev.is_none());
    assert_eq!(obj.retry, RetryClass::None);
}

#[test]
fn public_view_hides_dev_detail() {
    let obj = ErrorBuilder::new(codes::CHANNEL_LOAD_TIMEOUT)
        .user_msg("The tool took too long to load.")
        .dev_msg("no TOOL_READY within 30000ms")
        .retry(RetryClass::Transient)
        .build();
    let view = obj.to_public();
    assert_eq!(view.code, "CHANNEL.LOAD_TIMEOUT");
    assert_eq!(view.message, "The tool took too long to load.");
    assert!(view.retryable);

    let rendered = serde_json::to_string(&view).unwrap();
    assert!(!rendered.contains("30000ms"));
}

#[test]
fn retry_class_str_forms_are_stable() {
    assert_eq!(RetryClass::None.as_str(), "none");
    assert_eq!(RetryClass::Transient.as_str(), "transient");
    assert_eq!(RetryClass::Permanent.as_str(), "permanent");
}
