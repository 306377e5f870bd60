/*!
 * Tests for the translation service
 */

use std::sync::Arc;

use transum::errors::TranslationError;
use transum::providers::mock::MockTranslator;
use transum::translation::TranslationService;

/// Test script code resolution in the outgoing request
#[tokio::test]
async fn test_translate_withSupportedLanguages_shouldResolveScriptCodes() {
    let backend = Arc::new(MockTranslator::working());
    let service = TranslationService::new(backend.clone());

    let result = service
        .translate("Hola mundo", "Spanish", "English")
        .await
        .expect("mock should succeed");
    assert_eq!(result, "[eng_Latn] Hola mundo");

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].text, "Hola mundo");
    assert_eq!(requests[0].source_script, "spa_Latn");
    assert_eq!(requests[0].target_script, "eng_Latn");
    assert_eq!(requests[0].batch_size, 10);
}

/// Test rejection of a source language outside the supported set
#[tokio::test]
async fn test_translate_withUnsupportedSource_shouldFailBeforeCalling() {
    let backend = Arc::new(MockTranslator::working());
    let service = TranslationService::new(backend.clone());

    let result = service.translate("text", "Japanese", "English").await;
    match result {
        Err(TranslationError::UnsupportedLanguage(lang)) => assert_eq!(lang, "Japanese"),
        other => panic!("expected UnsupportedLanguage, got {:?}", other),
    }
    // nothing reached the backend
    assert_eq!(backend.request_count(), 0);
}

/// Test rejection of a target language outside the supported set
#[tokio::test]
async fn test_translate_withUnsupportedTarget_shouldFailBeforeCalling() {
    let backend = Arc::new(MockTranslator::working());
    let service = TranslationService::new(backend.clone());

    let result = service.translate("text", "English", "Klingon").await;
    match result {
        Err(TranslationError::UnsupportedLanguage(lang)) => assert_eq!(lang, "Klingon"),
        other => panic!("expected UnsupportedLanguage, got {:?}", other),
    }
    assert_eq!(backend.request_count(), 0);
}

/// Test that the source is checked before the target
#[tokio::test]
async fn test_translate_withBothUnsupported_shouldReportSourceFirst() {
    let backend = Arc::new(MockTranslator::working());
    let service = TranslationService::new(backend);

    let result = service.translate("text", "Japanese", "Klingon").await;
    match result {
        Err(TranslationError::UnsupportedLanguage(lang)) => assert_eq!(lang, "Japanese"),
        other => panic!("expected UnsupportedLanguage, got {:?}", other),
    }
}

/// Test that the service wants display names, not short codes
#[tokio::test]
async fn test_translate_withShortCode_shouldRejectAsUnsupported() {
    let backend = Arc::new(MockTranslator::working());
    let service = TranslationService::new(backend.clone());

    let result = service.translate("text", "es", "English").await;
    assert!(matches!(
        result,
        Err(TranslationError::UnsupportedLanguage(_))
    ));
    assert_eq!(backend.request_count(), 0);
}

/// Test the empty result guard when the backend returns no payloads
#[tokio::test]
async fn test_translate_withNoPayloads_shouldReturnEmptyTranslationError() {
    let backend = Arc::new(MockTranslator::empty());
    let service = TranslationService::new(backend.clone());

    let result = service.translate("text", "Spanish", "English").await;
    assert!(matches!(result, Err(TranslationError::EmptyTranslation)));
    // the request did go out; the failure is in the response
    assert_eq!(backend.request_count(), 1);
}

/// Test backend failure propagation
#[tokio::test]
async fn test_translate_withFailingBackend_shouldMapToProviderError() {
    let backend = Arc::new(MockTranslator::failing());
    let service = TranslationService::new(backend);

    let result = service.translate("text", "Spanish", "English").await;
    assert!(matches!(result, Err(TranslationError::Provider(_))));
}

/// Test translating between the same language on both sides
#[tokio::test]
async fn test_translate_withSameLanguageTwice_shouldStillCallBackend() {
    let backend = Arc::new(MockTranslator::working());
    let service = TranslationService::new(backend.clone());

    let result = service
        .translate("Hello", "English", "English")
        .await
        .expect("mock should succeed");
    assert_eq!(result, "[eng_Latn] Hello");
    assert_eq!(backend.request_count(), 1);
}
