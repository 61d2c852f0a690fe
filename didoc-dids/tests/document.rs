use didoc_dids::{DIDDocument, Error, InvalidDocument, LinkedDataObject, VerificationMethod};
use serde_json::{json, Map, Value};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

fn cause(err: Error) -> InvalidDocument {
    match err {
        Error::Validation(e) => e.cause().clone(),
        e => panic!("expected validation error, got {:?}", e),
    }
}

#[test]
fn single_verification_method() {
    init();
    let doc = DIDDocument::from_json(
        r#"{"@context":"https://www.w3.org/ns/did/v1","id":"did:example:123","verificationMethod":{"id":"did:example:123#key-1"}}"#,
    )
    .unwrap();
    assert_eq!(doc.id(), "did:example:123");
    assert_eq!(doc.verification_methods().len(), 1);

    let expected = VerificationMethod::try_from(map(json!({ "id": "did:example:123#key-1" })))
        .unwrap();
    assert_eq!(doc.verification_methods(), &[expected]);
}

#[test]
fn verification_methods_keep_source_order() {
    init();
    let ids: Vec<String> = (0..5)
        .rev()
        .map(|i| format!("did:example:123#key-{}", i))
        .collect();
    let methods: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    let doc = DIDDocument::new(map(json!({
        "@context": "https://www.w3.org/ns/did/v1",
        "id": "did:example:123",
        "verificationMethod": methods
    })))
    .unwrap();
    let decoded: Vec<&str> = doc
        .verification_methods()
        .iter()
        .map(|vm| vm.id.as_str())
        .collect();
    assert_eq!(decoded, ids);
}

#[test]
fn empty_verification_method_array() {
    init();
    let doc = DIDDocument::from_json(
        r#"{"@context":"https://www.w3.org/ns/did/v1","id":"did:example:123","verificationMethod":[]}"#,
    )
    .unwrap();
    assert!(doc.verification_methods().is_empty());
}

#[test]
fn unsupported_verification_method_shape_reads_as_empty() {
    init();
    for value in [json!("did:example:123#key-1"), json!(7), json!(true), Value::Null] {
        let doc = DIDDocument::new(map(json!({
            "@context": "https://www.w3.org/ns/did/v1",
            "id": "did:example:123",
            "verificationMethod": value
        })))
        .unwrap();
        assert!(doc.verification_methods().is_empty());
    }
}

#[test]
fn missing_required_fields() {
    init();
    let full = json!({
        "@context": "https://www.w3.org/ns/did/v1",
        "id": "did:example:123",
        "verificationMethod": { "id": "did:example:123#key-1" }
    });
    let expected = [
        (
            "@context",
            InvalidDocument::Context(didoc_json_ld::Error::MissingContext),
        ),
        ("id", InvalidDocument::MissingDocumentId),
        ("verificationMethod", InvalidDocument::MissingVerificationMethod),
    ];
    for (key, expected) in expected {
        let mut input = map(full.clone());
        input.remove(key);
        let err = DIDDocument::new(input).unwrap_err();
        assert_eq!(cause(err), expected, "without {}", key);
    }
}

#[test]
fn missing_verification_method_from_json() {
    init();
    let err = DIDDocument::from_json(
        r#"{"@context":"https://www.w3.org/ns/did/v1","id":"did:example:123"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn invalid_id_is_a_validation_error() {
    init();
    let err = DIDDocument::from_json(
        r#"{"@context":"https://www.w3.org/ns/did/v1","id":"not a uri","verificationMethod":[]}"#,
    )
    .unwrap_err();
    assert!(matches!(
        cause(err),
        InvalidDocument::InvalidDocumentId(didoc_core::FormatError::InvalidURI(_))
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    init();
    let err = DIDDocument::from_json("{id:").unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn bad_verification_method_rejects_document() {
    init();
    let err = DIDDocument::new(map(json!({
        "@context": "https://www.w3.org/ns/did/v1",
        "id": "did:example:123",
        "verificationMethod": [
            { "id": "did:example:123#key-1" },
            { "id": "did:example:123#key-2", "controller": 5 }
        ]
    })))
    .unwrap_err();
    assert!(matches!(
        cause(err),
        InvalidDocument::InvalidVerificationMethod { index: 1, .. }
    ));
}

#[test]
fn round_trip_preserves_fields() {
    init();
    let input = json!({
        "@context": [
            "https://www.w3.org/ns/did/v1",
            { "@vocab": "https://example.org/vocab#" }
        ],
        "id": "did:example:123",
        "verificationMethod": { "id": "#key-1", "type": "JsonWebKey2020" },
        "authentication": ["#key-1"],
        "service": [{ "id": "#hub", "type": "Hub", "serviceEndpoint": "https://hub.example" }]
    });
    let doc: DIDDocument = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(serde_json::to_value(&doc).unwrap(), input);
    assert_eq!(doc.get("service"), input.get("service"));
    assert_eq!(Value::Object(doc.into_json_ld().into_map()), input);
}

#[test]
fn accessors_are_idempotent() {
    init();
    let doc = DIDDocument::new(map(json!({
        "@context": "https://www.w3.org/ns/did/v1",
        "id": "did:example:123",
        "verificationMethod": [{ "id": "#key-1" }, { "id": "#key-2" }]
    })))
    .unwrap();
    assert_eq!(doc.verification_methods(), doc.verification_methods());
    assert_eq!(doc.id(), doc.id());
}

#[test]
fn shared_between_threads() {
    init();
    let doc = std::sync::Arc::new(
        DIDDocument::from_json(
            r##"{"@context":"https://www.w3.org/ns/did/v1","id":"did:example:123","verificationMethod":[{"id":"#key-1"}]}"##,
        )
        .unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let doc = doc.clone();
            std::thread::spawn(move || doc.verification_methods().len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1);
    }
}

#[test]
fn relative_ids_and_null_properties() {
    init();
    let doc = DIDDocument::from_json(
        r##"{"@context":"https://www.w3.org/ns/did/v1","id":"did:example:123","verificationMethod":[{"id":"#key-1","type":null,"controller":null}],"authentication":["#key-1"]}"##,
    )
    .unwrap();
    let vm = &doc.verification_methods()[0];
    assert_eq!(vm.id.as_str(), "#key-1");
    assert_eq!(vm.type_, None);
    assert_eq!(vm.controller, None);
    assert_eq!(doc.find_verification_method("did:example:123#key-1"), Some(vm));
    assert_eq!(doc.authentication_methods().unwrap().len(), 1);
}
