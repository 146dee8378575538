use proptest::prelude::*;
use qrshare::core::config::{EncoderConfig, ShareConfig, UiConfig};
use qrshare::{validate_url, AppConfig, Artifact, EncodingService, QrEncoder};

// Property test for validator totality
proptest! {
    #[test]
    fn test_validation_never_panics(input in ".*") {
        // Classification must be total and stable for arbitrary input
        let first = validate_url(&input);
        let second = validate_url(&input);

        prop_assert_eq!(first, second);
    }
}

// Property test for well-formed locators
proptest! {
    #[test]
    fn test_well_formed_locators_accepted(
        scheme in prop::sample::select(vec!["", "http://", "https://"]),
        host in r"[a-z][a-z0-9]{0,10}(\.[a-z][a-z0-9]{0,10}){0,3}\.[a-z]{2,6}",
        port in prop::option::of(1u16..65535),
        segments in prop::collection::vec(r"[a-z0-9]{1,8}", 0..4)
    ) {
        let mut url = format!("{}{}", scheme, host);
        if let Some(port) = port {
            url.push_str(&format!(":{}", port));
        }
        for segment in &segments {
            url.push_str(&format!("/{}", segment));
        }

        prop_assert!(validate_url(&url), "rejected: {}", url);

        // Acceptance is case-insensitive
        prop_assert!(validate_url(&url.to_uppercase()), "rejected uppercase: {}", url);
    }
}

// Property test for dotted-quad addresses
proptest! {
    #[test]
    fn test_dotted_quads_matched_syntactically(
        octets in prop::collection::vec(0u32..1000, 4)
    ) {
        // Octets are not range-checked, only shaped
        let address = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);

        prop_assert!(validate_url(&address), "rejected: {}", address);
    }
}

// Property test for whitespace rejection
proptest! {
    #[test]
    fn test_whitespace_always_rejected(
        head in r"[a-z]{0,10}",
        tail in r"[a-z]{0,10}",
        gap in prop::sample::select(vec![' ', '\t', '\n'])
    ) {
        let input = format!("{}{}{}", head, gap, tail);

        prop_assert!(!validate_url(&input), "accepted: {:?}", input);
    }
}

// Property test for scheme restriction
proptest! {
    #[test]
    fn test_other_schemes_rejected(scheme in r"[a-gi-z][a-z]{1,6}") {
        let url = format!("{}://example.com", scheme);

        prop_assert!(!validate_url(&url), "accepted: {}", url);
    }
}

// Property test for query and fragment suffixes
proptest! {
    #[test]
    fn test_query_and_fragment_keep_locator_valid(
        query in r"[a-z0-9=&;]{0,12}",
        fragment in r"[a-z0-9_\-]{0,8}"
    ) {
        let url = format!("https://example.com/page?{}#{}", query, fragment);

        prop_assert!(validate_url(&url), "rejected: {}", url);
    }
}

// Property test for encoder determinism
proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]
    #[test]
    fn test_encoder_deterministic_for_any_locator(
        path in r"[a-z0-9]{1,40}",
        size in 100u32..800
    ) {
        let url = format!("https://example.com/{}", path);
        let encoder = QrEncoder::new();

        let first = tokio_test::block_on(encoder.encode(&url, size, size)).unwrap();
        let second = tokio_test::block_on(encoder.encode(&url, size, size)).unwrap();

        prop_assert_eq!(first.data(), second.data());
        prop_assert!(first.data().starts_with(b"\x89PNG\r\n\x1a\n"));
        prop_assert_eq!(first.width(), first.height());
        prop_assert!(first.width() <= size);
    }
}

// Property test for artifact payload accounting
proptest! {
    #[test]
    fn test_artifact_accounting_matches_payload(
        data in prop::collection::vec(any::<u8>(), 0..4096)
    ) {
        let artifact = Artifact::new("qr-code.png", "image/png", data.clone(), 600, 600);

        prop_assert_eq!(artifact.len(), data.len());
        prop_assert_eq!(artifact.is_empty(), data.is_empty());
        prop_assert!(artifact.size_human().ends_with('B'));

        // Handles share one backing buffer
        let clone = artifact.clone();
        prop_assert_eq!(clone.data().as_ptr(), artifact.data().as_ptr());
    }
}

// Property test for configuration roundtrip
proptest! {
    #[test]
    fn test_config_serialization_roundtrip(
        size in 1u32..4096,
        enabled in any::<bool>(),
        preview in any::<bool>(),
        loading_delay_ms in 0u64..10_000
    ) {
        let original_config = AppConfig {
            encoder: EncoderConfig { size },
            share: ShareConfig { enabled },
            ui: UiConfig {
                preview,
                loading_delay_ms,
            },
        };

        // Serialize to TOML and back
        let toml_string = toml::to_string(&original_config).unwrap();
        let parsed_config: AppConfig = toml::from_str(&toml_string).unwrap();

        prop_assert_eq!(original_config.encoder.size, parsed_config.encoder.size);
        prop_assert_eq!(original_config.share.enabled, parsed_config.share.enabled);
        prop_assert_eq!(original_config.ui.preview, parsed_config.ui.preview);
        prop_assert_eq!(original_config.ui.loading_delay_ms, parsed_config.ui.loading_delay_ms);
    }
}
