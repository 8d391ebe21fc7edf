// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use crypto_dashboard_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            provider: "CoinGecko".into(),
            message: "Snapshot request returned HTTP 429".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (CoinGecko): Snapshot request returned HTTP 429"
        );
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn invalid_snapshot() {
        let err = CoreError::InvalidSnapshot("duplicate asset id 'bitcoin'".into());
        assert_eq!(
            err.to_string(),
            "Invalid snapshot: duplicate asset id 'bitcoin'"
        );
    }

    #[test]
    fn messages_are_non_empty_for_all_variants() {
        let errors = [
            CoreError::Network("x".into()),
            CoreError::Api {
                provider: "p".into(),
                message: "m".into(),
            },
            CoreError::Deserialization("d".into()),
            CoreError::InvalidSnapshot("s".into()),
        ];
        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_maps_to_deserialization() {
        let parse_err = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err: CoreError = parse_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
        assert!(err.to_string().starts_with("Deserialization error:"));
    }
}
