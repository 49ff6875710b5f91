//! Unit tests for embedding providers

use std::time::Duration;

use rrs_domain::error::Error;
use rrs_providers::EmbeddingProvider;
use rrs_providers::embedding::{EdgeEmbeddingProvider, NullEmbeddingProvider};

fn provider_for(server_url: String) -> EdgeEmbeddingProvider {
    let client = reqwest::Client::builder()
        .build()
        .expect("Failed to create HTTP client");
    EdgeEmbeddingProvider::new(
        server_url,
        "test-anon-key".to_string(),
        Duration::from_secs(5),
        client,
    )
}

#[cfg(test)]
mod edge_tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[test]
    fn test_edge_provider_creation() {
        let provider = provider_for("https://project.supabase.co/".to_string());
        assert_eq!(provider.base_url(), "https://project.supabase.co");
        assert_eq!(provider.provider_name(), "edge");
        assert_eq!(provider.dimensions(), 768);
    }

    #[test]
    fn test_embed_success_with_mock_server() {
        let mut server = Server::new();
        let response_body = json!({ "embedding": vec![0.25_f32; 768] }).to_string();

        let _mock = server
            .mock("POST", "/functions/v1/generate-embedding")
            .match_header("apikey", "test-anon-key")
            .match_header("authorization", "Bearer test-anon-key")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(response_body)
            .create();

        let provider = provider_for(server.url());
        let result = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(provider.embed("best seafood in portland"))
            .unwrap();

        assert_eq!(result.vector.len(), 768);
        assert_eq!(result.dimensions, 768);
        assert_eq!(result.model, "embedding-001");
    }

    #[test]
    fn test_embed_trims_text_before_dispatch() {
        let mut server = Server::new();
        let response_body = json!({ "embedding": vec![0.0_f32; 768] }).to_string();

        let mock = server
            .mock("POST", "/functions/v1/generate-embedding")
            .match_body(mockito::Matcher::Json(json!({ "text": "tacos" })))
            .with_status(200)
            .with_body(response_body)
            .create();

        let provider = provider_for(server.url());
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(provider.embed("  tacos  "))
            .unwrap();

        mock.assert();
    }

    #[test]
    fn test_embed_empty_text_makes_no_network_call() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/functions/v1/generate-embedding")
            .expect(0)
            .create();

        let provider = provider_for(server.url());
        let runtime = tokio::runtime::Runtime::new().unwrap();

        for text in ["", "   ", "\n\t"] {
            let result = runtime.block_on(provider.embed(text));
            assert!(matches!(result, Err(Error::EmptyQuery)));
        }

        mock.assert();
    }

    #[test]
    fn test_embed_oversized_text_makes_no_network_call() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/functions/v1/generate-embedding")
            .expect(0)
            .create();

        let provider = provider_for(server.url());
        let text = "a".repeat(10_001);
        let result = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(provider.embed(&text));

        assert!(matches!(result, Err(Error::QueryTooLong { .. })));
        mock.assert();
    }

    #[test]
    fn test_embed_surfaces_remote_error_detail() {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/functions/v1/generate-embedding")
            .with_status(502)
            .with_body(r#"{"error":"upstream down","details":"Gemini API error (500)"}"#)
            .create();

        let provider = provider_for(server.url());
        let result = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(provider.embed("ramen"));

        match result {
            Err(Error::Embedding { message }) => {
                assert!(message.contains("upstream down"), "message was: {message}");
                assert!(message.contains("502"), "message was: {message}");
            }
            other => panic!("expected Embedding error, got {other:?}"),
        }
    }

    #[test]
    fn test_embed_rejects_wrong_dimension() {
        let mut server = Server::new();
        let response_body = json!({ "embedding": vec![0.5_f32; 767] }).to_string();

        let _mock = server
            .mock("POST", "/functions/v1/generate-embedding")
            .with_status(200)
            .with_body(response_body)
            .create();

        let provider = provider_for(server.url());
        let result = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(provider.embed("pho"));

        match result {
            Err(Error::InvalidEmbeddingShape { expected, actual }) => {
                assert_eq!(expected, 768);
                assert_eq!(actual, 767);
            }
            other => panic!("expected InvalidEmbeddingShape, got {other:?}"),
        }
    }

    #[test]
    fn test_embed_rejects_malformed_response() {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/functions/v1/generate-embedding")
            .with_status(200)
            .with_body(r#"{"vector": [1, 2, 3]}"#)
            .create();

        let provider = provider_for(server.url());
        let result = tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(provider.embed("dumplings"));

        match result {
            Err(Error::Embedding { message }) => {
                assert!(message.contains("invalid embedding response format"));
            }
            other => panic!("expected Embedding error, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod null_tests {
    use super::*;

    #[test]
    fn test_null_provider_dimensions() {
        let provider = NullEmbeddingProvider::new();
        assert_eq!(provider.dimensions(), 768);
        assert_eq!(provider.provider_name(), "null");
    }

    #[test]
    fn test_null_provider_is_deterministic() {
        let provider = NullEmbeddingProvider::new();
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let a = runtime.block_on(provider.embed("best seafood")).unwrap();
        let b = runtime.block_on(provider.embed("best seafood")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.vector.len(), 768);
    }

    #[test]
    fn test_null_provider_handles_long_high_codepoint_text() {
        // 5,000 copies of U+10FFFF; a plain u32 sum of the codepoints
        // would overflow
        let provider = NullEmbeddingProvider::new();
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let text = "\u{10FFFF}".repeat(5_000);

        let a = runtime.block_on(provider.embed(&text)).unwrap();
        let b = runtime.block_on(provider.embed(&text)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.vector.len(), 768);
    }

    #[test]
    fn test_null_provider_validates_input() {
        let provider = NullEmbeddingProvider::new();
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let result = runtime.block_on(provider.embed("  "));
        assert!(matches!(result, Err(Error::EmptyQuery)));
    }
}
