// Common utilities for integration tests

use rental_client::prelude::*;

/// Builds a configuration pointing at a mock server
pub fn test_config(base_url: &str) -> Config {
    Config {
        credentials: Credentials {
            username: "a".to_string(),
            password: "b".to_string(),
        },
        rest_api: RestApiConfig {
            base_url: base_url.to_string(),
            timeout: 5,
        },
        storage: StorageConfig {
            token_file: "unused-token-file.json".to_string(),
        },
    }
}

/// Creates a client over an in-memory token store
pub fn create_test_client(base_url: &str) -> (Arc<RentalClient>, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let client = Arc::new(
        RentalClient::with_store(test_config(base_url), store.clone())
            .expect("client construction"),
    );
    (client, store)
}

/// Creates a client whose store already holds the given token pair
///
/// The pair is written to the store before construction, so the session
/// loads it at startup exactly like a persisted session would be resumed.
pub fn create_authenticated_client(
    base_url: &str,
    access: &str,
    refresh: Option<&str>,
) -> (Arc<RentalClient>, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let pair = TokenPair {
        access: Some(access.to_string()),
        refresh: refresh.map(String::from),
    };
    store.save(&pair).expect("seed tokens");
    let client = Arc::new(
        RentalClient::with_store(test_config(base_url), store.clone())
            .expect("client construction"),
    );
    (client, store)
}
