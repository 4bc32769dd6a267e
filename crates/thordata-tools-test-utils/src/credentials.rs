use thordata_tools_config::ClientCredentials;

/// Credentials with only the scraper token set.
pub fn test_credentials() -> ClientCredentials {
    ClientCredentials::new("test_token")
}

/// Credentials with every field set, including the proxy account.
pub fn full_credentials() -> ClientCredentials {
    ClientCredentials {
        public_token: "test_public_token".to_string(),
        public_key: "test_public_key".to_string(),
        ..ClientCredentials::new("test_token").with_proxy("test_user", "test_pass")
    }
}
