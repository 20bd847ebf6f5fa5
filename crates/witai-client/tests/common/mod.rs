use witai_client::{NameNormalization, WitClient};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

pub fn client_for(server: &MockServer) -> WitClient {
    WitClient::builder()
        .auth_token(TOKEN)
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[allow(dead_code)]
pub fn lists_only_client_for(server: &MockServer) -> WitClient {
    WitClient::builder()
        .auth_token(TOKEN)
        .base_url(server.uri())
        .name_normalization(NameNormalization::ListsOnly)
        .build()
        .unwrap()
}
