#![allow(dead_code)]

use axum_test::TestServer;
use shortlink::domain::{RegistrySettings, ShortLinkRegistry};
use shortlink::routes::{app_router, reserved_codes};
use shortlink::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://sho.rt";
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

pub fn create_test_state() -> AppState {
    create_test_state_with(RegistrySettings {
        reserved: reserved_codes(),
        ..RegistrySettings::default()
    })
}

pub fn create_test_state_with(settings: RegistrySettings) -> AppState {
    let registry = ShortLinkRegistry::new(settings).unwrap();
    AppState::new(Arc::new(registry), BASE_URL)
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app = app_router(state, &[FRONTEND_ORIGIN.to_string()]);
    TestServer::new(app).unwrap()
}
