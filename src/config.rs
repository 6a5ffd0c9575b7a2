//! Build-Time Configuration
//!
//! A CSR bundle has no runtime environment to read from, so the API base
//! URL is baked in when the WASM module is built.

/// Base URL of the remote todos API.
///
/// Taken from `TODOS_API_URL` at compile time; defaults to a same-origin
/// `/api` prefix so a reverse proxy can front the API in deployment.
pub fn api_base_url() -> &'static str {
    option_env!("TODOS_API_URL").unwrap_or("/api")
}
