pub mod clients;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod prompts;
pub mod schemas;
pub mod session;
pub mod store;
pub mod validation;

// Load env from a simple, standardized location resolution.
// This uses dotenvy::dotenv().ok() which loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
