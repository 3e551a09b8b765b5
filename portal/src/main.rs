//! `portal [LOCATION]`
//!
//! Restores the stored session, resolves `LOCATION` (default `/`) through the
//! session guard and, when signed in, fetches the profile. With
//! `PORTAL_EMAIL` and `PORTAL_PASSWORD` set and no stored session, signs in
//! first.

use std::process::ExitCode;
use std::sync::Arc;

use portal::app::navigation;
use portal::core::service::{ApiService, Navigator, SessionStore};
use portal::session::{events, FileSessionStore};
use portal::{ApiClient, App, PortalConfig};
use shared::LoginRequest;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match PortalConfig::from_env().and_then(|c| c.validate().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = portal::logging::init(&config);

    let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&config.session_file));
    let (session_events, receiver) = events::channel();
    let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config, store.clone(), session_events.clone()));
    let app = Arc::new(App::new(store.clone()));
    let listener = navigation::spawn_listener(receiver, app.clone());

    let requested = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let exit = run(&*api, &*store, &app, &requested).await;

    // Let the listener apply whatever the calls above emitted
    session_events.close();
    if let Err(e) = listener.await {
        tracing::error!(error = %e, "Navigation listener failed");
    }
    println!("Location: {}", app.location());

    exit
}

async fn run(api: &dyn ApiService, store: &dyn SessionStore, app: &App, requested: &str) -> ExitCode {
    if !store.is_authenticated() {
        if let (Ok(email), Ok(password)) = (std::env::var("PORTAL_EMAIL"), std::env::var("PORTAL_PASSWORD")) {
            match api.sign_in(LoginRequest { email, password }).await {
                Ok(auth) => println!("Signed in as {}", auth.user.email),
                Err(e) => {
                    eprintln!("Sign-in failed: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    let resolved = app.navigate(requested);
    if resolved != requested {
        println!("{} -> {}", requested, resolved);
    }

    if !store.is_authenticated() {
        return ExitCode::SUCCESS;
    }

    match api.profile().await {
        Ok(profile) => {
            println!("{} {} <{}>", profile.user.first_name, profile.user.last_name, profile.user.email);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
