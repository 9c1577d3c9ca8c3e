//! MediDesk - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medidesk_client::application::services::AuthService;
use medidesk_client::config::{load_dotenv, ClientConfig};
use medidesk_client::infrastructure::platform::create_platform;
use medidesk_client::infrastructure::supabase::{
    SupabaseAuthClient, SupabaseConfig, SupabaseProfileRepo,
};
use medidesk_client::ports::outbound::IdentityPort;
use medidesk_client::ui::{BoundaryOutcome, ErrorBoundary};
use medidesk_client::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");
    load_dotenv(&repo_root);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medidesk_client=debug,medidesk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting MediDesk");

    let config = ClientConfig::from_env()?;

    // Platform
    let platform = create_platform(config.storage_path.clone());

    // Supabase
    let supabase = SupabaseConfig::new(
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
        config.http_timeout,
    );
    let identity = Arc::new(SupabaseAuthClient::new(
        supabase.clone(),
        platform.storage_service(),
        platform.clock(),
    ));
    let profiles = Arc::new(
        SupabaseProfileRepo::new(supabase, platform.clock()).with_session(Arc::clone(&identity)),
    );

    let app = App::new(platform, identity.clone(), profiles);

    // Session changes from the identity provider
    let events = identity.subscribe();
    tokio::spawn(AuthService::run_event_loop(Arc::clone(&app.auth), events));

    let boundary = ErrorBoundary::new();
    let outcome = boundary
        .run(async {
            app.auth.initialize().await;
            let state = app.auth.state();
            let doctor = state
                .doctor
                .as_ref()
                .map(|d| d.display_name())
                .unwrap_or_default();
            let summary = app.dashboard();
            tracing::info!(
                status = ?state.status,
                doctor = %doctor,
                today = summary.today_appointments,
                upcoming = summary.upcoming_appointments,
                active_prescriptions = summary.active_prescriptions,
                patients = summary.total_patients,
                hours = %summary.hours_label(),
                "Dashboard ready"
            );
            Ok::<_, anyhow::Error>(())
        })
        .await;

    if let BoundaryOutcome::Fallback(fallback) = outcome {
        tracing::error!(cause = %fallback.cause, "{} - {}", fallback.message, fallback.hint);
    }

    Ok(())
}
