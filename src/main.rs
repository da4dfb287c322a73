use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use marketframe::api::{MemoryOrganizations, OrgField, Organization, User, UserType};
use marketframe::config::{Config, ConfigStore};
use marketframe::logging::{init_stderr_tracing, init_tracing};
use marketframe::route::{route_sink, Navigation, RecordingNavigator};
use marketframe::session::SharedState;
use marketframe::shutdown::ShutdownCoordinator;
use marketframe::ui::mvi::RunOutcome;
use marketframe::ui::org_edit::{OrgEditIntent, OrgEditPage, OrgEditRuntime, OrgEditView, RouteParams};
use marketframe::ui::org_form::OrgFormIntent;
use marketframe::ui::page::PageMetadata;
use marketframe::ui::sidebar::{SidebarIntent, SidebarView};

#[derive(Parser, Debug)]
#[command(
    name = "marketframe",
    version,
    about = "Drive the edit-organization page against an in-memory API",
    long_about = "Opens the edit-organization page for a seeded organization, runs the\n\
                  given script step by step and prints every rendered view as JSON."
)]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Type of the signed-in user (vendor, government, admin).
    #[arg(long, value_parser = parse_user_type)]
    user_type: Option<UserType>,

    /// Comma-separated steps: start-editing, cancel-editing, save-changes,
    /// deactivate, toggle-sidebar or <field>=<value> to edit a form field.
    #[arg(long, value_delimiter = ',', value_parser = parse_step)]
    script: Vec<Step>,

    /// Log filter directive for stderr (RUST_LOG wins when set).
    #[arg(long = "log-level", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    StartEditing,
    CancelEditing,
    SaveChanges,
    Deactivate,
    ToggleSidebar,
    Edit { field: OrgField, value: String },
}

impl Step {
    fn intent(&self) -> OrgEditIntent {
        match self {
            Self::StartEditing => OrgEditIntent::StartEditing,
            Self::CancelEditing => OrgEditIntent::CancelEditing,
            Self::SaveChanges => OrgEditIntent::SaveChanges,
            Self::Deactivate => OrgEditIntent::Deactivate,
            Self::ToggleSidebar => OrgEditIntent::Sidebar(SidebarIntent::Toggle),
            Self::Edit { field, value } => OrgEditIntent::OrgForm(OrgFormIntent::Edit {
                field: *field,
                value: value.clone(),
            }),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartEditing => f.write_str("start-editing"),
            Self::CancelEditing => f.write_str("cancel-editing"),
            Self::SaveChanges => f.write_str("save-changes"),
            Self::Deactivate => f.write_str("deactivate"),
            Self::ToggleSidebar => f.write_str("toggle-sidebar"),
            Self::Edit { field, value } => write!(f, "{}={}", field.wire_name(), value),
        }
    }
}

fn parse_step(s: &str) -> Result<Step, String> {
    if let Some((name, value)) = s.split_once('=') {
        let field = OrgField::parse(name.trim()).ok_or_else(|| format!("unknown field '{name}'"))?;
        return Ok(Step::Edit {
            field,
            value: value.to_string(),
        });
    }
    match s.trim() {
        "start-editing" => Ok(Step::StartEditing),
        "cancel-editing" => Ok(Step::CancelEditing),
        "save-changes" => Ok(Step::SaveChanges),
        "deactivate" => Ok(Step::Deactivate),
        "toggle-sidebar" => Ok(Step::ToggleSidebar),
        other => Err(format!("unknown step '{other}'")),
    }
}

fn parse_user_type(s: &str) -> Result<UserType, String> {
    UserType::parse(s).ok_or_else(|| format!("unknown user type '{s}'"))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    step: String,
    metadata: PageMetadata,
    view: Option<OrgEditView>,
    sidebar: Option<SidebarView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    snapshots: Vec<Snapshot>,
    navigation: Vec<Navigation>,
    interrupted: bool,
}

fn snapshot(page: &OrgEditPage, runtime: &OrgEditRuntime, step: String) -> Snapshot {
    let state = runtime.state();
    Snapshot {
        step,
        metadata: page.metadata(&state),
        view: page.view(&state),
        sidebar: page.sidebar_view(&state),
    }
}

fn seed_organization(owner: &User) -> Organization {
    let mut org = Organization::new("Acme Consulting", "contact@acme.test");
    org.website_url = "https://acme.test".into();
    org.city = "Victoria".into();
    org.region = "BC".into();
    org.country = "Canada".into();
    org.contact_name = owner.name.clone();
    org.owner = Some(owner.slim());
    org
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // File logging wins when MARKETFRAME_LOG is set; stderr otherwise.
    init_tracing();
    init_stderr_tracing(&cli.log_level);

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let store = ConfigStore::open(config_path).context("Failed to load configuration")?;
    let config = store.get();
    tracing::debug!(path = %store.path().display(), ?config, "configuration loaded");

    let user_type = cli.user_type.unwrap_or(config.demo.session_user_type);
    let user = User::new("Demo User", user_type);

    let api = MemoryOrganizations::new()
        .with_latency(Duration::from_millis(config.demo.api_latency_ms));
    let org = api.insert(seed_organization(&user));

    let coordinator = ShutdownCoordinator::new();
    let interrupt = coordinator.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            interrupt.signal();
        }
    });

    let navigator = RecordingNavigator::new();
    let page = OrgEditPage::new(Arc::new(api));
    let mut runtime = page
        .start(
            RouteParams { org_id: org.id },
            SharedState::signed_in(user),
            route_sink(navigator.clone()),
        )
        .await
        .with_config(&config.runtime)
        .with_shutdown(coordinator.handle());

    let mut interrupted = runtime.run_until_idle().await == RunOutcome::ShutDown;
    let mut snapshots = vec![snapshot(&page, &runtime, "init".to_string())];

    for step in &cli.script {
        if interrupted {
            break;
        }
        tracing::info!(%step, "running step");
        runtime.dispatch(step.intent());
        interrupted = runtime.run_until_idle().await == RunOutcome::ShutDown;
        snapshots.push(snapshot(&page, &runtime, step.to_string()));
    }

    if interrupted {
        tracing::warn!("interrupted, remaining steps skipped");
    }

    let report = Report {
        snapshots,
        navigation: navigator.history(),
        interrupted,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
