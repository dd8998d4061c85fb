//! ChemFlow desktop client entry point
//!
//! Constructs the shell once, restoring persisted theme and session, and
//! drives it from a small console frontend. The console stands in for the
//! rendering toolkit: it translates typed commands into page actions and
//! implements the modal dialog loop.

use std::sync::Arc;

use anyhow::Result;
use api_client::{AuthApi, HttpApiClient};
use app_state::AppContext;
use app_ui::dialog::{AuthDialog, AuthMode, DialogDriver, DialogResult};
use app_ui::Shell;
use async_trait::async_trait;
use storage::{AppPersistedState, StateFile, StateFileConfig};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const API_BASE_URL: &str = "http://127.0.0.1:8000";
const STATE_FILE: &str = "chemflow-state.json";

/// Read one line from stdin without blocking the runtime
async fn read_line() -> String {
    tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);
        line.trim().to_string()
    })
    .await
    .unwrap_or_default()
}

async fn prompt(label: &str) -> String {
    println!("{}: ", label);
    read_line().await
}

/// Console implementation of the modal dialog loop
struct ConsoleDriver;

#[async_trait]
impl DialogDriver for ConsoleDriver {
    async fn run(&self, dialog: &mut AuthDialog, api: &dyn AuthApi) -> DialogResult {
        println!("=== ChemFlow Analytics - Login ===");

        loop {
            println!("[1] Log in  [2] Register  [3] {}", dialog.btn_skip.label);
            match read_line().await.as_str() {
                "1" => {
                    dialog.select_tab(AuthMode::Login);
                    let username = prompt("Username").await;
                    let password = prompt("Password").await;
                    dialog.enter_login(username, password);
                    dialog.submit(api).await;
                }
                "2" => {
                    dialog.select_tab(AuthMode::Register);
                    let username = prompt("Username").await;
                    let email = prompt("Email").await;
                    let password = prompt("Password (min 8 characters)").await;
                    dialog.enter_registration(username, email, password);
                    dialog.submit(api).await;
                }
                "3" => dialog.dismiss(),
                other => {
                    println!("Unknown choice: {}", other);
                    continue;
                }
            }

            if let Some(notice) = dialog.notice() {
                println!("[{}] {}", notice.title, notice.message);
            }
            if let Some(result) = dialog.result() {
                return result.clone();
            }
        }
    }
}

fn print_status(shell: &Shell) {
    let viewer = match shell.session().user() {
        Some(user) => format!("signed in as {}", user.username),
        None => "local mode".to_string(),
    };
    println!(
        "page: {} | theme: {} | session: {}",
        shell.active_page(),
        shell.theme_mode(),
        viewer
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let store: StateFile<AppPersistedState> = StateFile::new(StateFileConfig::new(STATE_FILE));
    let ctx = match AppContext::restore(store).await {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!(error = %e, "could not restore state, starting fresh");
            AppContext::new()
        }
    };

    let api = Arc::new(HttpApiClient::new(API_BASE_URL)?);
    let mut shell = Shell::new(ctx, api, Box::new(ConsoleDriver));

    println!("ChemFlow Analytics — Chemical Equipment Intelligence");
    println!("commands: login, register, dashboard, home, theme, logout, status, quit");
    print_status(&shell);

    loop {
        match read_line().await.as_str() {
            "login" => shell.show_login().await,
            "register" => shell.show_register().await,
            "dashboard" => shell.show_dashboard_page(),
            "home" => shell.show_index_page(),
            "theme" => {
                shell.toggle_theme().await;
                println!(
                    "theme is now {} (toggle shows {})",
                    shell.theme_mode(),
                    shell.current_theme().toggle_icon()
                );
            }
            "logout" => shell.log_out().await,
            "status" => {}
            "quit" | "exit" => break,
            "" => continue,
            other => {
                println!("unknown command: {}", other);
                continue;
            }
        }
        print_status(&shell);
    }

    Ok(())
}
