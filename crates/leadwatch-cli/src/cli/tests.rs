use super::*;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn no_subcommand_launches_tui() {
    let cli = Cli::try_parse_from(["leadwatch"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.launches_tui());
    assert_eq!(command_label(cli.command.as_ref()), "tui");
}

#[test]
fn global_flags_override_config() {
    let cli = Cli::try_parse_from([
        "leadwatch",
        "status",
        "--base-url",
        "https://leads.example.com/api",
        "--api-key",
        "secret",
        "--timeout",
        "3",
    ])
    .unwrap();
    assert!(!cli.launches_tui());
    let mut config = AppConfig::default();
    cli.apply_overrides(&mut config);
    assert_eq!(config.base_url, "https://leads.example.com/api");
    assert_eq!(config.api_key, "secret");
    assert_eq!(config.timeout_secs, 3);
}

#[test]
fn lead_command_parses_email_and_json() {
    let cli = Cli::try_parse_from(["leadwatch", "lead", "a@b.com", "--json"]).unwrap();
    match cli.command {
        Some(Commands::Lead(args)) => {
            assert_eq!(args.email, "a@b.com");
            assert!(args.json);
        }
        _ => panic!("expected lead command"),
    }
}

#[test]
fn diag_rejects_unknown_endpoint() {
    assert!(Cli::try_parse_from(["leadwatch", "diag", "metrics"]).is_err());
    let cli = Cli::try_parse_from(["leadwatch", "diag", "services"]).unwrap();
    match cli.command {
        Some(Commands::Diag(args)) => {
            assert_eq!(DiagEndpoint::from(args.endpoint), DiagEndpoint::Services)
        }
        _ => panic!("expected diag command"),
    }
}

#[test]
fn auth_subcommands_parse() {
    let cli = Cli::try_parse_from(["leadwatch", "auth", "disconnect"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Auth(AuthArgs {
            command: AuthCommands::Disconnect
        }))
    ));
}

#[test]
fn effective_config_rejects_bad_override() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.json");
    let cli = Cli::try_parse_from(["leadwatch", "status", "--timeout", "0"]).unwrap();
    assert!(app::effective_config(&cli, &path).is_err());
}

#[test]
fn config_init_refuses_to_overwrite() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("config.json");
    let cli = Cli::try_parse_from(["leadwatch", "config", "init"]).unwrap();
    let Some(Commands::Config(args)) = &cli.command else {
        panic!("expected config command");
    };
    commands::handle_config(args, &cli, &path).unwrap();
    assert!(path.exists());
    assert!(commands::handle_config(args, &cli, &path).is_err());

    let forced = Cli::try_parse_from(["leadwatch", "config", "init", "--force"]).unwrap();
    let Some(Commands::Config(args)) = &forced.command else {
        panic!("expected config command");
    };
    commands::handle_config(args, &forced, &path).unwrap();
}

#[test]
fn auth_lines_show_user_and_error() {
    let status = AuthStatus {
        authenticated: true,
        user_info: Some(leadwatch_core::model::UserInfo {
            name: Some("Ops".to_string()),
            email: Some("ops@example.com".to_string()),
        }),
        error: None,
    };
    assert_eq!(
        render::auth_lines(&status),
        vec!["Authenticated: yes", "User: Ops <ops@example.com>"]
    );
    assert_eq!(
        render::auth_lines(&AuthStatus::failed("Network Error")),
        vec!["Authenticated: no", "Error: Network Error"]
    );
}

#[test]
fn dashboard_lines_list_sorted_logs() {
    let data: DashboardData = serde_json::from_value(json!({
        "stats": {"total_processed": 2},
        "service_health": {"mail_sync": {"status": "warning", "error_message": "slow"}},
        "trigger_logs": [
            {"status": "failed", "timestamp": "2024-01-01T00:00:00Z"},
            {"type": "Form Submission", "status": "completed", "lead_email": "a@b.com",
             "lead_type": "cold", "crm_status": "success", "timestamp": "2024-01-02T00:00:00Z"}
        ]
    }))
    .unwrap();
    let lines = render::dashboard_lines(&data);
    assert!(lines.iter().any(|line| line.contains("Total Processed") && line.ends_with('2')));
    assert!(lines.iter().any(|line| line.contains("Failed") && line.ends_with('0')));
    assert!(lines.contains(&"  Mail Sync        warning (! slow)".to_string()));
    let first_log = lines
        .iter()
        .position(|line| line.contains("Form Submission"))
        .unwrap();
    let second_log = lines
        .iter()
        .position(|line| line.contains("Webhook Received"))
        .unwrap();
    assert!(first_log < second_log);
    assert!(lines[first_log].contains("cold Lead"));
    assert!(lines[second_log].contains("CRM: Pending"));
}

#[test]
fn dashboard_lines_show_empty_state() {
    let lines = render::dashboard_lines(&DashboardData::default());
    assert!(
        lines
            .iter()
            .any(|line| line.trim() == present::EMPTY_LOGS_MESSAGE)
    );
}

#[test]
fn lead_lines_fill_missing_fields() {
    let lead = LeadDetail {
        email: "a@b.com".to_string(),
        crm_response: Some(json!({"id": 7})),
        ..LeadDetail::default()
    };
    let lines = render::lead_lines(&lead);
    assert!(lines.contains(&"Company:    N/A".to_string()));
    assert!(lines.contains(&"Lead Type:  Unknown".to_string()));
    assert!(lines.contains(&"CRM Status: Pending".to_string()));
    assert!(lines.contains(&"  \"id\": 7".to_string()));
}
