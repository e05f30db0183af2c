use crate::cli_args::*;
use crate::modules::auth::{handle_login, handle_logout, open_session_store};
use crate::modules::library::handle_library;
use crate::modules::lists::handle_list;
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, resolve_target, CliConfig, CliContext,
    CommandContext, Target,
};
use mockito::{Matcher, Server};
use serde_json::json;
use shelfmark_client::{ApiClient, ClientConfig, CredentialKind, SessionStore};

fn api_for(base: &str, context: &str) -> ApiClient {
    let store = open_session_store(context).expect("store");
    ApiClient::new(ClientConfig::new(base), store).expect("client")
}

#[test]
fn config_commands_manage_contexts() {
    let mut config = CliConfig::default();

    handle_config_command(
        ConfigArgs {
            command: ConfigCommand::SetContext(SetContextArgs {
                name: "home".to_string(),
                addr: Some("https://books.example.com/api".to_string()),
                username: Some("ada".to_string()),
            }),
        },
        &mut config,
    )
    .expect("set-context");

    assert_eq!(config.current_context.as_deref(), Some("home"));
    assert_eq!(
        config.contexts.get("home"),
        Some(&CliContext {
            addr: "https://books.example.com/api".to_string(),
            username: Some("ada".to_string()),
        })
    );

    handle_config_command(
        ConfigArgs {
            command: ConfigCommand::SetContext(SetContextArgs {
                name: "work".to_string(),
                addr: None,
                username: None,
            }),
        },
        &mut config,
    )
    .expect("set-context");
    assert_eq!(
        config.contexts.get("work").map(|ctx| ctx.addr.as_str()),
        Some(shelfmark_core::DEFAULT_BASE_URL)
    );

    handle_config_command(
        ConfigArgs {
            command: ConfigCommand::UseContext(UseContextArgs {
                name: "home".to_string(),
            }),
        },
        &mut config,
    )
    .expect("use-context");
    assert_eq!(config.current_context.as_deref(), Some("home"));

    let missing = handle_config_command(
        ConfigArgs {
            command: ConfigCommand::UseContext(UseContextArgs {
                name: "nowhere".to_string(),
            }),
        },
        &mut config,
    );
    assert!(missing.is_err());

    handle_config_command(
        ConfigArgs {
            command: ConfigCommand::GetContexts,
        },
        &mut config,
    )
    .expect("get-contexts");

    open_session_store("home")
        .expect("store")
        .store_pair("access", "refresh")
        .expect("seed tokens");
    handle_config_command(
        ConfigArgs {
            command: ConfigCommand::RemoveContext(RemoveContextArgs {
                name: "home".to_string(),
            }),
        },
        &mut config,
    )
    .expect("remove-context");

    assert!(config.current_context.is_none());
    assert!(!config.contexts.contains_key("home"));
    let store = open_session_store("home").expect("store");
    assert!(store.load(CredentialKind::Access).expect("load").is_none());
    assert!(store.load(CredentialKind::Refresh).expect("load").is_none());
}

#[test]
fn target_resolution_order() {
    let mut config = CliConfig::default();
    let target = resolve_target(None, None, &config).expect("default target");
    assert_eq!(
        target,
        Target {
            name: "default".to_string(),
            addr: shelfmark_core::DEFAULT_BASE_URL.to_string(),
        }
    );

    config.contexts.insert(
        "home".to_string(),
        CliContext {
            addr: "https://books.example.com/api".to_string(),
            username: None,
        },
    );
    config.current_context = Some("home".to_string());
    let target = resolve_target(None, None, &config).expect("current context");
    assert_eq!(target.name, "home");
    assert_eq!(target.addr, "https://books.example.com/api");

    let target = resolve_target(Some("https://other.example.com/api".to_string()), None, &config)
        .expect("addr override");
    assert_eq!(target.name, "home");
    assert_eq!(target.addr, "https://other.example.com/api");

    assert!(resolve_target(None, Some("unknown".to_string()), &config).is_err());
    let target = resolve_target(
        Some("https://new.example.com/api".to_string()),
        Some("new".to_string()),
        &config,
    )
    .expect("new context with addr");
    assert_eq!(target.name, "new");
}

#[test]
fn plain_http_only_for_loopback() {
    assert!(ensure_secure_addr("https://books.example.com/api", false).is_ok());
    assert!(ensure_secure_addr("http://127.0.0.1:8000/api", false).is_ok());
    assert!(ensure_secure_addr("http://localhost:8000/api", false).is_ok());
    assert!(ensure_secure_addr("http://[::1]:8000/api", false).is_ok());
    assert!(ensure_secure_addr("http://books.example.com/api", true).is_ok());

    let err = ensure_secure_addr("http://books.example.com/api", false).expect_err("refused");
    assert!(err
        .to_string()
        .contains("refusing to use http:// without --insecure"));
}

#[tokio::test]
async fn login_stores_tokens_and_updates_context() {
    let mut server = Server::new_async().await;
    let addr = format!("{}/api", server.url());
    server
        .mock("POST", "/api/login/")
        .match_body(Matcher::Json(json!({ "username": "ada", "password": "secret" })))
        .with_status(200)
        .with_body(json!({ "access": "access-1", "refresh": "refresh-1" }).to_string())
        .expect(1)
        .create_async()
        .await;

    let api = api_for(&addr, "login-test");
    let mut config = CliConfig::default();
    let mut ctx = CommandContext {
        api: &api,
        context_name: "login-test".to_string(),
        addr: addr.clone(),
        config: &mut config,
    };

    handle_login(
        LoginArgs {
            username: Some("ada".to_string()),
            password: Some("secret".to_string()),
        },
        &mut ctx,
    )
    .await
    .expect("login");

    let store = open_session_store("login-test").expect("store");
    assert_eq!(
        store.load(CredentialKind::Access).expect("load").as_deref(),
        Some("access-1")
    );
    assert_eq!(
        store.load(CredentialKind::Refresh).expect("load").as_deref(),
        Some("refresh-1")
    );
    assert_eq!(config.current_context.as_deref(), Some("login-test"));
    let context = config.contexts.get("login-test").expect("context");
    assert_eq!(context.addr, addr);
    assert_eq!(context.username.as_deref(), Some("ada"));
}

#[tokio::test]
async fn logout_clears_tokens() {
    let store = open_session_store("logout-test").expect("store");
    store.store_pair("a", "r").expect("seed");
    let api = api_for("http://127.0.0.1:1/api", "logout-test");
    let mut config = CliConfig::default();
    let mut ctx = CommandContext {
        api: &api,
        context_name: "logout-test".to_string(),
        addr: "http://127.0.0.1:1/api".to_string(),
        config: &mut config,
    };

    handle_logout(&mut ctx).expect("logout");
    assert!(store.load(CredentialKind::Access).expect("load").is_none());
    assert!(store.load(CredentialKind::Refresh).expect("load").is_none());
}

#[tokio::test]
async fn progress_beyond_total_is_rejected_locally() {
    let mut server = Server::new_async().await;
    let addr = format!("{}/api", server.url());
    server
        .mock("GET", "/api/my-books/3/")
        .with_status(200)
        .with_body(
            json!({
                "id": 3,
                "book": {
                    "id": 9,
                    "title": "Kindred",
                    "author": { "id": 2, "name": "Octavia E. Butler" },
                    "total_pages": 264
                },
                "status": "en_cours",
                "pages_read": 100
            })
            .to_string(),
        )
        .create_async()
        .await;
    let update = server
        .mock("POST", "/api/my-books/3/update_progress/")
        .expect(0)
        .create_async()
        .await;

    let store = open_session_store("progress-test").expect("store");
    store.store_pair("a", "r").expect("seed");
    let api = api_for(&addr, "progress-test");
    let mut config = CliConfig::default();
    let mut ctx = CommandContext {
        api: &api,
        context_name: "progress-test".to_string(),
        addr,
        config: &mut config,
    };

    let err = handle_library(
        LibraryArgs {
            command: LibraryCommand::Progress(LibraryProgressArgs {
                id: 3,
                pages_read: 300,
            }),
        },
        &mut ctx,
    )
    .await
    .expect_err("too many pages");
    assert!(err.to_string().contains("cannot exceed"));
    update.assert_async().await;
}

#[tokio::test]
async fn progress_is_posted_with_bearer() {
    let mut server = Server::new_async().await;
    let addr = format!("{}/api", server.url());
    server
        .mock("GET", "/api/my-books/4/")
        .match_header("authorization", "Bearer a")
        .with_status(200)
        .with_body(
            json!({
                "id": 4,
                "book": {
                    "id": 9,
                    "title": "Kindred",
                    "author": { "id": 2, "name": "Octavia E. Butler" },
                    "total_pages": 264
                },
                "status": "non_lu",
                "pages_read": 0
            })
            .to_string(),
        )
        .create_async()
        .await;
    let update = server
        .mock("POST", "/api/my-books/4/update_progress/")
        .match_header("authorization", "Bearer a")
        .match_body(Matcher::Json(json!({ "pages_read": 264 })))
        .with_status(200)
        .with_body(json!({ "id": 4, "status": "lu", "pages_read": 264 }).to_string())
        .expect(1)
        .create_async()
        .await;

    let store = open_session_store("progress-ok-test").expect("store");
    store.store_pair("a", "r").expect("seed");
    let api = api_for(&addr, "progress-ok-test");
    let mut config = CliConfig::default();
    let mut ctx = CommandContext {
        api: &api,
        context_name: "progress-ok-test".to_string(),
        addr,
        config: &mut config,
    };

    handle_library(
        LibraryArgs {
            command: LibraryCommand::Progress(LibraryProgressArgs {
                id: 4,
                pages_read: 264,
            }),
        },
        &mut ctx,
    )
    .await
    .expect("progress saved");
    update.assert_async().await;
}

#[tokio::test]
async fn blank_list_names_never_reach_the_server() {
    let mut server = Server::new_async().await;
    let addr = format!("{}/api", server.url());
    let create = server
        .mock("POST", "/api/lists/")
        .expect(0)
        .create_async()
        .await;

    let api = api_for(&addr, "lists-test");
    let mut config = CliConfig::default();
    let mut ctx = CommandContext {
        api: &api,
        context_name: "lists-test".to_string(),
        addr,
        config: &mut config,
    };

    let err = handle_list(
        ListArgs {
            command: ListCommand::Create(ListCreateArgs {
                name: "   ".to_string(),
            }),
        },
        &mut ctx,
    )
    .await
    .expect_err("blank name");
    assert!(err.to_string().contains("must not be empty"));
    create.assert_async().await;
}
