//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the REST API.
//! Services are generic over repository/gateway/hasher traits, but AppState
//! pins them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use petfolio_core::account::AccountService;
use petfolio_core::chat::{ChatService, ContextWindow};
use petfolio_core::pet::PetService;
use petfolio_infra::config::{load_config, resolve_data_dir};
use petfolio_infra::crypto::password::Argon2PasswordHasher;
use petfolio_infra::llm::ollama::OllamaGateway;
use petfolio_infra::sqlite::chat::SqliteChatRepository;
use petfolio_infra::sqlite::pet::SqlitePetRepository;
use petfolio_infra::sqlite::pool::DatabasePool;
use petfolio_infra::sqlite::user::SqliteUserRepository;
use petfolio_types::config::AppConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteAccountService = AccountService<SqliteUserRepository, Argon2PasswordHasher>;

pub type ConcretePetService = PetService<SqlitePetRepository>;

pub type ConcreteChatService = ChatService<SqliteChatRepository, OllamaGateway>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<ConcreteAccountService>,
    pub pet_service: Arc<ConcretePetService>,
    pub chat_service: Arc<ConcreteChatService>,
    pub config: AppConfig,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: load config, connect to DB, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;

        // Initialize database
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("petfolio.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        // Wire account service
        let account_service = AccountService::new(
            SqliteUserRepository::new(db_pool.clone()),
            Argon2PasswordHasher::new(),
        );

        // Wire pet service
        let pet_service = PetService::new(SqlitePetRepository::new(db_pool.clone()));

        // Wire chat service with its repository and LLM gateway
        let chat_service = ChatService::new(
            SqliteChatRepository::new(db_pool.clone()),
            OllamaGateway::new(&config.gateway),
            ContextWindow::new(config.chat.context_window_messages),
            config.chat.recent_feed_limit as i64,
        );

        Ok(Self {
            account_service: Arc::new(account_service),
            pet_service: Arc::new(pet_service),
            chat_service: Arc::new(chat_service),
            config,
            data_dir,
            db_pool,
        })
    }
}
