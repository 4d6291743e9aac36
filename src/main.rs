use talent_scout::chatbot::{ConversationState, TurnHandler};
use talent_scout::config::AppConfig;
use talent_scout::llm::create_provider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading any configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Missing credentials are fatal: never serve a session without a key
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("  export GROQ_API_KEY=gsk-...");
        std::process::exit(1);
    });

    eprintln!("🤖 TalentScout v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   Type a message and press Enter. Say 'bye' to exit.\n");

    let llm = create_provider(&config)?;
    let handler = TurnHandler::new(llm);
    let mut state = ConversationState::new();

    talent_scout::cli::run(&handler, &mut state).await?;

    eprintln!("\nConversation ended.");
    Ok(())
}
