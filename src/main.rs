use bedside_triage::config::TriageConfig;
use bedside_triage::triage::TriageEngine;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries one JSON record per message.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = TriageConfig::from_env()?;
    let engine = TriageEngine::from_config(&config)?;

    if std::env::args().skip(1).any(|arg| arg == "--dump-catalog") {
        println!("{}", engine.registry().to_json()?);
        return Ok(());
    }

    eprintln!("🩺 Bedside triage v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Catalog: {}", engine.registry().version());
    eprintln!("   Tokenizer: {}", engine.tokenizer_name());
    eprintln!("   One message per line. Ctrl-D to exit.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                let audit = engine.audit(&line);
                println!("{}", serde_json::to_string(&audit)?);
            }
            Ok(None) => break, // EOF
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                break;
            }
        }
    }

    Ok(())
}
