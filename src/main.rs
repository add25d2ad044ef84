use bank_accounts::config::Config;
use bank_accounts::demo;
use bank_accounts::dlq::StdErrDLQ;
use bank_accounts::engine::Engine;
use bank_accounts::ingestion::CsvReader;
use bank_accounts::output_repository::StdOutOutput;

#[tokio::main] // using Tokio runtime for async
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let Some(script) = config.script else {
        for line in demo::run_complete_test_flow() {
            println!("{}", line);
        }
        return Ok(());
    };

    let ingestion = CsvReader::from_path(&script)?;

    let mut engine = Engine::new(ingestion, StdOutOutput::new(), StdErrDLQ::default());
    engine.process().await?;
    engine.flush();

    Ok(())
}
