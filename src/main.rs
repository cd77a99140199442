use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cursor_trail::init_tracing();
    cursor_trail::run(cursor_trail::cli::Cli::parse()).await
}
