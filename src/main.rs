use ingest::prelude::*;

#[tokio::main]
async fn main() {
    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    };
    init_tracing(args.verbose);

    let config = EngineConfig::default();
    let code = CliApp::new("ingest")
        .run(|mut writer| async move { plan_job(&args.command, &config, &mut writer).await })
        .await;
    std::process::exit(code);
}
