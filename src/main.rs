use clap::Parser;
use employee_directory::utils::output::{self, OutputFormat};
use employee_directory::utils::logger;
use employee_directory::{
    Assistant, CliConfig, Command, EmployeeProfile, InMemoryDirectory, QueryEngine, QueryOutcome,
};

fn init_logging(cli: &CliConfig, level: Option<&str>) {
    if cli.log_json {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }
}

fn print_block(text: &str) {
    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置，失敗時以預設日誌輸出錯誤
    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&cli, None);
            if e.is_config_error() {
                tracing::error!("❌ Invalid configuration: {}", e);
            } else {
                tracing::error!("❌ Could not read configuration: {}", e);
            }
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    init_logging(&cli, settings.log_level());
    tracing::debug!("CLI config: {:?}", cli);

    let source = settings.source()?;
    let directory = match InMemoryDirectory::from_source(&source).await {
        Ok(directory) => directory,
        Err(e) => {
            tracing::error!("❌ Failed to load employee records: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    let engine = QueryEngine::new(directory);
    let options = settings.render_options()?;

    let Some(query) = cli.command.to_query() else {
        if let Command::Ask { message, voice } = &cli.command {
            let assistant = Assistant::new(engine.directory().dataset())?;
            let reply = assistant.respond(&message.join(" "));
            // 只有明確指定 --format json 時才輸出 JSON
            if cli.format.is_some() && options.format == OutputFormat::Json {
                let json = if options.pretty {
                    serde_json::to_string_pretty(&reply)?
                } else {
                    serde_json::to_string(&reply)?
                };
                println!("{}", json);
            } else if *voice {
                println!("{}", reply.voice);
            } else {
                print_block(&reply.text);
            }
        }
        return Ok(());
    };

    let outcome = engine.run(query).await?;

    if let QueryOutcome::Employee(None) = outcome {
        eprintln!("❌ No employee found");
        std::process::exit(1);
    }

    match (&cli.command, &outcome) {
        (Command::Profile { voice, .. }, QueryOutcome::Employee(Some(employee))) => {
            let profile = EmployeeProfile::new(employee);
            if *voice {
                println!("{}", profile.spoken());
            } else {
                println!("{}", profile.card());
            }
        }
        _ => print_block(&output::render(&outcome, options)?),
    }

    Ok(())
}
