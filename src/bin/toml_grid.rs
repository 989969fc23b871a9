use antenna_grid::config::toml_config::TomlConfig;
use antenna_grid::core::ConfigProvider;
use antenna_grid::utils::{logger, validation::Validate};
use antenna_grid::{GridEngine, GridPipeline, LocalStorage};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-grid")]
#[command(about = "Antenna grid tool with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "grid-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Load and draw the grid without writing the binary file
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌，命令列 --verbose 優先
    logger::init_logger(args.verbose || config.verbose(), config.log_format());

    tracing::info!("🚀 Starting TOML-based antenna grid tool");
    tracing::info!("📁 Configuration loaded from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    let storage = LocalStorage::new(config.base_path().to_string());
    let engine = GridEngine::new(GridPipeline::new(storage, config));

    let result = if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - the binary file will not be written");
        let stdout = std::io::stdout();
        engine
            .report_with_output(&mut stdout.lock())
            .map(|report| {
                tracing::info!(
                    "🔍 Would export {} records to '{}'",
                    report.registry.len(),
                    engine.pipeline().config().output_file()
                );
            })
    } else {
        engine.run().map(|output_path| {
            tracing::info!("✅ Grid processed successfully!");
            tracing::info!("📁 Antennas saved to: {}", output_path);
        })
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Grid processing failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("   Grid: {}", config.grid.name);
    if let Some(description) = &config.grid.description {
        tracing::info!("   Description: {}", description);
    }
    tracing::info!("   Base path: {}", config.base_path());
    tracing::info!("   Source: {}", config.input_file());
    tracing::info!("   Export: {} ({:?})", config.output_file(), config.record_layout());
    tracing::info!("   Dry run: {}", args.dry_run);
}
