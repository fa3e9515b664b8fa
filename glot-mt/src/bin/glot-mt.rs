use clap::{Arg, Command};
use glot_mt::{
    FallbackTranslator, GeminiProvider, Language, LibreTranslateProvider, MockMode,
    MockTranslator, ProxyProvider, Session, Translator,
};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("glot-mt")
        .version("0.1.0")
        .about("Translation relay CLI")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("target-language")
                .help("Target language (French, Spanish, Japanese, or fr/es/ja)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("proxy")
                .long("proxy")
                .short('p')
                .help("Route through a glot proxy service at this URL instead of calling the generative API directly"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the mock translator instead of real backends")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show backend selection detail")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").unwrap();
    let target_input = matches.get_one::<String>("target-language").unwrap();
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    let target = match target_input.parse::<Language>() {
        Ok(language) => language,
        Err(e) => {
            eprintln!("❌ {}", e.user_message());
            return Err(e.into());
        }
    };

    // Primary backend: mock, proxy client, or the generative API directly
    let primary: Arc<dyn Translator> = if use_mock {
        Arc::new(MockTranslator::new(MockMode::Suffix))
    } else if let Some(proxy_url) = matches.get_one::<String>("proxy") {
        Arc::new(ProxyProvider::new(proxy_url.clone())?)
    } else {
        if env::var("GEMINI_API_KEY").is_err() {
            eprintln!("❌ GEMINI_API_KEY environment variable not set");
            eprintln!("   Set it with: export GEMINI_API_KEY=your_api_key");
            eprintln!("   Or use --mock, or --proxy <URL> to go through a glot proxy");
            return Err("Missing API key".into());
        }
        Arc::new(GeminiProvider::from_env()?)
    };

    let secondary: Arc<dyn Translator> = if use_mock {
        Arc::new(MockTranslator::new(MockMode::Suffix))
    } else {
        Arc::new(LibreTranslateProvider::from_env()?)
    };

    if verbose {
        println!("📝 Source: \"{}\"", text);
        println!("🌍 Target: {} ({})", target, target.code());
        println!(
            "🔧 Primary: {}, fallback: {}",
            primary.provider_name(),
            secondary.provider_name()
        );
        println!();
    }

    let mut session = Session::new(FallbackTranslator::new(primary, secondary));

    match session.translate(text, target).await {
        Ok(translated) => {
            println!("{}", translated);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e.user_message());
            Err(e.into())
        }
    }
}
