mod app;
mod format;
mod keyboard;
mod poster_cache;
mod screen;
mod style;
mod theme;
mod widgets;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use marquee_api::OmdbClient;
use marquee_core::config::{AppConfig, API_KEY_ENV};

const DEFAULT_LOG_FILTER: &str = "marquee=info,marquee_core=info,marquee_api=info";

#[derive(Debug, Parser)]
#[command(name = "marquee")]
#[command(about = "Search movies, rate them, and keep a watched list")]
#[command(version)]
struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// OMDb API key (overrides the config file).
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,

    /// Initial search query (overrides `search.default_query`).
    #[arg(long)]
    query: Option<String>,

    /// Log filter, e.g. `marquee=debug`. `RUST_LOG` takes precedence.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> iced::Result {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(cli.log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(&cli);
    let client = match OmdbClient::from_config(&config.api) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "HTTP client setup failed, using defaults");
            OmdbClient::new(config.api.base_url.clone(), config.api.api_key.clone())
        }
    };
    let client = Arc::new(client);

    tracing::info!(
        base_url = %client.base_url(),
        query = %config.search.default_query,
        "starting marquee"
    );

    let window = iced::window::Settings {
        size: iced::Size::new(style::WINDOW_WIDTH, style::WINDOW_HEIGHT),
        position: iced::window::Position::Centered,
        ..Default::default()
    };

    iced::application(
        move || app::Marquee::new(config.clone(), Arc::clone(&client)),
        app::Marquee::update,
        app::Marquee::view,
    )
    .title(app::Marquee::title)
    .subscription(app::Marquee::subscription)
    .theme(app::Marquee::theme)
    .font(lucide_icons::LUCIDE_FONT_BYTES)
    .window(window)
    .run()
}

/// Config file (or defaults), then environment, then CLI flags.
fn load_config(cli: &Cli) -> AppConfig {
    let loaded = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        AppConfig::default()
    });
    config.apply_env();

    config.override_api_key(cli.api_key.as_deref());
    if let Some(query) = &cli.query {
        config.search.default_query = query.clone();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::config::ThemeMode;

    fn write_config(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[api]\napi_key = \"from-file\"\n\n[search]\ndefault_query = \"batman\"\n\n[appearance]\nmode = \"dark\"\n",
        )
        .unwrap();
        path
    }

    fn parse(args: &[&str]) -> Cli {
        std::env::remove_var(API_KEY_ENV);
        Cli::parse_from(std::iter::once("marquee").chain(args.iter().copied()))
    }

    #[test]
    fn test_file_values_without_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir);
        let cli = parse(&["--config", path.to_str().unwrap()]);

        let config = load_config(&cli);
        assert_eq!(config.api.api_key, "from-file");
        assert_eq!(config.search.default_query, "batman");
        assert_eq!(config.appearance.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir);
        let cli = parse(&[
            "--config",
            path.to_str().unwrap(),
            "--api-key",
            "from-cli",
            "--query",
            "alien",
        ]);

        let config = load_config(&cli);
        assert_eq!(config.api.api_key, "from-cli");
        assert_eq!(config.search.default_query, "alien");
        // Untouched keys still come from the file.
        assert_eq!(config.appearance.mode, ThemeMode::Dark);
    }

    #[test]
    fn test_blank_api_key_flag_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir);
        let cli = parse(&["--config", path.to_str().unwrap(), "--api-key", "  "]);

        assert_eq!(load_config(&cli).api.api_key, "from-file");
    }

    #[test]
    fn test_missing_config_path_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let cli = parse(&["--config", missing.to_str().unwrap(), "--query", "heat"]);

        let config = load_config(&cli);
        assert_eq!(config.api.base_url, "http://www.omdbapi.com/");
        assert_eq!(config.search.default_query, "heat");
    }
}
