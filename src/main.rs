use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use moodtune::{cli, config, error, management::AppState, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the recommendation HTTP API
    Serve(ServeOptions),

    /// Recommend songs for a mood and print them
    Recommend(RecommendOptions),

    /// Only derive the search keyword for a mood
    Keyword(KeywordOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    pub address: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// How you feel or what you want to hear
    #[clap(required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Open the first track on Spotify
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct KeywordOptions {
    /// How you feel or what you want to hear
    #[clap(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file. Err: {}", e);
    }

    let mut settings = match config::Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("{}", e),
    };

    if let Command::Serve(ServeOptions {
        address: Some(address),
    }) = &cli.command
    {
        settings.server_address = address.clone();
    }

    let state = match AppState::new(settings) {
        Ok(state) => state,
        Err(e) => error!("Cannot create HTTP client. Err: {}", e),
    };

    match cli.command {
        Command::Serve(_) => cli::serve(state).await,
        Command::Recommend(opt) => cli::recommend(state, opt.message.join(" "), opt.open).await,
        Command::Keyword(opt) => cli::keyword(state, opt.message.join(" ")).await,
        Command::Completions(_) => {}
    }
}
