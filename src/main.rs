use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sponow::{
    cli::{self, Control},
    config, error,
};

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
    /// Store Spotify application credentials
    Login(LoginOptions),

    /// Authorize with Spotify API
    Auth,

    /// Forget stored credentials and token
    Logout,

    /// Show what is currently playing
    NowPlaying,

    /// Show device and playback state
    Status,

    /// Start or resume playback
    Play,

    /// Pause playback
    Pause,

    /// Skip to the next track
    Next,

    /// Skip to the previous track
    Previous,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct LoginOptions {
    /// Client ID of the Spotify application
    #[clap(long, env = "SPOTIFY_API_AUTH_CLIENT_ID")]
    pub client_id: String,

    /// Client secret of the Spotify application
    #[clap(long, env = "SPOTIFY_API_AUTH_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Login(opt) => cli::login(opt.client_id, opt.client_secret).await,
        Command::Auth => cli::auth().await,
        Command::Logout => cli::logout().await,
        Command::NowPlaying => cli::now_playing().await,
        Command::Status => cli::status().await,
        Command::Play => cli::control(Control::Play).await,
        Command::Pause => cli::control(Control::Pause).await,
        Command::Next => cli::control(Control::Next).await,
        Command::Previous => cli::control(Control::Previous).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
