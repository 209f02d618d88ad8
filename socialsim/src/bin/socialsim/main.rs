mod commands;
mod examples;
mod output;
mod prompt;
mod theme;
mod views;

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{
    ColorChoice, Command, CommandFactory, FromArgMatches, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Color as ClapColor, Style},
    },
};
use colored::{Color as ThemeColor, Colorize, control::ShouldColorize};
use socialsim::{Client, Collection, StoreConfig, config::DATA_DIR_ENV};

use commands::{
    analytics::{AnalyticsArgs, handle_analytics},
    post::{PostCommands, handle_post_commands},
    react::{CommentArgs, LikeArgs, handle_comment, handle_like},
    seed::{handle_seed, report_seed},
    shell::run_shell,
    user::{UserCommands, handle_user_commands},
};
use examples::{ExampleGroup, command_examples};
use output::{GlobalOptions, OutputFormat, OutputManager};
use theme::{GLYPHS, PALETTE};

const ENVIRONMENT_VARIABLES: &[(&str, &str)] = &[
    ("SOCIALSIM_CONFIG", "Path to a socialsim.toml configuration file"),
    (DATA_DIR_ENV, "Directory holding users.json, posts.json and reactions.json"),
    ("REDIS_URL", "Redis connection URL when store.backend = \"redis\""),
    ("RUST_LOG", "Log filter (e.g. socialsim=debug)"),
];

#[derive(Parser)]
#[command(name = "socialsim")]
#[command(version)]
#[command(
    about = "Console social-network simulator",
    long_about = r#"Console social-network simulator with flat key-value persistence:

• Profiles with unique usernames and sequential user ids
• A post ledger with sequential post ids
• Likes (once per user and post) and ordered comments
• Per-user engagement analytics

Commands:
  shell      Interactive menu (create profile, login, post, react, analytics)
  user       Create, show, list and edit profiles
  post       Publish, show and list posts
  like       Like a post
  comment    Comment on a post
  analytics  Engagement summary for one author
  seed       Write the admin profile and sample posts into empty records
"#
)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Enable verbose output and debug logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (defaults to ./socialsim.toml when present)
    #[arg(long, env = "SOCIALSIM_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Directory holding the JSON records; overrides the configuration
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Do not seed empty records with the admin profile and sample posts
    #[arg(long, global = true)]
    no_seed: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn parse_with_styles() -> Self {
        let matches = build_cli_command().styles(help_styles()).get_matches();
        Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
    }
}

fn build_cli_command() -> Command {
    let use_color = detect_color_support();
    let appendix = render_top_level_appendix(use_color);
    let mut command = Cli::command().after_long_help(appendix);
    command = command.color(if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    });
    attach_command_examples(&mut command, use_color);
    command
}

fn attach_command_examples(command: &mut Command, use_color: bool) {
    for example in command_examples() {
        if let Some(subcommand) = command.find_subcommand_mut(example.name) {
            let help_text = render_examples(example.groups, use_color);
            *subcommand = subcommand.clone().after_long_help(help_text);
        }
    }
}

fn render_examples(groups: &[ExampleGroup], use_color: bool) -> String {
    let theme = &PALETTE;
    let mut buffer = String::new();

    let heading = stylize("Examples:", theme.heading, true, use_color);
    let _ = writeln!(buffer, "{heading}");

    for (index, group) in groups.iter().enumerate() {
        let title = stylize(group.title, theme.heading, true, use_color);
        let _ = writeln!(buffer, "  {title}");

        for command in group.commands {
            let arrow = stylize(GLYPHS.arrow, theme.accent, false, use_color);
            let command_text = stylize(command, theme.accent, false, use_color);
            let _ = writeln!(buffer, "    {arrow} {command_text}");
        }

        if index + 1 < groups.len() {
            buffer.push('\n');
        }
    }

    buffer
}

fn render_top_level_appendix(use_color: bool) -> String {
    let theme = &PALETTE;
    let mut buffer = String::new();

    let env_heading = stylize("Environment Variables:", theme.heading, true, use_color);
    let _ = writeln!(buffer, "{env_heading}");
    for (key, description) in ENVIRONMENT_VARIABLES {
        let key_text = stylize(key, theme.token, true, use_color);
        let value_text = stylize(description, theme.label, false, use_color);
        let _ = writeln!(buffer, "  {key_text}  {value_text}");
    }

    buffer.push('\n');

    let tip_heading = stylize("Tip:", theme.heading, true, use_color);
    let tip_text = stylize(
        "Use 'socialsim <command> --help' to view examples for each command.",
        theme.accent,
        false,
        use_color,
    );
    let _ = writeln!(buffer, "{tip_heading} {tip_text}");

    buffer
}

fn stylize(text: &str, color: ThemeColor, bold: bool, use_color: bool) -> String {
    match (use_color, bold) {
        (false, _) => text.to_string(),
        (true, true) => text.color(color).bold().to_string(),
        (true, false) => text.color(color).to_string(),
    }
}

fn detect_color_support() -> bool {
    ShouldColorize::from_env().should_colorize()
}

fn help_styles() -> Styles {
    let theme = &PALETTE;
    Styles::styled()
        .usage(style_from_color(theme.heading).bold())
        .header(style_from_color(theme.heading).bold())
        .literal(style_from_color(theme.accent))
        .placeholder(style_from_color(theme.muted))
        .valid(style_from_color(theme.success))
        .invalid(style_from_color(theme.warning))
        .error(style_from_color(theme.error).bold())
}

fn style_from_color(color: ThemeColor) -> Style {
    let ansi = match color {
        ThemeColor::Red => AnsiColor::Red,
        ThemeColor::Green => AnsiColor::Green,
        ThemeColor::Yellow => AnsiColor::Yellow,
        ThemeColor::Blue => AnsiColor::Blue,
        ThemeColor::Magenta => AnsiColor::Magenta,
        ThemeColor::Cyan => AnsiColor::Cyan,
        ThemeColor::BrightBlack => AnsiColor::BrightBlack,
        ThemeColor::BrightBlue => AnsiColor::BrightBlue,
        ThemeColor::BrightCyan => AnsiColor::BrightCyan,
        _ => AnsiColor::White,
    };
    Style::new().fg_color(Some(ClapColor::Ansi(ansi)))
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu shell
    Shell,

    /// Create, show, list and edit profiles
    #[command(subcommand)]
    User(UserCommands),

    /// Publish, show and list posts
    #[command(subcommand)]
    Post(PostCommands),

    /// Like a post (at most once per user)
    Like(LikeArgs),

    /// Append a comment to a post
    Comment(CommentArgs),

    /// Engagement summary for one author
    Analytics(AnalyticsArgs),

    /// Seed empty records with the admin profile and sample posts
    Seed,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn main() {
    let cli = Cli::parse_with_styles();
    init_logging(cli.verbose);

    if let Err(err) = execute(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    let output = OutputManager::new(GlobalOptions {
        output_format: cli.output,
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_color: cli.no_color,
    });

    let mut config = StoreConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(data_dir) = cli.data_dir {
        config.store.data_dir = data_dir.to_string_lossy().into_owned();
    }
    let client = Client::from_config(&config).context("failed to open the record store")?;
    for collection in Collection::ALL {
        output.verbose(&format!("{collection} record: {}", client.store().location(collection)));
    }

    if !cli.no_seed && !matches!(cli.command, Commands::Seed) {
        let report = client.seed_defaults().context("failed to seed default records")?;
        if !report.is_empty() {
            report_seed(&report, &output);
        }
    }

    match cli.command {
        Commands::Shell => run_shell(&client, &output),
        Commands::User(command) => handle_user_commands(command, &client, &output),
        Commands::Post(command) => handle_post_commands(command, &client, &output),
        Commands::Like(args) => handle_like(args, &client, &output),
        Commands::Comment(args) => handle_comment(args, &client, &output),
        Commands::Analytics(args) => handle_analytics(args, &client, &output),
        Commands::Seed => handle_seed(&client, &output),
    }
}
