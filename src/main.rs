use readability::cli::{parse_args, Cli, USAGE};
use readability::commands::handle_score;
use readability::formatting::{FormattingConfig, Formatter};

fn main() {
    let cli = parse_args();
    init_logging(&cli);

    if cli.patterns.is_empty() {
        println!("{}", USAGE);
        println!("Run with --help for all options.");
        return;
    }

    let formatter = Formatter::new(create_formatting_config(cli.plain));
    if let Err(e) = handle_score(&cli, &formatter) {
        eprintln!("{}", formatter.error(&format!("error: {:#}", e)));
        std::process::exit(1);
    }
}

// RUST_LOG takes precedence over -v
fn init_logging(cli: &Cli) {
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
