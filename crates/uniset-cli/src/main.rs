mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{
    CheckParams, CompareParams, CountParams, DeleteParams, ReplaceParams, ShowParams, SpanParams,
    TrimParams, build_cli,
};

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("show", m)) => {
            let params = ShowParams::from_matches(m);
            commands::show::run(params.into());
        }
        Some(("compare", m)) => {
            let params = CompareParams::from_matches(m);
            commands::compare::run(params.into());
        }
        Some(("span", m)) => {
            let params = SpanParams::from_matches(m);
            commands::span::run(params.into());
        }
        Some(("count", m)) => {
            let params = CountParams::from_matches(m);
            commands::text::run_count(params.into());
        }
        Some(("replace", m)) => {
            let params = ReplaceParams::from_matches(m);
            commands::text::run_replace(params.into());
        }
        Some(("delete", m)) => {
            let params = DeleteParams::from_matches(m);
            commands::text::run_delete(params.into());
        }
        Some(("trim", m)) => {
            let params = TrimParams::from_matches(m);
            commands::text::run_trim(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Log to stderr. `RUST_LOG` wins unless `-v` asks for more.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("uniset_lib=debug"),
        _ => EnvFilter::new("uniset_lib=trace,uniset=trace"),
    };
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
