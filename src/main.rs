use sluice::config::Config;
use sluice::flags::Flags;
use sluice::shell::Shell;
use std::env;

fn main() -> Result<(), sluice::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("sluice {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = Config::from_flags(&flags);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();
    log::debug!("starting with {:?}", config);

    let mut shell = Shell::new(config)?;
    shell.run()
}
