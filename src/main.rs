use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(err) = pentest_notes::cli::run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
