use clap::Parser;
use revcalc::cli::Args;

fn main() {
    env_logger::init();

    let args = Args::parse();
    let result = revcalc::cli::run(&args, &mut std::io::stdout(), &mut std::io::stderr());
    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
