use std::process::ExitCode;

use tracing_subscriber::prelude::*;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let paths: Vec<_> = std::env::args_os().skip(1).collect();
    if paths.is_empty() {
        eprintln!("Usage: imghdr-detect <FILE>...");
        return ExitCode::from(2);
    }

    let show_path = paths.len() > 1;
    let mut failed = false;
    for path in paths {
        if show_path {
            println!("{}:", path.to_string_lossy());
        }

        match imghdr::file::detect_file(&path) {
            Ok(format) => println!("Detected image format: {format}"),
            Err(err) => {
                tracing::debug!("Detection failed for {}: {err:?}", path.to_string_lossy());
                println!("Error: {err}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
