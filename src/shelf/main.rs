use shelf::error::ShelfError;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        match e {
            ShelfError::Fetch(detail) => {
                tracing::debug!(%detail, "fetch failed");
                eprintln!("Error loading products.");
            }
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}
