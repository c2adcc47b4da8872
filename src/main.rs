#[tokio::main]
async fn main() {
    if let Err(e) = accountd::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
