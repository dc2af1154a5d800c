#[tokio::main]
async fn main() -> eyre::Result<()> {
    cluster_repository::run().await
}
