#[tokio::main]
async fn main() -> eyre::Result<()> {
    cluster_api::run().await
}
