#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lacuna_backend::run().await
}
