#[tokio::main]
async fn main() -> anyhow::Result<()> {
    glossaki_backend::run().await
}
