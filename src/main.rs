#[tokio::main]
async fn main() -> anyhow::Result<()> {
    moviedeck_lib::run().await
}
