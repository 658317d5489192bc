#[tokio::main]
async fn main() -> std::io::Result<()> {
    wedding_invitation::run().await
}
