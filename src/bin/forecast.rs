use bom_forecast::ftp::execute;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    execute().await;
}
