use veridetect::{Client, Config, GetResultOptions, UploadOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("VERIDETECT_API_KEY")
        .expect("Please set the VERIDETECT_API_KEY environment variable");

    let client = Client::new(Config {
        api_key,
        ..Default::default()
    })?;

    let file_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./image.jpg".to_string());

    println!("Uploading {file_path} for analysis...");
    let upload_result = client.upload(UploadOptions { file_path }).await?;
    println!("Request ID: {}", upload_result.request_id);

    println!("Waiting for analysis to complete...");
    let result = client
        .get_result(
            &upload_result.request_id,
            Some(GetResultOptions {
                max_attempts: Some(30),
                polling_interval: Some(2000),
            }),
        )
        .await?;

    println!("Status: {}", result.status);
    if let Some(score) = result.score {
        println!("Score: {:.4} ({:.1}%)", score, score * 100.0);
    } else {
        println!("Score: not available");
    }

    for model in &result.models {
        let score = model
            .score
            .map(|s| format!("{s:.3}"))
            .unwrap_or_else(|| "N/A".to_string());
        println!("  - {}: {} (score: {score})", model.name, model.status);
    }

    Ok(())
}
