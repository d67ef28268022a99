use std::sync::Arc;
use veridetect::{Client, Config, PollOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("VERIDETECT_API_KEY")
        .expect("Please set the VERIDETECT_API_KEY environment variable");

    let client = Arc::new(Client::new(Config {
        api_key,
        ..Default::default()
    })?);

    let link = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string());

    println!("Submitting social media link: {link}");
    let upload_result = client.upload_social_media(&link).await?;
    println!("Request ID: {}", upload_result.request_id);

    // Register handlers before polling starts; the outcome arrives only
    // through these events.
    client.on_result(|result| {
        println!("Analysis complete: {}", result.status);
        if let Some(score) = result.score {
            println!("Overall score: {:.2}% ({score:.3})", score * 100.0);
        }
        for model in &result.models {
            let score = model
                .score
                .map(|s| format!("{s:.3}"))
                .unwrap_or_else(|| "N/A".to_string());
            println!("  - {}: {} (score: {score})", model.name, model.status);
        }
    });
    client.on_error(|error| {
        eprintln!("Analysis failed [{}]: {error}", error.code());
    });

    // Fire-and-forget: the poll runs on its own task and reports via events
    let poller = Arc::clone(&client);
    let request_id = upload_result.request_id.clone();
    let handle = tokio::spawn(async move {
        poller
            .poll_for_results(
                &request_id,
                Some(PollOptions {
                    polling_interval: Some(2000),
                    timeout: Some(120_000),
                    max_attempts: None,
                }),
            )
            .await;
    });

    handle.await?;
    Ok(())
}
