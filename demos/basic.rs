//! Basic usage example.
//!
//! Run with: OHGO_API_KEY=<key> cargo run --example basic

use ohgo::{ImageSize, ListOptions, OhgoClient, QueryParams, Region};

#[tokio::main]
async fn main() -> ohgo::Result<()> {
    tracing_subscriber::fmt::init();

    let client = OhgoClient::from_env()?;

    // List every camera in the Columbus region.
    let params = QueryParams {
        region: Some(Region::Columbus.into()),
        ..Default::default()
    };
    let cameras = client.get_cameras(&params, &ListOptions::all()).await?;
    println!("{} cameras in Columbus", cameras.len());

    if let Some(camera) = cameras.first() {
        println!("first: {} ({})", camera.location, camera.id);
        let image = client.get_image(camera, ImageSize::Small).await?;
        println!("fetched {} bytes from the first view", image.len());
    }

    // Digital signs currently displaying messages.
    let signs = client
        .get_digital_signs(&Default::default(), &ListOptions::default())
        .await?;
    for sign in signs.iter().take(5) {
        println!("{}: {:?}", sign.location, sign.messages);
    }

    Ok(())
}
