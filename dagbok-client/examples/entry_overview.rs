use dagbok_client::{DagbokClient, DagbokUrl, Session};
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::from_filename("./dagbok-client/.env.local").ok();

    let url = DagbokUrl::from_env();
    let session = match (env::var("DAGBOK_EMAIL"), env::var("DAGBOK_PASSWORD")) {
        (Ok(email), Ok(password)) => Some(Session::login(&url, &email, &password).await?),
        _ => None,
    };
    let client = DagbokClient::new(url, session);

    let entries = client.fetch_entries().await?;
    println!("{} entries", entries.len());

    for entry in entries {
        let photos = client.fetch_entry_photos(&entry.id).await?;
        let location = entry.location.as_deref().unwrap_or("-");
        println!(
            "[{}] {} | {} | {} photo(s)",
            entry.id, location, entry.text, photos.len()
        );
        for photo in photos {
            println!("    {}", photo.url);
        }
    }

    Ok(())
}
