//! Getting the raw standings page, either live or from the snapshot on disk.

use super::Error;
use log::{debug, error, warn};
use std::io::{Read, Write};
use std::path::Path;

pub const STANDINGS_URL: &str = "https://www.pro-football-reference.com/years/2023";

/// Downloads the page at `url`. Anything but a success status is an error.
pub async fn fetch_page(url: &str) -> Result<String, Error> {
    debug!("Fetching data from {}", url);
    let client = create_client()?;
    let resp = client
        .get(url)
        .version(reqwest::Version::HTTP_11)
        .send()
        .await?;
    if resp.status().is_success() {
        Ok(resp.text().await?)
    } else {
        warn!("Request was not successful, status: {}", resp.status());
        Err(Error::UnexpectedStatus(resp.status()))
    }
}

/// Stores a page snapshot so later requests can be served without hitting the site
pub fn save_html_to_file(path: &Path, html: &str) -> Result<(), Error> {
    debug!("Saving {} bytes to {}", html.len(), path.display());
    let mut file = std::fs::File::create(path)?;
    file.write_all(html.as_bytes())?;
    Ok(())
}

/// Reads a snapshot saved by [`save_html_to_file`]. A missing file is reported separately as
/// [`Error::CacheMissing`].
pub fn read_html_from_file(path: &Path) -> Result<String, Error> {
    let mut file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::CacheMissing(path.to_path_buf()));
        }
        Err(e) => {
            error!("An error occurred while reading {}: {}", path.display(), e);
            return Err(e.into());
        }
    };
    let mut html = String::new();
    if let Err(e) = file.read_to_string(&mut html) {
        error!("An error occurred while reading {}: {}", path.display(), e);
        return Err(e.into());
    }
    Ok(html)
}

fn create_client() -> Result<reqwest::Client, reqwest::Error> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT_LANGUAGE,
        reqwest::header::HeaderValue::from_static("en-US,en;q=0.5"),
    );
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
    );
    headers.insert(
        reqwest::header::UPGRADE_INSECURE_REQUESTS,
        reqwest::header::HeaderValue::from_static("1"),
    );
    reqwest::ClientBuilder::new()
        .user_agent(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:102.0) Gecko/20100101 Firefox/102.0",
        )
        .cookie_store(true)
        .default_headers(headers)
        .build()
}
