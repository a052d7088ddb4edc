use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

/// HTTP context holding a reusable blocking client.
pub struct Fetcher {
	client: Client,
}

impl Fetcher {
	/// Creates a fetcher whose requests give up after `timeout`.
	pub fn new(timeout: Duration) -> reqwest::Result<Self> {
		let client = Client::builder()
			.timeout(timeout)
			.build()?;
		Ok(Self { client })
	}

	/// Sends a GET request and returns the body as text.
	///
	/// Non-2xx statuses are turned into errors.
	pub fn get_text(&self, url: &str) -> reqwest::Result<String> {
		self.client
			.get(url)
			.send()?
			.error_for_status()?
			.text()
	}

	/// Downloads `url` and writes its text content to `path` as UTF-8.
	///
	/// Returns the number of bytes written.
	pub fn write_http_contents<P: AsRef<Path>>(
		&self,
		url: &str,
		path: P,
	) -> Result<usize, Box<dyn std::error::Error>> {
		let text = self.get_text(url)?;
		fs::write(&path, &text)?;
		log::info!("wrote {} bytes from {} to {}", text.len(), url, path.as_ref().display());
		Ok(text.len())
	}
}
