use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::debug;

use super::{ApiError, ApiOptions, DictionaryApi, RESOURCE};

/// [`DictionaryApi`] backed by the dictionary REST service.
#[derive(Debug, Clone)]
pub struct HttpDictionary {
	base: Url,
	client: Client,
}

/// Parse a service base URL, accepting only absolute http and https URLs.
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
	let raw = raw.trim();
	let base = Url::parse(raw).map_err(|err| ApiError::invalid_endpoint(raw, err.to_string()))?;
	if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
		return Err(ApiError::invalid_endpoint(
			raw,
			"expected an http or https URL",
		));
	}
	Ok(base)
}

#[derive(Serialize)]
struct NewWord<'a> {
	word: &'a str,
}

impl HttpDictionary {
	pub fn new(options: &ApiOptions) -> Result<Self, ApiError> {
		let base = parse_base_url(&options.base_url)?;
		let client = Client::builder()
			.timeout(options.timeout)
			.build()
			.map_err(|source| ApiError::Client { source })?;

		Ok(Self { base, client })
	}

	pub fn base_url(&self) -> &Url {
		&self.base
	}

	fn url_for(&self, segments: &[&str]) -> Result<Url, ApiError> {
		let mut url = self.base.clone();
		url.path_segments_mut()
			.map_err(|()| ApiError::invalid_endpoint(self.base.as_str(), "URL cannot be a base"))?
			.pop_if_empty()
			.extend(segments);
		Ok(url)
	}

	pub(crate) fn search_url(&self, query: &str) -> Result<Url, ApiError> {
		let mut url = self.url_for(&[RESOURCE])?;
		url.query_pairs_mut().append_pair("q", query);
		Ok(url)
	}

	pub(crate) fn collection_url(&self) -> Result<Url, ApiError> {
		self.url_for(&[RESOURCE])
	}

	pub(crate) fn entry_url(&self, word: &str) -> Result<Url, ApiError> {
		self.url_for(&[RESOURCE, word])
	}
}

fn dispatch(method: &'static str, url: &Url, request: RequestBuilder) -> Result<Response, ApiError> {
	debug!(method, %url, "dictionary request");
	let response = request.send().map_err(|source| ApiError::Transport {
		method,
		url: url.to_string(),
		source,
	})?;

	let status = response.status();
	if !status.is_success() {
		return Err(ApiError::Status {
			method,
			url: url.to_string(),
			status: status.as_u16(),
		});
	}
	Ok(response)
}

impl DictionaryApi for HttpDictionary {
	fn search(&self, query: &str) -> Result<Vec<String>, ApiError> {
		let url = self.search_url(query)?;
		let response = dispatch("GET", &url, self.client.get(url.clone()))?;
		let body = response.text().map_err(|source| ApiError::Transport {
			method: "GET",
			url: url.to_string(),
			source,
		})?;
		serde_json::from_str(&body).map_err(|source| ApiError::Decode {
			method: "GET",
			url: url.to_string(),
			source,
		})
	}

	fn add(&self, word: &str) -> Result<(), ApiError> {
		let url = self.collection_url()?;
		let request = self.client.post(url.clone()).json(&NewWord { word });
		dispatch("POST", &url, request)?;
		Ok(())
	}

	fn remove(&self, word: &str) -> Result<(), ApiError> {
		let url = self.entry_url(word)?;
		dispatch("DELETE", &url, self.client.delete(url.clone()))?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io::{BufRead, BufReader, Read, Write};
	use std::net::{TcpListener, TcpStream};
	use std::thread::{self, JoinHandle};
	use std::time::Duration;

	use super::*;

	fn client_for(base_url: &str) -> HttpDictionary {
		HttpDictionary::new(&ApiOptions {
			base_url: base_url.to_string(),
			timeout: Duration::from_secs(5),
		})
		.expect("valid base url")
	}

	fn read_request(stream: &TcpStream) -> String {
		let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
		let mut request = String::new();
		let mut content_length = 0usize;
		loop {
			let mut line = String::new();
			reader.read_line(&mut line).expect("read request line");
			if line == "\r\n" || line.is_empty() {
				break;
			}
			if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
				content_length = value.trim().parse().expect("numeric content length");
			}
			request.push_str(&line);
		}
		let mut body = vec![0; content_length];
		reader.read_exact(&mut body).expect("read request body");
		request.push_str(&String::from_utf8(body).expect("utf8 body"));
		request
	}

	/// Answer exactly one request and hand back what was received.
	fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
		let addr = listener.local_addr().expect("listener address");
		let handle = thread::spawn(move || {
			let (mut stream, _) = listener.accept().expect("accept connection");
			let request = read_request(&stream);
			let response = format!(
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			);
			stream
				.write_all(response.as_bytes())
				.expect("write response");
			request
		});
		(format!("http://{addr}"), handle)
	}

	#[test]
	fn urls_extend_base_path_and_encode_input() {
		let client = client_for("http://dict.local/api/");
		assert_eq!(
			client.search_url("ice cream").unwrap().as_str(),
			"http://dict.local/api/dictionary?q=ice+cream"
		);
		assert_eq!(
			client.collection_url().unwrap().as_str(),
			"http://dict.local/api/dictionary"
		);
		assert_eq!(
			client.entry_url("a/b c").unwrap().as_str(),
			"http://dict.local/api/dictionary/a%2Fb%20c"
		);
	}

	#[test]
	fn rejects_unusable_base_urls() {
		for url in ["not a url", "mailto:someone@example.com", "ftp://dict.local"] {
			let err = HttpDictionary::new(&ApiOptions {
				base_url: url.to_string(),
				..ApiOptions::default()
			})
			.expect_err("base url should be rejected");
			assert!(matches!(err, ApiError::InvalidEndpoint { .. }), "{url}: {err}");
		}
	}

	#[test]
	fn search_decodes_matching_words() {
		let (base, server) = serve_once("200 OK", r#"["cat","category"]"#);
		let words = client_for(&base).search("cat").expect("search succeeds");
		assert_eq!(words, vec!["cat".to_string(), "category".to_string()]);

		let request = server.join().expect("server thread");
		assert!(request.starts_with("GET /dictionary?q=cat HTTP/1.1"), "{request}");
	}

	#[test]
	fn add_posts_word_payload() {
		let (base, server) = serve_once("201 Created", "{}");
		client_for(&base).add("xyz").expect("add succeeds");

		let request = server.join().expect("server thread");
		assert!(request.starts_with("POST /dictionary HTTP/1.1"), "{request}");
		assert!(request.ends_with(r#"{"word":"xyz"}"#), "{request}");
	}

	#[test]
	fn remove_targets_entry_path() {
		let (base, server) = serve_once("204 No Content", "");
		client_for(&base).remove("cat").expect("remove succeeds");

		let request = server.join().expect("server thread");
		assert!(request.starts_with("DELETE /dictionary/cat HTTP/1.1"), "{request}");
	}

	#[test]
	fn non_success_status_is_an_error() {
		let (base, server) = serve_once("500 Internal Server Error", "[]");
		let err = client_for(&base).search("cat").expect_err("search fails");
		assert_eq!(err.status(), Some(500));
		server.join().expect("server thread");
	}

	#[test]
	fn malformed_body_is_a_decode_error() {
		let (base, server) = serve_once("200 OK", r#"{"words":[]}"#);
		let err = client_for(&base).search("cat").expect_err("search fails");
		assert!(matches!(err, ApiError::Decode { .. }), "{err}");
		server.join().expect("server thread");
	}

	#[test]
	fn unreachable_service_is_a_transport_error() {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
		let addr = listener.local_addr().expect("address");
		drop(listener);

		let err = client_for(&format!("http://{addr}"))
			.search("cat")
			.expect_err("search fails");
		assert!(matches!(err, ApiError::Transport { .. }), "{err}");
	}
}
