//! Mock HTTP endpoint shared by the module tests.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use url::Url;

/// Serves exactly one HTTP response on a random local port.
///
/// Returns the base URL (`http://127.0.0.1:<port>/v2/`) and a handle that
/// yields the raw request text once the exchange is over.
pub(crate) fn serve_once(status_line: &str, body: &str) -> (Url, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let port = listener.local_addr().unwrap().port();
    let url = Url::parse(&format!("http://127.0.0.1:{}/v2/", port)).unwrap();

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: application/json\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let n = stream.read(&mut buf).unwrap();
        let request = String::from_utf8_lossy(&buf[..n]).to_string();

        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (url, handle)
}
