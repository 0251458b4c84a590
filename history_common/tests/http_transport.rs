use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use history_common::net::{HttpTransport, Transport, Url};
use history_common::{HistoricalQuoteFetcher, HistoryError, QuoteSource};

/// Serve a single HTTP response on an ephemeral localhost port and return the
/// base URL plus a handle yielding the request line that was received.
fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            if header == "\r\n" || header.is_empty() {
                break;
            }
        }

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
        .unwrap();
        stream.flush().unwrap();
        request_line
    });

    (format!("http://{}/finance/historical", addr), handle)
}

fn transport() -> HttpTransport {
    HttpTransport::new(Duration::from_secs(5)).unwrap()
}

#[test]
fn returns_body_of_successful_response() {
    let (base, server) = serve_once("200 OK", "Date,Open,High,Low,Close,Volume\n");
    let url = Url::parse(&base).unwrap();

    let body = transport().get_text(&url).unwrap();

    assert_eq!(body, "Date,Open,High,Low,Close,Volume\n");
    assert!(server.join().unwrap().starts_with("GET /finance/historical"));
}

#[test]
fn error_status_is_a_network_error() {
    let (base, server) = serve_once("404 Not Found", "gone");
    let url = Url::parse(&base).unwrap();

    let err = transport().get_text(&url).unwrap_err();

    assert!(matches!(err, HistoryError::Network(_)), "{err}");
    server.join().unwrap();
}

#[test]
fn unreachable_endpoint_is_a_network_error() {
    // bind then drop to get a port nothing listens on
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let url = Url::parse(&format!("http://127.0.0.1:{}/h", port)).unwrap();

    let err = transport().get_text(&url).unwrap_err();

    assert!(matches!(err, HistoryError::Network(_)), "{err}");
}

#[test]
fn fetcher_sends_the_encoded_query_over_http() {
    let (base, server) = serve_once(
        "200 OK",
        "Date,Open,High,Low,Close,Volume\n03-Jan-03,1,2,0.5,1.5,100\n02-Jan-03,1,2,0.5,1.5,-\n",
    );
    let fetcher = HistoricalQuoteFetcher::new(transport(), &base);
    let day = |d| NaiveDate::from_ymd_opt(2003, 1, d).unwrap();

    let series = fetcher.fetch("NYSE:TOT", day(2), day(3)).unwrap();

    assert_eq!(series.len(), 2);
    assert_eq!(
        server.join().unwrap().trim_end(),
        "GET /finance/historical?q=NYSE%3ATOT&startdate=2003-01-02&enddate=2003-01-03&output=csv HTTP/1.1"
    );
}
