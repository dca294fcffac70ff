//! `GitHubClient` request behaviour against a loopback HTTP server.

use readme_sync::{FetchError, GitHubClient, RepoRef, RepositorySource};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Answers every request with the same canned response and records the
/// lowercased request heads.
struct LoopbackServer {
    base_uri: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl LoopbackServer {
    async fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_uri = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let head = read_head(&mut stream).await;
                log.lock().unwrap().push(head);

                let response = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self { base_uri, requests }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).await.unwrap();
        if read == 0 {
            break;
        }
        head.extend_from_slice(&chunk[..read]);
    }
    String::from_utf8_lossy(&head).to_lowercase()
}

#[tokio::test]
async fn server_error_is_requested_once() {
    let server = LoopbackServer::start("500 Internal Server Error", r#"{"message":"boom"}"#).await;
    let client = GitHubClient::new(None, Some(&server.base_uri)).unwrap();
    let repo = RepoRef::new("a", "b");

    assert!(client.repository(&repo).await.is_err());
    assert_eq!(server.requests().len(), 1);

    assert!(client.commit(&repo, "main").await.is_err());
    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].starts_with("get /repos/a/b http/1.1"));
    assert!(requests[1].starts_with("get /repos/a/b/commits/main http/1.1"));
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    let server = LoopbackServer::start(
        "429 Too Many Requests",
        r#"{"message":"API rate limit exceeded"}"#,
    )
    .await;
    let client = GitHubClient::new(Some("ghp_test"), Some(&server.base_uri)).unwrap();

    let result = client.repository(&RepoRef::new("a", "b")).await;

    assert!(matches!(result, Err(FetchError::GitHubError(_))));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn missing_repository_is_not_found() {
    let server = LoopbackServer::start("404 Not Found", r#"{"message":"Not Found"}"#).await;
    let client = GitHubClient::new(None, Some(&server.base_uri)).unwrap();

    let result = client.repository(&RepoRef::new("ghost", "gone")).await;

    assert!(matches!(
        result,
        Err(FetchError::NotFound { ref route }) if route == "/repos/ghost/gone"
    ));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn token_is_sent_as_bearer() {
    let server = LoopbackServer::start("200 OK", r#"{"stargazers_count":42}"#).await;
    let client = GitHubClient::new(Some("ghp_test"), Some(&server.base_uri)).unwrap();

    let info = client.repository(&RepoRef::new("a", "b")).await.unwrap();

    assert_eq!(info.stargazers_count, 42);
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contains("\r\nauthorization: bearer ghp_test\r\n"));
}

#[tokio::test]
async fn anonymous_client_sends_no_authorization() {
    let server = LoopbackServer::start("200 OK", r#"{"stargazers_count":7}"#).await;
    let client = GitHubClient::new(None, Some(&server.base_uri)).unwrap();

    let info = client.repository(&RepoRef::new("a", "b")).await.unwrap();

    assert_eq!(info.stargazers_count, 7);
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].contains("authorization:"));
}
