use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_test::assert_ok;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};
use xtoolbox::core::catalog::VersionSource;
use xtoolbox::core::placeholder::Placeholder;
use xtoolbox::net::NetError;
use xtoolbox::net::client::build_client;
use xtoolbox::net::download::{self, DownloadError, DownloadEvent};
use xtoolbox::net::github;
use xtoolbox::net::resolver::{Endpoints, Resolver, WebResolver};

// ============================================================================
// Helper Functions
// ============================================================================

fn client() -> reqwest::Client {
    build_client("XToolBox-tests", Duration::from_secs(5)).unwrap()
}

fn resolver(server: &MockServer) -> WebResolver {
    WebResolver::new(
        client(),
        Endpoints::with_base(&server.uri()),
        "nyxiereal/XToolBox",
    )
}

/// Serves `body` one byte every `gap` over plain HTTP/1.1. HEAD requests
/// get the headers only. Every connection is closed after one response.
async fn start_trickle_server(body: &'static [u8], gap: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let _ = socket.set_nodelay(true);
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let head = format!(
                    "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                if socket.write_all(head.as_bytes()).await.is_err() || request.starts_with(b"HEAD")
                {
                    return;
                }
                for byte in body {
                    tokio::time::sleep(gap).await;
                    if socket.write_all(&[*byte]).await.is_err() {
                        return;
                    }
                }
            });
        }
    });
    format!("http://{addr}")
}

/// Collects every event the download sent.
async fn collect_events(mut receiver: mpsc::Receiver<DownloadEvent>) -> Vec<DownloadEvent> {
    let mut events = Vec::new();
    while let Some(event) = receiver.recv().await {
        events.push(event);
    }
    events
}

// ============================================================================
// Download Tests
// ============================================================================

#[tokio::test]
async fn test_download_writes_file_and_reports_progress() {
    let mock_server = MockServer::start().await;
    let body = vec![7u8; 4096];

    Mock::given(method("GET"))
        .and(path("/tool.exe"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.clone()))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("tool.exe");
    let url = format!("{}/tool.exe", mock_server.uri());
    let (tx, rx) = mpsc::channel(64);
    let client = client();

    let (result, events) = tokio::join!(
        download::download(&client, &url, &target, false, tx),
        collect_events(rx)
    );

    assert_eq!(result, Ok(target.clone()));
    assert_eq!(std::fs::read(&target).unwrap(), body);
    assert!(!download::part_path(&target).exists());

    assert!(matches!(events.first(), Some(DownloadEvent::Started { .. })));
    assert_eq!(
        events.last(),
        Some(&DownloadEvent::Progress { received: 4096 })
    );
}

#[tokio::test]
async fn test_download_outlasts_idle_timeout_while_data_flows() {
    // About 3s of body against a 1s idle timeout, never idle for long
    let base = start_trickle_server(&[b'x'; 30], Duration::from_millis(100)).await;
    let client = build_client("XToolBox-tests", Duration::from_secs(1)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("slow.iso");
    let url = format!("{base}/slow.iso");
    let (tx, rx) = mpsc::channel(64);

    let (result, events) = tokio::join!(
        download::download(&client, &url, &target, false, tx),
        collect_events(rx)
    );

    assert_eq!(result, Ok(target.clone()));
    assert_eq!(std::fs::read(&target).unwrap(), vec![b'x'; 30]);
    assert_eq!(
        events.last(),
        Some(&DownloadEvent::Progress { received: 30 })
    );
}

#[tokio::test]
async fn test_download_stalled_server_is_error_3() {
    let base = start_trickle_server(b"xy", Duration::from_secs(3)).await;
    let client = build_client("XToolBox-tests", Duration::from_secs(1)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("stalled.iso");
    let url = format!("{base}/stalled.iso");
    let (tx, _rx) = mpsc::channel(64);

    let err = download::download(&client, &url, &target, false, tx)
        .await
        .unwrap_err();

    assert_eq!(err.code(), 3);
    assert!(!target.exists());
    assert!(!download::part_path(&target).exists());
}

#[tokio::test]
async fn test_download_not_found_is_error_3() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing.exe"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing.exe");
    let url = format!("{}/missing.exe", mock_server.uri());
    let (tx, _rx) = mpsc::channel(64);

    let err = download::download(&client(), &url, &target, false, tx)
        .await
        .unwrap_err();

    assert_eq!(err.code(), 3);
    assert!(err.to_string().contains("404"));
    assert!(!target.exists());
}

#[tokio::test]
async fn test_download_refuses_existing_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("new"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("old.exe");
    std::fs::write(&target, "old").unwrap();
    let url = format!("{}/old.exe", mock_server.uri());
    let (tx, _rx) = mpsc::channel(64);

    let result = download::download(&client(), &url, &target, false, tx).await;

    assert_eq!(result, Err(DownloadError::FileExists(target.clone())));
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "old");
}

#[tokio::test]
async fn test_download_overwrites_when_approved() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old.exe"))
        .respond_with(ResponseTemplate::new(200).set_body_string("new"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("old.exe");
    std::fs::write(&target, "old").unwrap();
    let url = format!("{}/old.exe", mock_server.uri());
    let (tx, _rx) = mpsc::channel(64);

    assert_ok!(download::download(&client(), &url, &target, true, tx).await);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
}

#[tokio::test]
async fn test_fetch_to_file_saves_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/debloat.ps1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Write-Host hi"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("debloat.ps1");
    let url = format!("{}/debloat.ps1", mock_server.uri());

    let bytes = download::fetch_to_file(&client(), &url, &target)
        .await
        .unwrap();

    assert_eq!(bytes, 13);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), "Write-Host hi");
}

// ============================================================================
// GitHub Tests
// ============================================================================

#[tokio::test]
async fn test_latest_tag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/pbatard/rufus/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"tag_name":"v4.5"}"#))
        .mount(&mock_server)
        .await;

    let tag = github::latest_tag(&client(), &mock_server.uri(), "pbatard/rufus")
        .await
        .unwrap();
    assert_eq!(tag, "v4.5");
}

#[tokio::test]
async fn test_latest_tag_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let err = github::latest_tag(&client(), &mock_server.uri(), "pbatard/rufus")
        .await
        .unwrap_err();
    assert!(matches!(err, NetError::Api { status: 403, .. }));
}

#[tokio::test]
async fn test_check_for_update_finds_newer_release() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/nyxiereal/XToolBox/releases"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{"tag_name":"v4.4"},{"tag_name":"v4.3"}]"#),
        )
        .mount(&mock_server)
        .await;

    let release = resolver(&mock_server).latest_release("4.3").await.unwrap();
    let release = release.expect("4.4 is newer than 4.3");
    assert_eq!(release.version, "4.4");
    assert!(release.download_url.ends_with("/releases/latest/download/XTBox.exe"));
}

#[tokio::test]
async fn test_check_for_update_when_current() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/nyxiereal/XToolBox/releases"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"[{"tag_name":"4.3"}]"#))
        .mount(&mock_server)
        .await;

    let release = resolver(&mock_server).latest_release("4.3").await.unwrap();
    assert_eq!(release, None);
}

// ============================================================================
// Resolver Tests
// ============================================================================

#[tokio::test]
async fn test_resolver_latest_version_without_dots() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/ip7z/7zip/releases/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"tag_name":"24.08"}"#))
        .mount(&mock_server)
        .await;

    let source = VersionSource::github("ip7z/7zip").without_dots();
    let version = resolver(&mock_server)
        .latest_version(&source)
        .await
        .unwrap();
    assert_eq!(version, "2408");
}

#[tokio::test]
async fn test_resolver_expands_pop_os_build() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pop/builds/22.04/nvidia"))
        .and(query_param("arch", "amd64"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"url":"https://iso.pop-os.org/pop-os_22.04_nvidia.iso"}"#),
        )
        .mount(&mock_server)
        .await;

    let placeholder = Placeholder::PopOs {
        build: "nvidia".to_string(),
    };
    let url = resolver(&mock_server)
        .expand(&placeholder, "%POP%, nvidia")
        .await
        .unwrap();
    assert_eq!(url, "https://iso.pop-os.org/pop-os_22.04_nvidia.iso");
}

#[tokio::test]
async fn test_resolver_expands_debian_netinst() {
    let mock_server = MockServer::start().await;

    let page = r#"<html><body>
        <a href="https://cdimage.debian.org/debian-cd/current/amd64/iso-cd/debian-12.7.0-amd64-netinst.iso">netinst</a>
    </body></html>"#;
    Mock::given(method("GET"))
        .and(path("/debian/download"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&mock_server)
        .await;

    let url = resolver(&mock_server)
        .expand(&Placeholder::Debian, "%DEBIAN%")
        .await
        .unwrap();
    assert!(url.ends_with("debian-12.7.0-amd64-netinst.iso"));
}

#[tokio::test]
async fn test_resolver_reports_missing_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = resolver(&mock_server)
        .expand(&Placeholder::MintVersion, "https://mint/%MINTVERSION%.iso")
        .await
        .unwrap_err();
    assert!(matches!(err, NetError::Api { status: 500, .. }));
}
