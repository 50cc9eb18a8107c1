//! End-to-end runs of the crawl pipeline against a local mock server.

use jscrawler::{run, run_with_sink, Config, CrawlError, Sink};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOME: &str = r#"
<html>
  <head>
    <script src="/assets/vendor.js"></script>
    <script type="text/javascript" src="app.js"></script>
    <script type="text/css" src="not-a-script"></script>
  </head>
  <body>
    <script>
      var manifest = "/api/manifest.json";
      lazy('chunks/lazy.js');
    </script>
  </body>
</html>
"#;

async fn mock_site() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HOME))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    server
}

fn config_with_output(output: &Path) -> Config {
    Config {
        timeout: Duration::from_secs(5),
        threads: 4,
        output: Some(output.to_path_buf()),
        ..Config::default()
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

async fn run_quietly(urls: Vec<String>, config: &Config) -> jscrawler::RunSummary {
    let sink = Arc::new(Sink::with_console(io::sink(), config.output.as_deref()).unwrap());
    let summary = run_with_sink(urls, config, Arc::clone(&sink)).await.unwrap();
    Arc::try_unwrap(sink).ok().unwrap().close().unwrap();
    summary
}

#[tokio::test]
async fn test_references_from_one_page() {
    let server = mock_site().await;
    let dir = tempdir().unwrap();
    let out = dir.path().join("js.txt");
    let config = config_with_output(&out);

    let summary = run_quietly(vec![format!("{}/home", server.uri())], &config).await;

    assert_eq!(summary.pages_ok, 1);
    assert_eq!(
        read_lines(&out),
        vec!["/assets/vendor.js", "app.js", "chunks/lazy.js"]
    );
}

#[tokio::test]
async fn test_complete_mode_resolves_against_page_url() {
    let server = mock_site().await;
    let dir = tempdir().unwrap();
    let out = dir.path().join("js.txt");
    let config = Config {
        complete: true,
        ..config_with_output(&out)
    };

    run_quietly(vec![format!("{}/home", server.uri())], &config).await;

    let base = server.uri();
    assert_eq!(
        read_lines(&out),
        vec![
            format!("{}/assets/vendor.js", base),
            format!("{}/app.js", base),
            format!("{}/chunks/lazy.js", base),
        ]
    );
}

#[tokio::test]
async fn test_failing_urls_do_not_block_others() {
    let server = mock_site().await;
    let dir = tempdir().unwrap();
    let out = dir.path().join("js.txt");
    let config = config_with_output(&out);

    let urls = vec![
        format!("{}/broken", server.uri()),
        format!("{}/home", server.uri()),
        "http://127.0.0.1:1/unreachable".to_string(),
        "::not a url::".to_string(),
    ];
    let summary = run_quietly(urls, &config).await;

    assert_eq!(summary.pages_ok, 1);
    assert_eq!(summary.pages_failed, 3);
    assert_eq!(read_lines(&out).len(), 3);
}

#[tokio::test]
async fn test_duplicate_urls_each_produce_output() {
    let server = mock_site().await;
    let dir = tempdir().unwrap();
    let out = dir.path().join("js.txt");
    let config = config_with_output(&out);

    let url = format!("{}/home", server.uri());
    let summary = run_quietly(vec![url.clone(), url], &config).await;

    assert_eq!(summary.pages_ok, 2);
    assert_eq!(summary.references, 6);
    assert_eq!(read_lines(&out).len(), 6);
}

#[tokio::test]
async fn test_second_run_appends() {
    let server = mock_site().await;
    let dir = tempdir().unwrap();
    let out = dir.path().join("js.txt");
    let config = Config {
        threads: 1,
        ..config_with_output(&out)
    };
    let urls = vec![format!("{}/home", server.uri())];

    run(urls.clone(), &config).await.unwrap();
    run(urls, &config).await.unwrap();

    let lines = read_lines(&out);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[..3], lines[3..]);
}

#[tokio::test]
async fn test_unopenable_output_aborts_before_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HOME))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let out = dir.path().join("missing-dir").join("js.txt");
    let config = config_with_output(&out);

    let result = run(vec![format!("{}/home", server.uri())], &config).await;
    assert!(matches!(result, Err(CrawlError::OutputOpen { .. })));
}
