use std::fs;

use mvr_common::config::Config;
use mvr_common::model::{ArtifactCoordinate, JarArtifact};
use mvr_core::DependencyResolver;
use sha1::{Digest, Sha1};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AUTHORIZATION: &str = "Basic dXNlcm5hbWU6cGFzc3dvcmQ=";

async fn serve(server: &MockServer, relative: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/maven2/{relative}")))
        .and(header("Authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

fn config(server: &MockServer, local: &std::path::Path) -> Config {
    Config {
        repository_url: format!("{}/maven2", server.uri()),
        repository_id: "test".to_string(),
        repository_username: Some("username".to_string()),
        repository_password: Some("password".to_string()),
        local_repository: local.to_path_buf(),
        staging_dir: None,
        fetch_workers: 2,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn resolves_through_an_authenticated_http_repository() {
    let server = MockServer::start().await;
    let coordinate = ArtifactCoordinate::new("org.example", "widget", "1.2");
    let artifact = JarArtifact::new(&coordinate);
    let jar = "widget jar";
    let pom = "<project/>";
    serve(&server, artifact.jar_path(), jar).await;
    serve(&server, artifact.pom_path(), pom).await;
    serve(&server, artifact.jar_sha1_path(), &hex::encode(Sha1::digest(jar))).await;
    serve(&server, artifact.pom_sha1_path(), &hex::encode(Sha1::digest(pom))).await;

    let local = tempfile::tempdir().unwrap();
    let config = config(&server, local.path());
    let resolved = tokio::task::spawn_blocking(move || {
        let resolver = DependencyResolver::new(&config)?;
        let first = resolver.resolve_one(&coordinate)?;
        // Cached now; the mocks would reject a second round of requests.
        let second = resolver.resolve_one(&coordinate)?;
        assert_eq!(first, second);
        Ok::<_, mvr_common::MvrError>(first)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(
        resolved,
        local.path().join("org/example/widget/1.2/widget-1.2.jar")
    );
    assert_eq!(fs::read_to_string(&resolved).unwrap(), jar);
    assert_eq!(
        fs::read_to_string(local.path().join(artifact.pom_path())).unwrap(),
        pom
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn unpublished_artifact_fails_and_leaves_no_files() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(4)
        .mount(&server)
        .await;

    let local = tempfile::tempdir().unwrap();
    let config = config(&server, local.path());
    let coordinate = ArtifactCoordinate::new("org.example", "ghost", "0.1");
    let artifact = JarArtifact::new(&coordinate);
    let err = tokio::task::spawn_blocking(move || {
        DependencyResolver::new(&config)?.resolve_one(&coordinate)
    })
    .await
    .unwrap()
    .unwrap_err();

    assert!(!err.is_validation_failure());
    assert!(err.to_string().contains("org.example:ghost:0.1"), "{err}");
    for relative in artifact.all_paths() {
        assert!(!local.path().join(relative).exists());
    }
}
