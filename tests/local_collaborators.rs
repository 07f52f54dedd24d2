use std::fs;
use std::path::PathBuf;
use gradle_action::errors::GradleActionError;
use gradle_action::services::local_artifact_store::LocalArtifactStore;
use gradle_action::services::local_configuration_cache::LocalConfigurationCache;
use gradle_action::services::local_dependency_cache::LocalDependencyCache;
use gradle_action::traits::artifact_store::ArtifactStore;
use gradle_action::traits::configuration_cache::ConfigurationCache;
use gradle_action::traits::dependency_cache::DependencyCache;
use tempfile::tempdir;

#[tokio::test]
async fn test_artifact_store_keeps_paths_relative_to_base() {
    let project = tempdir().unwrap();
    let artifacts = tempdir().unwrap();
    let report = project.path().join("resolved-dependencies.json");
    fs::write(&report, r#"[{":app": []}]"#).unwrap();

    let store = LocalArtifactStore::new(artifacts.path().to_path_buf());
    let response = store
        .upload_artifact("Resolved dependencies", &[report.clone()], project.path())
        .await
        .unwrap();

    assert_eq!(response.artifact_name, "Resolved dependencies");
    assert_eq!(response.artifact_items, vec!["resolved-dependencies.json"]);
    assert_eq!(response.size, fs::metadata(&report).unwrap().len());

    let stored = artifacts.path().join("Resolved dependencies/resolved-dependencies.json");
    assert_eq!(fs::read_to_string(stored).unwrap(), r#"[{":app": []}]"#);
}

#[tokio::test]
async fn test_artifact_store_nests_subdirectories() {
    let project = tempdir().unwrap();
    let artifacts = tempdir().unwrap();
    let nested = project.path().join("app/build/report.json");
    fs::create_dir_all(nested.parent().unwrap()).unwrap();
    fs::write(&nested, "{}").unwrap();

    let store = LocalArtifactStore::new(artifacts.path().to_path_buf());
    let response = store.upload_artifact("reports", &[nested], project.path()).await.unwrap();

    assert_eq!(response.artifact_items, vec![PathBuf::from("app/build/report.json").to_string_lossy().into_owned()]);
    assert!(artifacts.path().join("reports/app/build/report.json").is_file());
}

#[tokio::test]
async fn test_artifact_store_falls_back_to_file_name_outside_base() {
    let project = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    let artifacts = tempdir().unwrap();
    let file = elsewhere.path().join("outside.json");
    fs::write(&file, "{}").unwrap();

    let store = LocalArtifactStore::new(artifacts.path().to_path_buf());
    let response = store.upload_artifact("misc", &[file], project.path()).await.unwrap();

    assert_eq!(response.artifact_items, vec!["outside.json"]);
}

#[tokio::test]
async fn test_artifact_store_missing_file_is_upload_error() {
    let project = tempdir().unwrap();
    let artifacts = tempdir().unwrap();

    let store = LocalArtifactStore::new(artifacts.path().to_path_buf());
    let err = store
        .upload_artifact("Resolved dependencies", &[project.path().join("missing.json")], project.path())
        .await
        .unwrap_err();

    assert!(matches!(err, GradleActionError::Upload { .. }));
}

#[tokio::test]
async fn test_dependency_cache_restores_into_gradle_user_home() {
    let cache = tempdir().unwrap();
    let home = tempdir().unwrap();
    let project = tempdir().unwrap();
    let entry = cache.path().join("dependencies/modules-2");
    fs::create_dir_all(&entry).unwrap();
    fs::write(entry.join("guava.jar"), "jar").unwrap();

    let gradle_user_home = home.path().join(".gradle");
    let dependencies = LocalDependencyCache::new(cache.path().to_path_buf(), gradle_user_home.clone(), true);
    dependencies.restore_cached_dependencies(project.path()).await.unwrap();

    assert!(gradle_user_home.join("caches/modules-2/guava.jar").is_file());
}

#[tokio::test]
async fn test_dependency_cache_miss_and_disabled_are_no_ops() {
    let cache = tempdir().unwrap();
    let home = tempdir().unwrap();
    let project = tempdir().unwrap();
    let gradle_user_home = home.path().join(".gradle");

    let missing = LocalDependencyCache::new(cache.path().to_path_buf(), gradle_user_home.clone(), true);
    missing.restore_cached_dependencies(project.path()).await.unwrap();
    assert!(!gradle_user_home.exists());

    fs::create_dir_all(cache.path().join("dependencies")).unwrap();
    fs::write(cache.path().join("dependencies/a.jar"), "jar").unwrap();
    let disabled = LocalDependencyCache::new(cache.path().to_path_buf(), gradle_user_home.clone(), false);
    disabled.restore_cached_dependencies(project.path()).await.unwrap();
    assert!(!gradle_user_home.exists());
}

#[tokio::test]
async fn test_configuration_cache_restores_into_project() {
    let cache = tempdir().unwrap();
    let project = tempdir().unwrap();
    let entry = cache.path().join("configuration");
    fs::create_dir_all(&entry).unwrap();
    fs::write(entry.join("entry.bin"), "cc").unwrap();

    let configuration = LocalConfigurationCache::new(cache.path().to_path_buf(), true);
    configuration.restore_cached_configuration(project.path()).await.unwrap();

    assert_eq!(
        fs::read_to_string(project.path().join(".gradle/configuration-cache/entry.bin")).unwrap(),
        "cc"
    );
}
