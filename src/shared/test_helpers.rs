use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum_test::TestServer;
use tempfile::TempDir;

use crate::core::config::{AppConfig, Config, StorageConfig, SwaggerConfig};
use crate::core::router;
use crate::features::reports::models::Report;
use crate::features::reports::{InMemoryReportStore, ReportService};
use crate::modules::storage::ReportFileStorage;
use crate::shared::constants::REPORTS_PUBLIC_PREFIX;

/// Running application backed by a throwaway directory
pub struct TestApp {
    pub server: TestServer,
    pub config: Config,
    _dir: TempDir,
}

impl TestApp {
    pub fn reports_dir(&self) -> &Path {
        &self.config.storage.reports_dir
    }

    /// Number of files currently in the reports directory
    pub fn stored_file_count(&self) -> usize {
        std::fs::read_dir(self.reports_dir())
            .map(|entries| entries.count())
            .unwrap_or(0)
    }

    /// On-disk location for a public `/reports/...` path
    pub fn disk_path(&self, public_path: &str) -> PathBuf {
        let name = public_path.rsplit('/').next().unwrap_or(public_path);
        self.reports_dir().join(name)
    }
}

pub fn test_config(root: &Path) -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
            max_upload_size: 64 * 1024,
            seed_sample_reports: true,
        },
        storage: StorageConfig {
            reports_dir: root.join("reports"),
            admin_dir: root.join("admin"),
        },
        swagger: SwaggerConfig {
            username: None,
            password: None,
            title: "Financial Report API".to_string(),
            version: "test".to_string(),
            description: "test".to_string(),
        },
    }
}

pub fn spawn_app(seed: Vec<Report>) -> TestApp {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path());
    std::fs::create_dir_all(&config.storage.reports_dir).unwrap();
    std::fs::create_dir_all(&config.storage.admin_dir).unwrap();

    let files = Arc::new(ReportFileStorage::new(
        config.storage.reports_dir.clone(),
        REPORTS_PUBLIC_PREFIX,
    ));
    let store = Arc::new(InMemoryReportStore::new(seed));
    let service = Arc::new(ReportService::new(store, files));

    let server = TestServer::new(router::build(&config, service)).unwrap();

    TestApp {
        server,
        config,
        _dir: dir,
    }
}
