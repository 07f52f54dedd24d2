use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{GITHUB_OUTPUT_ENV, GRADLE_USER_HOME_DIR};
use crate::enums::commands::Commands;
use crate::errors::{GradleActionError, GradleActionResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::services::action_inputs::ActionInputs;
use crate::services::action_outputs::ActionOutputs;
use crate::services::build_executor::BuildExecutor;
use crate::services::init_script_writer::InitScriptWriter;
use crate::services::local_artifact_store::LocalArtifactStore;
use crate::services::local_configuration_cache::LocalConfigurationCache;
use crate::services::local_dependency_cache::LocalDependencyCache;
use crate::structs::cli::Cli;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    home: PathBuf,
    config_path: PathBuf,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(home: PathBuf, config_path: PathBuf) -> Self {
        Self {
            home,
            config_path,
            start_time: None,
        }
    }

    pub fn from_cli(cli: &Cli) -> GradleActionResult<Self> {
        let home = cli
            .home
            .clone()
            .or_else(dirs::home_dir)
            .ok_or(GradleActionError::HomeDirectoryNotFound)?;
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| ConfigHelper::default_config_path(&home));

        Ok(Self::new(home, config_path))
    }

    /// Runs `command` and returns the exit code the process should end with.
    pub async fn run_command(&mut self, command: Commands) -> GradleActionResult<i32> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::InitScript => self.init_script_command().map(|_| 0),
            Commands::Execute { root, json, executable, arguments } => {
                self.execute_command(root, json, &executable, &arguments).await
            }
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_script_command(&self) -> GradleActionResult<()> {
        if InitScriptWriter::write_init_script(&self.home)? {
            log::info!("🚀 Resolved dependencies init script installed");
        } else {
            log::info!(
                "Init script already installed at {}",
                InitScriptWriter::script_path(&self.home).display()
            );
        }
        Ok(())
    }

    async fn execute_command(&self, root: Option<PathBuf>, json: bool, executable: &str, arguments: &[String]) -> GradleActionResult<i32> {
        let config = ConfigManager::load(&self.config_path)?;
        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(GradleActionError::config_error(&errors.join("; "), None));
        }

        let root = match root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };

        let executor = self.build_executor(&config);
        let result = executor.execute(executable, &root, arguments).await?;

        if let Some(url) = result.build_scan_url() {
            log::info!("🔗 Build scan: {}", url);
        }

        if let Some(output_file) = std::env::var_os(GITHUB_OUTPUT_ENV) {
            ActionOutputs::write_build_result(Path::new(&output_file), &result)?;
        }

        if json {
            println!("{}", serde_json::to_string(&result)?);
        }

        if result.succeeded() {
            log::info!("✅ Gradle build succeeded");
        } else {
            log::error!("❌ Gradle build failed with exit code {}", result.status());
        }

        Ok(result.status())
    }

    fn build_executor(&self, config: &Config) -> BuildExecutor {
        let cache_dir = config
            .cache
            .directory
            .clone()
            .unwrap_or_else(|| ConfigHelper::default_cache_directory(&self.home));
        let artifacts_dir = config
            .artifacts
            .directory
            .clone()
            .unwrap_or_else(|| ConfigHelper::default_artifacts_directory(&self.home));

        BuildExecutor::new(
            Arc::new(LocalDependencyCache::new(
                cache_dir.clone(),
                self.home.join(GRADLE_USER_HOME_DIR),
                config.cache.enabled,
            )),
            Arc::new(LocalConfigurationCache::new(cache_dir, config.cache.enabled)),
            Arc::new(ActionInputs::from_env(config.inputs.clone())),
            Arc::new(LocalArtifactStore::new(artifacts_dir)),
        )
    }
}
