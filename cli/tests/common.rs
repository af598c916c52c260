use once_cell::sync::Lazy;
use std::{env, ffi::OsStr, path::PathBuf, process::Command};
use wiremock::{Mock, MockServer};

/// Mock service driven from a background tokio runtime so the CLI process
/// under test can talk to it over plain HTTP.
pub struct MockApi {
    runtime: tokio::runtime::Runtime,
    server: MockServer,
}

impl MockApi {
    pub fn start() -> Self {
        let runtime = tokio::runtime::Runtime::new().expect("Could not start tokio runtime");
        let server = runtime.block_on(MockServer::start());
        MockApi { runtime, server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }
}

pub struct TestCli {
    cli_path: PathBuf,
}

impl TestCli {
    pub fn get() -> &'static Self {
        static TEST_CLI: Lazy<TestCli> = Lazy::new(|| {
            let cli_path = std::env::current_exe()
                .ok()
                .and_then(|path| Some(path.parent()?.parent()?.join("automl")))
                .expect("Could not resolve CLI executable from test executable");

            TestCli { cli_path }
        });

        &TEST_CLI
    }

    pub fn command(&self, api: &MockApi) -> Command {
        let mut command = Command::new(&self.cli_path);

        command
            .env_remove("AUTOML_PROJECT")
            .arg("--config-file")
            .arg(env::temp_dir().join("automl-test-contexts.json"))
            .arg("--endpoint")
            .arg(api.uri())
            .arg("--token")
            .arg("test-token")
            .arg("--project")
            .arg("test-project");

        command
    }

    pub fn run(
        &self,
        api: &MockApi,
        args: impl IntoIterator<Item = impl AsRef<OsStr>>,
    ) -> String {
        let output = self.command(api).args(args).output().unwrap();

        if !output.status.success() {
            panic!(
                "failed to run command:\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }

        String::from_utf8(output.stdout).unwrap()
    }

    /// Runs a command expected to fail, returning its captured
    /// (stdout, stderr).
    pub fn run_and_error(
        &self,
        api: &MockApi,
        args: impl IntoIterator<Item = impl AsRef<OsStr>>,
    ) -> (String, String) {
        let output = self.command(api).args(args).output().unwrap();

        if output.status.success() {
            panic!(
                "succeeded running command (expected failure):\n{}",
                String::from_utf8_lossy(&output.stdout)
            );
        }

        (
            String::from_utf8(output.stdout).unwrap(),
            String::from_utf8(output.stderr).unwrap(),
        )
    }
}
