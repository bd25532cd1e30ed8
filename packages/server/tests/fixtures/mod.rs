//! Test server harness for integration tests.

use std::net::TcpStream;
use std::thread;
use std::time::Duration;

use vakil_server::Config;

/// A relay instance running on a background runtime for the duration of a
/// test process.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Start the relay on the given port.
    ///
    /// Upstream model URLs point at an unreachable local port, so analysis
    /// requests exercise the raw-text fallback deterministically and the
    /// proxy endpoint fails fast.
    pub fn start(port: u16) -> Self {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port,
            hf_keyword_model_url: "http://127.0.0.1:9/models/keywords".to_string(),
            hf_search_model_url: "http://127.0.0.1:9/models/search".to_string(),
            hf_token: None,
            upstream_timeout_secs: 1,
            typing_timeout_secs: None,
        };

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("failed to build runtime");
            runtime.block_on(async move {
                if let Err(e) = vakil_server::run(config).await {
                    eprintln!("test server exited: {e}");
                }
            });
        });

        let server = Self { port };
        server.wait_until_ready();
        server
    }

    fn wait_until_ready(&self) {
        for _ in 0..100 {
            if TcpStream::connect(("127.0.0.1", self.port)).is_ok() {
                return;
            }
            thread::sleep(Duration::from_millis(20));
        }
        panic!("test server did not come up on port {}", self.port);
    }

    #[allow(dead_code)] // each test binary uses a subset of the harness
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    #[allow(dead_code)]
    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }
}
