
/// Initializes `env_logger` once per test binary.
///
/// The log level is taken from `RUST_LOG` and defaults to `info`.
pub fn init_logging() {
    // fails if a logger is already installed, which is fine
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .is_test(true)
        .try_init();
}

pub mod prelude {
    pub use super::assertions::*;
    pub use super::config::TestConfig;
    pub use super::jsonpath::FieldPath;
    pub use super::kube::*;
    pub use super::kubevirt::*;
    pub use super::namespace::*;
    pub use super::temporary_resource::*;
    pub use super::template::*;
    pub use super::virtctl::*;
    pub use super::init_logging;

    pub use indoc::indoc;
    pub use k8s_openapi::api::core::v1::PersistentVolumeClaim;
    pub use spectral::prelude::*;
}
