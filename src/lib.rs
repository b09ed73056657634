//! Integration tests for KubeVirt DataVolume provisioning
//!
//! ## Usage
//!
//! The tests need a cluster with KubeVirt and CDI installed, a
//! kubeconfig pointing to it and `virtctl` on the `PATH`:
//!
//! ```sh
//! cargo test -- --ignored
//! ```
//!
//! The cluster scenarios share one namespace and wait for each other,
//! so they also run one at a time without `--test-threads=1`.
//!
//! The environment variables read by
//! [`test::config::TestConfig::from_env`] change the namespace, the
//! template and output directories, the `virtctl` binary, an image
//! mirror and the timeouts. `RUST_LOG` controls the log output.
//!
//! ## Example
//!
//! The [`scenario::datavolume::DataVolumeScenario`] bundles a
//! [`test::kube::TestKubeClient`] with the configuration.
//! [`test::temporary_resource::TemporaryManifest`] deletes the created
//! resources if it goes out of scope which is also the case if a test
//! case panics.
//!
//! ```rust,no_run
//! use kubevirt_datavolume_tests::scenario::datavolume::*;
//!
//! let scenario = DataVolumeScenario::new();
//!
//! let _datavolume = scenario.render_and_apply(
//!     DATAVOLUME_TEMPLATE,
//!     "test-datavolume.json",
//!     &[
//!         String::from("DATAVOLUME_NAME=datavolume2"),
//!         format!("IMG_URL={}", scenario.image_url(CIRROS_IMAGE_URL)),
//!     ],
//! );
//! scenario.wait_for_pvc_bound("datavolume2");
//! ```

pub mod scenario;
pub mod test;
