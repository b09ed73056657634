use crate::test::prelude::{
    image_url, setup_namespace, DataVolume, ManifestTemplate, PersistentVolumeClaim,
    TemporaryManifest, TestConfig, TestKubeClient, VirtualMachineInstance, Virtctl,
    KUBEVIRT_API_VERSION, PVC_BIND_COMPLETED,
};

use anyhow::Result;
use log::info;
use std::path::PathBuf;

pub const DATAVOLUME_VM_TEMPLATE: &str = "datavolume-vm.yml";
pub const DATAVOLUME_VMI_TEMPLATE: &str = "datavolume-vmi.yml";
pub const DATAVOLUME_TEMPLATE: &str = "datavolume.yml";

/// Disk image imported by the DataVolumes
pub const CIRROS_IMAGE_URL: &str =
    "https://download.cirros-cloud.net/0.4.0/cirros-0.4.0-x86_64-disk.img";

pub const VM_RUNNING_PHASE: &str = "Running";

/// A wrapper to avoid passing in client, configuration and virtctl
/// everywhere.
pub struct DataVolumeScenario {
    pub client: TestKubeClient,
    pub config: TestConfig,
    pub virtctl: Virtctl,
}

impl DataVolumeScenario {
    /// Creates a scenario configured from the environment. The test
    /// namespace is created on first use.
    pub fn new() -> Self {
        let config = TestConfig::from_env().expect("Test configuration is invalid");
        Self::with_config(config)
    }

    pub fn with_config(config: TestConfig) -> Self {
        let mut client = TestKubeClient::new(&config.namespace);
        client.timeouts().verify_status = config.wait_timeout;
        setup_namespace(&client);

        DataVolumeScenario {
            client,
            virtctl: Virtctl::new(&config.virtctl, config.command_timeout),
            config,
        }
    }

    /// Returns the URL of the disk image, pointed to the configured
    /// mirror if there is one.
    pub fn image_url(&self, url: &str) -> String {
        image_url(url, self.config.image_mirror.as_deref())
    }

    /// Renders the template with the given `KEY=VALUE` parameters into
    /// the output directory.
    pub fn render<S: AsRef<str>>(
        &self,
        template: &str,
        destination: &str,
        params: &[S],
    ) -> PathBuf {
        ManifestTemplate::process(
            self.config.template(template),
            self.config.output(destination),
            params,
        )
        .expect("Template could not be processed")
    }

    /// Renders the template and creates its resources in the test
    /// namespace. The resources are deleted when the returned value is
    /// dropped.
    pub fn render_and_apply<S: AsRef<str>>(
        &self,
        template: &str,
        destination: &str,
        params: &[S],
    ) -> TemporaryManifest<'_> {
        let manifest = self.render(template, destination, params);
        TemporaryManifest::new(&self.client, manifest)
    }

    /// Waits until the claim of the DataVolume is bound.
    pub fn wait_for_pvc_bound(&self, name: &str) -> PersistentVolumeClaim {
        self.client.wait_until_field::<PersistentVolumeClaim>(
            name,
            "-o=jsonpath='{.metadata.annotations}'",
            &format!("{}:yes", PVC_BIND_COMPLETED),
        )
    }

    /// Waits until the DataVolume reaches the given phase, e.g. `Succeeded`.
    pub fn wait_for_datavolume_phase(&self, name: &str, phase: &str) -> DataVolume {
        self.client
            .wait_until_field::<DataVolume>(name, "{.status.phase}", phase)
    }

    /// Starts the virtual machine with `virtctl`.
    pub fn start_vm(&self, name: &str) {
        info!("Start VM [{}] with virtctl", name);
        self.try_start_vm(name).expect("virtctl start failed");
    }

    pub fn try_start_vm(&self, name: &str) -> Result<()> {
        self.virtctl.start(name, self.client.namespace())?;
        Ok(())
    }

    /// Waits until the virtual machine instance is running.
    pub fn wait_for_vmi_running(&self, name: &str) -> VirtualMachineInstance {
        self.client.wait_until_field::<VirtualMachineInstance>(
            name,
            "-o=jsonpath='{.status.phase}'",
            VM_RUNNING_PHASE,
        )
    }
}

impl Default for DataVolumeScenario {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameter selecting the KubeVirt API version of VM templates
pub fn vm_api_version_param() -> String {
    format!("VM_APIVERSION={}", KUBEVIRT_API_VERSION)
}
