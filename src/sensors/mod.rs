//! CPU/GPU temperature sensor detection
//!
//! Scans the sysfs hwmon tree for the best CPU and GPU temperature inputs,
//! falling back to thermal zones for whatever hwmon didn't provide. This
//! module shares nothing with the keybind parser.
//!
//! Output is one `kind:path` line per sensor found:
//!
//! ```text
//! cpu:/sys/devices/platform/coretemp.0/hwmon/hwmon3/temp1_input
//! gpu:/sys/devices/pci0000:00/0000:00:01.0/hwmon/hwmon5/temp1_input
//! ```

mod hwmon;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub use hwmon::{find_best_temp_input, label_score};

/// Default sysfs mount point
pub const SYSFS_ROOT: &str = "/sys";

/// hwmon driver names that report CPU temperatures
const CPU_DRIVERS: &[&str] = &[
    "coretemp",     // Intel
    "k10temp",      // AMD
    "zenpower",     // AMD
    "cpu_thermal",  // RPi/ARM
    "fam15h_power", // Old AMD
    "asus_ec",
];

/// hwmon driver names that report GPU temperatures
const GPU_DRIVERS: &[&str] = &["amdgpu", "radeon", "nouveau", "nvidia", "i915"];

/// Thermal zone type fragments for the fallback scan
const CPU_ZONE_TYPES: &[&str] = &["cpu", "x86_pkg_temp"];
const GPU_ZONE_TYPES: &[&str] = &["gpu"];

/// Detected temperature input files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorPaths {
    pub cpu: Option<PathBuf>,
    pub gpu: Option<PathBuf>,
}

impl SensorPaths {
    fn is_complete(&self) -> bool {
        self.cpu.is_some() && self.gpu.is_some()
    }

    /// Resolve symlinks so consumers watch the real device file
    fn canonicalized(self) -> Self {
        let resolve = |p: PathBuf| fs::canonicalize(&p).unwrap_or(p);
        Self {
            cpu: self.cpu.map(resolve),
            gpu: self.gpu.map(resolve),
        }
    }
}

impl fmt::Display for SensorPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(cpu) = &self.cpu {
            writeln!(f, "cpu:{}", cpu.display())?;
        }
        if let Some(gpu) = &self.gpu {
            writeln!(f, "gpu:{}", gpu.display())?;
        }
        Ok(())
    }
}

/// Detect CPU and GPU temperature inputs under `sysfs_root` (normally `/sys`)
pub fn detect(sysfs_root: &Path) -> SensorPaths {
    let mut found = SensorPaths::default();

    scan_hwmon(&sysfs_root.join("class/hwmon"), &mut found);
    if !found.is_complete() {
        scan_thermal_zones(&sysfs_root.join("class/thermal"), &mut found);
    }

    tracing::debug!(cpu = ?found.cpu, gpu = ?found.gpu, "Sensor detection finished");
    found.canonicalized()
}

fn scan_hwmon(class_dir: &Path, found: &mut SensorPaths) {
    for hwmon in sorted_entries(class_dir, "hwmon") {
        let name = hwmon::read_attr(&hwmon.join("name"));
        let Some(best) = find_best_temp_input(&hwmon) else {
            continue;
        };

        if CPU_DRIVERS.contains(&name.as_str()) {
            // First match wins, but a package sensor replaces anything else
            if found.cpu.is_none() || hwmon::input_label(&best).contains("package") {
                tracing::debug!("CPU sensor from {}: {}", name, best.display());
                found.cpu = Some(best.clone());
            }
        }

        if GPU_DRIVERS.contains(&name.as_str()) && found.gpu.is_none() {
            tracing::debug!("GPU sensor from {}: {}", name, best.display());
            found.gpu = Some(best);
        }
    }
}

fn scan_thermal_zones(class_dir: &Path, found: &mut SensorPaths) {
    for zone in sorted_entries(class_dir, "thermal_zone") {
        let zone_type = hwmon::read_attr(&zone.join("type")).to_lowercase();
        let temp = zone.join("temp");
        if !temp.exists() {
            continue;
        }

        if found.cpu.is_none() && CPU_ZONE_TYPES.iter().any(|t| zone_type.contains(t)) {
            tracing::debug!("CPU sensor from thermal zone {}", zone_type);
            found.cpu = Some(temp.clone());
        }

        if found.gpu.is_none() && GPU_ZONE_TYPES.iter().any(|t| zone_type.contains(t)) {
            tracing::debug!("GPU sensor from thermal zone {}", zone_type);
            found.gpu = Some(temp);
        }
    }
}

/// Entries of `dir` whose names start with `prefix`, sorted by path
fn sorted_entries(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        tracing::debug!("Cannot read {}", dir.display());
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(prefix))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();
    paths
}
