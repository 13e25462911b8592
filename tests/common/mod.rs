// tests/common/mod.rs

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Fresh, empty scratch directory for one test.
pub fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "zetasdr_plot_{}_{}",
        test_name,
        std::process::id()
    ));
    if dir.exists() {
        fs::remove_dir_all(&dir).expect("failed to clear scratch dir");
    }
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write test input");
    path
}

/// A ZetaSDR result file: heading line plus `rows` data rows, 100 ns apart.
pub fn zetasdr_file(rows: usize) -> String {
    let mut text = String::from(
        "# timestep, time, signal, modulation, C2, C3, C4, C5, IC2A, IC2B, \
         filteredInphase, filteredQuadrature, demodulated\n",
    );
    for i in 0..rows {
        let t = (i + 1) as f64 * 1e-7;
        let s = (i as f64 * 0.7).sin();
        text.push_str(&format!(
            "{},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e}\n",
            (i + 1) * 10,
            t,
            2.5 + 1e-3 * s,
            1e-3,
            2.5 + 1e-4 * s,
            2.5 - 1e-4 * s,
            2.5 + 2e-4 * s,
            2.5 - 2e-4 * s,
            2e-4 * s,
            4e-4 * s,
            1e-4 * s,
            -1e-4 * s,
            1.4e-4 * s.abs(),
        ));
    }
    text
}

/// An I/Q mixer result file: heading line plus `rows` data rows.
pub fn iq_mixer_file(rows: usize) -> String {
    let mut text = String::from(
        "# timesteps, time, signal, localOsc, modulation, inphase, quadrature, \
         filteredInphase, filteredQuadrature, demodulated\n",
    );
    for i in 0..rows {
        let t = (i + 1) as f64 * 1e-7;
        let s = (i as f64 * 0.3).sin();
        let c = (i as f64 * 0.3).cos();
        text.push_str(&format!(
            "{},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e},{:.9e}\n",
            (i + 1) * 10,
            t,
            1e-3 * s,
            i as f64 * 0.3,
            1e-3,
            1e-3 * s * s,
            1e-3 * s * c,
            5e-4,
            2e-4,
            5.4e-4,
        ));
    }
    text
}

pub fn file_len(path: &Path) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
