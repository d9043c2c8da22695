//! EKG anomaly detection with the reference pipeline parameters.
//!
//! Learns a dictionary of normal waveform shapes from a clean signal, zeroes
//! a short stretch to fake an anomaly, and reports where reconstruction
//! error spikes.
//!
//! Pass a path to a raw recording (little-endian 16-bit signed samples) to
//! analyze real data; without an argument a synthetic EKG-like signal is
//! generated.
//!
//! Run with: cargo run --release --example ekg_anomaly [-- path/to/data.dat]

use std::env;
use std::fs;

use wavedict_rs::{Detector, DetectorConfig};

const N_SAMPLES: usize = 1000;
const ANOMALY: std::ops::Range<usize> = 210..215;

/// Decode a raw recording of little-endian i16 samples.
fn read_samples(path: &str) -> Vec<f64> {
    let raw = fs::read(path).unwrap_or_else(|e| panic!("Cannot read {path}: {e}"));
    raw.chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f64)
        .collect()
}

/// Synthetic EKG-like beat train: Gaussian bumps for the P, QRS, and T
/// waves, repeated every 100 samples. The R spike sits at phase 12, so the
/// demonstration anomaly window [210, 215) zeroes a QRS complex.
fn synthetic_ekg(n: usize) -> Vec<f64> {
    let bump = |phase: f64, center: f64, amp: f64, width: f64| {
        let d = phase - center;
        amp * (-d * d / (2.0 * width * width)).exp()
    };
    (0..n)
        .map(|i| {
            let phase = (i % 100) as f64;
            bump(phase, 2.0, 0.15, 3.0)
                + bump(phase, 10.0, -0.1, 1.5)
                + bump(phase, 12.0, 1.0, 2.0)
                + bump(phase, 15.0, -0.2, 1.5)
                + bump(phase, 35.0, 0.3, 8.0)
        })
        .collect()
}

fn main() {
    let mut data = match env::args().nth(1) {
        Some(path) => {
            println!("Reading {path}...");
            read_samples(&path)
        }
        None => {
            println!("No input file given, generating a synthetic EKG...");
            synthetic_ekg(N_SAMPLES)
        }
    };
    data.truncate(N_SAMPLES);

    let mut config = DetectorConfig::new();
    config.seed = Some(42);
    let detector = Detector::new(config).expect("reference config is valid");

    println!("Fitting shape dictionary ({} clusters)...", detector.config().n_clusters);
    let clusterer = detector.fit(&data).expect("fit failed");

    // Fake an anomaly by zeroing a short stretch of the signal
    let mut anomalous = data.clone();
    for sample in &mut anomalous[ANOMALY] {
        *sample = 0.0;
    }

    println!("Reconstructing anomalous signal...");
    let detection = detector
        .detect(&anomalous, &clusterer)
        .expect("detect failed");

    println!(
        "Maximum reconstruction error was {:.1} at {}",
        detection.max_error, detection.max_error_index
    );
    println!(
        "98th percentile of reconstruction error was {:.1}",
        detection.error_percentile
    );
    println!(
        "(anomaly was injected at [{}, {}))",
        ANOMALY.start, ANOMALY.end
    );
}
