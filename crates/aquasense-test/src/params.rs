//! Regression test parameters and comparisons

use aquasense_core::{FloatMap, Raster};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare and record failures (default)
    #[default]
    Compare,
    /// Run and log without failing the suite
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable.
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test state: name, running index, mode and recorded failures.
pub struct RegParams {
    /// Name of the test (e.g. "dehaze")
    pub test_name: String,
    /// Current comparison index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters for `test_name`.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index
    pub fn index(&self) -> usize {
        self.index
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        if self.mode != RegTestMode::Display {
            self.failures.push(msg);
            self.success = false;
        }
    }

    /// Compare two floating-point values within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            self.record_failure(format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two rasters byte for byte.
    pub fn compare_rasters(&mut self, a: &Raster, b: &Raster) -> bool {
        self.index += 1;

        if a.dimensions() != b.dimensions() {
            self.record_failure(format!(
                "Failure in {}_reg: raster comparison for index {} - dimension mismatch",
                self.test_name, self.index
            ));
            return false;
        }

        if a.data() != b.data() {
            self.record_failure(format!(
                "Failure in {}_reg: raster comparison for index {} - pixel mismatch",
                self.test_name, self.index
            ));
            return false;
        }

        true
    }

    /// Compare two float maps pointwise within `delta`.
    pub fn compare_maps(&mut self, a: &FloatMap, b: &FloatMap, delta: f32) -> bool {
        self.index += 1;

        if a.dimensions() != b.dimensions() {
            self.record_failure(format!(
                "Failure in {}_reg: map comparison for index {} - dimension mismatch",
                self.test_name, self.index
            ));
            return false;
        }

        for (i, (va, vb)) in a.data().iter().zip(b.data()).enumerate() {
            if (va - vb).abs() > delta {
                self.record_failure(format!(
                    "Failure in {}_reg: map comparison for index {} - \
                     value mismatch at {}: {} vs {} (delta {})",
                    self.test_name, self.index, i, va, vb, delta
                ));
                return false;
            }
        }

        true
    }

    /// Mean absolute per-channel difference between two rasters, on the
    /// 8-bit scale. Dimension mismatches count as a failed comparison and
    /// return infinity.
    pub fn mean_abs_diff(&mut self, a: &Raster, b: &Raster) -> f64 {
        if a.dimensions() != b.dimensions() {
            self.index += 1;
            self.record_failure(format!(
                "Failure in {}_reg: mean_abs_diff for index {} - dimension mismatch",
                self.test_name, self.index
            ));
            return f64::INFINITY;
        }

        let total: f64 = a
            .data()
            .iter()
            .zip(b.data())
            .map(|(x, y)| (*x as f64 - *y as f64).abs())
            .sum();
        total / a.data().len() as f64
    }

    /// Clean up and report results. Returns `true` if every comparison
    /// passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
