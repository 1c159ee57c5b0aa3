//! Scenario runner
//!
//! Runs every scenario once per configured style, sequentially. A mismatch,
//! or a value that could not be compared at all, is recorded and the run
//! moves on to the next scenario.

use structeq_core::{CompareOptions, CompareResult, ComparisonResult};
use structeq_models::Fixtures;
use tracing::{debug, info, warn};

use crate::config::HarnessConfig;
use crate::scenario::Scenario;
use crate::style::AssertionStyle;

/// Outcome of one scenario under one style
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub scenario: Scenario,
    pub style: AssertionStyle,
    pub result: ComparisonResult,
    /// Why the values could not be compared, if they could not
    pub error: Option<String>,
}

impl ScenarioResult {
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.result.passed
    }

    /// Print a summary line, followed by every difference on failure
    pub fn print_summary(&self) {
        if let Some(error) = &self.error {
            println!("❌ [{:>6}] {} - ERROR", self.style, self.scenario);
            println!("   {}", error);
        } else if self.passed() {
            println!("✅ [{:>6}] {} - PASS", self.style, self.scenario);
        } else {
            println!(
                "❌ [{:>6}] {} - FAIL ({} differences)",
                self.style,
                self.scenario,
                self.result.differences.len()
            );
            for diff in &self.result.differences {
                println!("   {}", diff);
            }
        }
    }
}

/// Harness that owns the fixtures and collects results
pub struct Harness {
    pub config: HarnessConfig,
    fixtures: Fixtures,
    options: CompareOptions,
    results: Vec<ScenarioResult>,
}

impl Harness {
    /// Create a harness with freshly built fixtures
    pub fn new(config: HarnessConfig) -> Self {
        Self::with_fixtures(config, Fixtures::new())
    }

    pub fn with_fixtures(config: HarnessConfig, fixtures: Fixtures) -> Self {
        let options = config.compare_options();
        Self {
            config,
            fixtures,
            options,
            results: Vec::new(),
        }
    }

    /// Run every scenario for every configured style
    pub fn run_all(&mut self) {
        info!(
            styles = self.config.styles.len(),
            scenarios = Scenario::ALL.len(),
            should_fail = self.config.should_fail,
            "running equality scenarios"
        );

        let styles = self.config.styles.clone();
        for style in styles {
            self.run_style(style);
        }
    }

    /// Run every scenario for one style
    pub fn run_style(&mut self, style: AssertionStyle) {
        debug!(%style, "running style");
        for scenario in Scenario::ALL {
            self.run(scenario, style);
        }
    }

    /// Run one scenario under one style and record the outcome
    pub fn run(&mut self, scenario: Scenario, style: AssertionStyle) -> &ScenarioResult {
        let outcome = scenario.run(style, &self.fixtures, self.config.should_fail, &self.options);
        self.record(scenario, style, outcome)
    }

    fn record(
        &mut self,
        scenario: Scenario,
        style: AssertionStyle,
        outcome: CompareResult<ComparisonResult>,
    ) -> &ScenarioResult {
        let (result, error) = match outcome {
            Ok(result) => {
                if result.passed {
                    debug!(%style, %scenario, "passed");
                } else {
                    warn!(
                        %style,
                        %scenario,
                        differences = result.differences.len(),
                        "values differ"
                    );
                }
                (result, None)
            }
            Err(e) => {
                warn!(%style, %scenario, error = %e, "values could not be compared");
                let result = ComparisonResult {
                    label: scenario.name().to_string(),
                    passed: false,
                    differences: Vec::new(),
                };
                (result, Some(e.to_string()))
            }
        };

        self.results.push(ScenarioResult {
            scenario,
            style,
            result,
            error,
        });
        &self.results[self.results.len() - 1]
    }

    pub fn results(&self) -> &[ScenarioResult] {
        &self.results
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    /// Check if every recorded scenario passed
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(ScenarioResult::passed)
    }

    /// Print summary of all results
    pub fn print_summary(&self) {
        println!("\n=== Equality Scenario Summary ===");
        println!(
            "Styles: {}",
            self.config
                .styles
                .iter()
                .map(AssertionStyle::name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Mismatch injection: {}", self.config.should_fail);

        let mut current = None;
        for result in &self.results {
            if current != Some(result.style) {
                println!("\n--- {} ---", result.style);
                current = Some(result.style);
            }
            result.print_summary();
        }

        let passed = self.passed_count();
        let total = self.results.len();
        println!();
        println!("Results: {}/{} passed", passed, total);

        if passed == total {
            println!("✅ All scenarios passed!");
        } else {
            println!("❌ {} scenarios failed", total - passed);
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(HarnessConfig::default())
    }
}
