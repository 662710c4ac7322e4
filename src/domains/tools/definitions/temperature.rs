//! Temperature tool definition.
//!
//! Reports a random temperature reading. One call in ten returns a
//! physically impossible value from a fixed outlier set.

use futures::FutureExt;
use rand::Rng;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

/// Physically impossible readings used for fault injection. Includes a value
/// below absolute zero.
pub const OUTLIERS: [i32; 4] = [-50, 150, 999, -273];

/// Probability of taking the impossible-value path.
const OUTLIER_PROBABILITY: f64 = 0.1;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the temperature tool. The tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TemperatureParams {}

// ============================================================================
// Reading
// ============================================================================

/// A drawn temperature reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// A plausible reading in [0, 100].
    Nominal(i32),

    /// A reading taken from the outlier set.
    Outlier(i32),
}

impl Reading {
    /// Draw a reading from the given randomness source.
    ///
    /// The nominal value is drawn first and then discarded on the outlier
    /// path, keeping the two draws independent.
    pub fn draw(rng: &mut impl Rng) -> Self {
        let nominal = rng.gen_range(0..=100);

        if rng.gen_bool(OUTLIER_PROBABILITY) {
            Self::Outlier(OUTLIERS[rng.gen_range(0..OUTLIERS.len())])
        } else {
            Self::Nominal(nominal)
        }
    }

    /// The reported value in degrees Fahrenheit.
    pub fn value(self) -> i32 {
        match self {
            Self::Nominal(value) | Self::Outlier(value) => value,
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Temperature tool - returns a random, occasionally impossible reading.
pub struct TemperatureTool;

impl TemperatureTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "temperature";

    /// Tool description shown to clients. Does not mention the outliers.
    pub const DESCRIPTION: &'static str =
        "Get the current ambient temperature. Returns the current temperature in Fahrenheit.";

    /// Render the response for a given reading.
    pub fn render(reading: Reading) -> String {
        format!("Temperature: {}°F", reading.value())
    }

    /// Generate a response from the given randomness source.
    ///
    /// The diagnostic log records which path was taken; the response does
    /// not.
    pub fn generate(rng: &mut impl Rng) -> String {
        let reading = Reading::draw(rng);

        match reading {
            Reading::Outlier(value) => info!("Returning impossible temperature: {}°F", value),
            Reading::Nominal(value) => info!("Returning random temperature: {}°F", value),
        }

        Self::render(reading)
    }

    /// Execute the tool logic (for stdio transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute() -> CallToolResult {
        let response = Self::generate(&mut rand::thread_rng());
        CallToolResult::success(vec![Content::text(response)])
    }

    /// HTTP handler for this tool (for HTTP transport).
    ///
    /// The tool takes no arguments, so the payload is ignored. Cannot fail.
    pub fn http_handler(_arguments: serde_json::Value) -> serde_json::Value {
        let result = Self::execute();

        serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<TemperatureParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for stdio transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            async move { Ok(Self::execute()) }.boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_render_outlier() {
        assert_eq!(
            TemperatureTool::render(Reading::Outlier(OUTLIERS[2])),
            "Temperature: 999°F"
        );
    }

    #[test]
    fn test_render_nominal() {
        assert_eq!(
            TemperatureTool::render(Reading::Nominal(72)),
            "Temperature: 72°F"
        );
    }

    #[test]
    fn test_nominal_readings_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2000 {
            match Reading::draw(&mut rng) {
                Reading::Nominal(value) => assert!((0..=100).contains(&value)),
                Reading::Outlier(value) => assert!(OUTLIERS.contains(&value)),
            }
        }
    }

    #[test]
    fn test_outlier_fraction_near_ten_percent() {
        // The outlier set is disjoint from [0, 100], so counting set members
        // measures the outlier path exactly.
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 10_000;
        let outliers = (0..trials)
            .filter(|_| matches!(Reading::draw(&mut rng), Reading::Outlier(_)))
            .count();

        let fraction = outliers as f64 / trials as f64;
        assert!(
            (0.08..=0.12).contains(&fraction),
            "outlier fraction {} outside tolerance",
            fraction
        );
    }

    #[test]
    fn test_execute_returns_text() {
        let result = TemperatureTool::execute();
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.starts_with("Temperature: "));
        assert!(text.ends_with("°F"));
    }

    #[test]
    fn test_http_handler_ignores_arguments() {
        let value = TemperatureTool::http_handler(serde_json::json!({ "unit": "celsius" }));
        assert_eq!(value["isError"], false);
    }
}
