use garde::Validate;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Json},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::{ServerConfig, MAX_POINTS_LIMIT, MIN_POINTS};
use crate::engine::types::{LegSpec, DEFAULT_SPOT_PRICE, DEFAULT_SPOT_RANGE};
use crate::strategies::DEFAULT_STRATEGY;
use crate::tools;
use crate::tools::response_types::{PayoffResponse, StrategiesResponse};

#[derive(Clone)]
pub struct PayoffServer {
    pub config: Arc<ServerConfig>,
    tool_router: ToolRouter<Self>,
}

impl PayoffServer {
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }

    fn max_points(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.config.max_points)
            .clamp(MIN_POINTS, MAX_POINTS_LIMIT)
    }
}

/// Axum router serving MCP over streamable HTTP at `/mcp`, plus `/health`.
pub fn http_app(config: Arc<ServerConfig>) -> axum::Router {
    use rmcp::transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpServerConfig, StreamableHttpService,
    };

    let service = StreamableHttpService::new(
        move || Ok(PayoffServer::new(config.clone())),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    axum::Router::new()
        .nest_service("/mcp", service)
        .route("/health", axum::routing::get(|| async { "ok" }))
}

#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct ComputePayoffParams {
    /// Strategy legs, e.g. `{ "instrument": "option", "trade": "short",
    /// "option_type": "call", "strike": 110, "premium": 2, "contracts": 1 }`
    /// or `{ "instrument": "underlying", "trade": "long", "entry_price": 100 }`
    #[garde(length(min = 1, max = 50))]
    pub legs: Vec<LegSpec>,
    /// Reference price the grid is centered on (default 100)
    #[garde(inner(range(min = 0.0001)))]
    pub spot_price: Option<f64>,
    /// Grid half-width in percent of spot (default 20)
    #[garde(inner(range(min = 0.01, max = 100.0)))]
    pub spot_range: Option<f64>,
    /// Number of curve points to return (default 200)
    #[garde(inner(range(min = 2, max = 5000)))]
    pub max_points: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema, Validate)]
pub struct StrategyPayoffParams {
    /// Preset name from list_strategies (e.g. '`iron_condor`'); defaults to
    /// '`covered_short_strangle`'
    #[garde(inner(length(min = 1), pattern(r"^[a-z0-9_]+$")))]
    pub strategy: Option<String>,
    /// Reference price the grid is centered on (default 100)
    #[garde(inner(range(min = 0.0001)))]
    pub spot_price: Option<f64>,
    /// Grid half-width in percent of spot (default 20)
    #[garde(inner(range(min = 0.01, max = 100.0)))]
    pub spot_range: Option<f64>,
    /// Number of curve points to return (default 200)
    #[garde(inner(range(min = 2, max = 5000)))]
    pub max_points: Option<usize>,
}

use rmcp::handler::server::wrapper::Parameters;

#[tool_router]
impl PayoffServer {
    /// Browse the built-in strategy presets grouped by category.
    ///
    /// **When to use**: To pick a starting point before strategy_payoff
    /// **Prerequisites**: None
    /// **Categories**: singles, covered, spreads, butterflies, condors, iron
    /// **Next tool**: strategy_payoff() with a preset name
    #[tool(name = "list_strategies")]
    async fn list_strategies(&self) -> Json<StrategiesResponse> {
        Json(tools::strategies::execute())
    }

    /// Compute the expiry payoff profile of custom strategy legs.
    ///
    /// **When to use**: To model any mix of option and underlying positions
    /// **Prerequisites**: None
    /// **Leg fields**:
    ///   - instrument: "option" | "underlying" (required)
    ///   - trade: "long" | "short" (required)
    ///   - option_type: "call" | "put" (options only, required)
    ///   - strike (options only, required), premium (default 0)
    ///   - entry_price (underlying only, default spot_price)
    ///   - contracts (default 1)
    /// **Output**:
    ///   - Max profit / max loss within the grid and where they occur
    ///   - Breakeven prices and payoff at spot
    ///   - Down-sampled curve of { price, legs[], total } for plotting
    #[tool(name = "compute_payoff")]
    async fn compute_payoff(
        &self,
        Parameters(params): Parameters<ComputePayoffParams>,
    ) -> Result<Json<PayoffResponse>, String> {
        params
            .validate()
            .map_err(|e| format!("Validation error: {e}"))?;
        tools::payoff::execute(
            &params.legs,
            params.spot_price.unwrap_or(DEFAULT_SPOT_PRICE),
            params.spot_range.unwrap_or(DEFAULT_SPOT_RANGE),
            self.max_points(params.max_points),
        )
        .map(Json)
        .map_err(|e| format!("Error: {e}"))
    }

    /// Compute the expiry payoff profile of a named preset strategy.
    ///
    /// **When to use**: After list_strategies, to inspect a textbook strategy
    /// **Prerequisites**: None
    /// Strikes and premiums are scaled to spot_price, so the same preset works
    /// for any underlying.
    /// **Next tool**: compute_payoff() to tweak individual legs
    #[tool(name = "strategy_payoff")]
    async fn strategy_payoff(
        &self,
        Parameters(params): Parameters<StrategyPayoffParams>,
    ) -> Result<Json<PayoffResponse>, String> {
        params
            .validate()
            .map_err(|e| format!("Validation error: {e}"))?;
        tools::payoff::execute_preset(
            params.strategy.as_deref().unwrap_or(DEFAULT_STRATEGY),
            params.spot_price.unwrap_or(DEFAULT_SPOT_PRICE),
            params.spot_range.unwrap_or(DEFAULT_SPOT_RANGE),
            self.max_points(params.max_points),
        )
        .map(Json)
        .map_err(|e| format!("Error: {e}"))
    }
}

#[tool_handler]
impl ServerHandler for PayoffServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: rmcp::model::ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "payoff-mcp".into(),
                title: None,
                version: "0.1.0".into(),
                description: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Options strategy payoff engine. Computes profit/loss at expiry across a \
                grid of underlying prices for any mix of option and underlying legs.\
                \n\nTypical workflow:\
                \n1. list_strategies(): browse presets (singles, covered, spreads, \
                butterflies, condors, iron).\
                \n2. strategy_payoff({ strategy?, spot_price?, spot_range? }): payoff \
                profile of a preset, scaled to the given spot. Without a strategy name \
                the covered_short_strangle example is used.\
                \n3. compute_payoff({ legs, spot_price?, spot_range?, max_points? }): \
                payoff profile of custom legs.\
                \n\nThe grid spans spot * (100 - spot_range)% to spot * (100 + spot_range)% \
                in steps of 0.01% of spot. Responses include max profit, max loss, \
                breakevens, payoff at spot and a down-sampled curve for charting."
                    .into(),
            ),
        }
    }
}
