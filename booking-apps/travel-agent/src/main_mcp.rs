//!  Booking Travel Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Unified MCP Server Entry Point
//!
//! Supports stdio and streamable HTTP transports via subcommand.

use anyhow::{Context, Error, Result};
use booking_travel_agent::{
    ApiConfig, DEFAULT_ADULTS, ErrorEnvelope, HotelSearchParams, RapidApiClient,
};
use clap::{Parser, Subcommand};
use rmcp::handler::server::{ServerHandler, tool::ToolRouter, wrapper::Parameters};
use rmcp::service::serve_server;
use rmcp::tool;
use rmcp::tool_router;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "Booking.com-mcp-server";

#[derive(Parser, Debug)]
#[command(name = "booking-travel-mcp")]
#[command(
    author,
    version,
    about = "MCP server for Booking.com destination and hotel search"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run MCP server over stdio (for Claude Desktop, etc.)
    Stdio,

    /// Run MCP server over HTTP
    Http {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        #[arg(long, default_value = "9000")]
        port: u16,
    },
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct DestinationsInput {
    /// City, country, area or region name
    pub query: String,
}

fn default_adults() -> u32 {
    DEFAULT_ADULTS
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct HotelsInput {
    /// Destination id as returned by search_destinations
    pub destination_id: String,
    /// Future date, YYYY-MM-DD
    pub checkin_date: String,
    /// Future date, YYYY-MM-DD
    pub checkout_date: String,
    #[serde(default = "default_adults")]
    pub adults: u32,
}

#[derive(Clone)]
pub struct BookingAgentServer {
    tool_router: ToolRouter<Self>,
}

impl BookingAgentServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    // One client per tool call, configured from the environment at that
    // point and released when the call returns
    fn client(&self) -> Result<RapidApiClient, ErrorEnvelope> {
        RapidApiClient::from_env()
    }
}

/// Items are returned as a JSON array; envelopes as-is with the error flag set.
fn into_tool_result<T: Serialize>(
    tool: &str,
    outcome: Result<Vec<T>, ErrorEnvelope>,
) -> Result<String, String> {
    match outcome {
        Ok(items) => serde_json::to_string(&items).map_err(|e| e.to_string()),
        Err(envelope) => {
            tracing::error!("Error in {}: {}", tool, envelope.message());
            Err(envelope.to_json().to_string())
        }
    }
}

#[tool_router]
impl BookingAgentServer {
    #[tool(
        name = "search_destinations",
        description = "Search for hotel destinations by valid city, country, area, or region name.",
        annotations(title = "Search Destinations", read_only_hint = true, open_world_hint = false)
    )]
    async fn search_destinations(
        &self,
        params: Parameters<DestinationsInput>,
    ) -> Result<String, String> {
        let input = params.0;
        tracing::info!("func:search_destinations - query: {}", input.query);

        let outcome = match self.client() {
            Ok(client) => client.search_destinations(&input.query).await,
            Err(e) => Err(e),
        };
        into_tool_result("search_destinations", outcome)
    }

    #[tool(
        name = "get_hotels",
        description = "Get hotels for a specific destination. checkin_date and checkout_date are required fields and should be future dates. If required arguments are not provided, respond back to provide them. If no hotels appear in search results, try searching for future dates.",
        annotations(title = "Fetch Hotels", read_only_hint = true, open_world_hint = false)
    )]
    async fn get_hotels(&self, params: Parameters<HotelsInput>) -> Result<String, String> {
        let input = params.0;
        tracing::info!(
            "func:get_hotels - destination_id: {}, checkin: {}, checkout: {}, adults: {}",
            input.destination_id,
            input.checkin_date,
            input.checkout_date,
            input.adults
        );

        let params = HotelSearchParams::new(
            input.destination_id,
            input.checkin_date,
            input.checkout_date,
        )
        .adults(input.adults);

        let outcome = match self.client() {
            Ok(client) => client.search_hotels(&params).await,
            Err(e) => Err(e),
        };
        into_tool_result("get_hotels", outcome)
    }
}

impl ServerHandler for BookingAgentServer {
    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl Future<Output = Result<rmcp::model::ListToolsResult, rmcp::ErrorData>> + Send + '_
    {
        tracing::debug!(
            "list_tools called, tools count: {}",
            self.tool_router.list_all().len()
        );
        Box::pin(async move {
            let tools = self.tool_router.list_all();
            Ok(rmcp::model::ListToolsResult::with_all_items(tools))
        })
    }

    fn call_tool(
        &self,
        request: rmcp::model::CallToolRequestParam,
        context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl Future<Output = Result<rmcp::model::CallToolResult, rmcp::ErrorData>> + Send + '_
    {
        let router = self.tool_router.clone();
        let self_clone = self.clone();
        Box::pin(async move {
            tracing::info!("--- tools/call {} ---", request.name);
            let context =
                rmcp::handler::server::tool::ToolCallContext::new(&self_clone, request, context);
            let response = router.call(context).await;
            if let Ok(result) = &response {
                tracing::debug!("tools/call is_error={:?}", result.is_error);
            }
            response
        })
    }

    fn get_info(&self) -> rmcp::model::ServerInfo {
        rmcp::model::ServerInfo {
            protocol_version: rmcp::model::ProtocolVersion::V_2025_03_26,
            capabilities: rmcp::model::ServerCapabilities {
                tools: Some(rmcp::model::ToolsCapability::default()),
                ..Default::default()
            },
            server_info: rmcp::model::Implementation::from_build_env(),
            instructions: Some("This server provides booking.com tools.".to_string()),
        }
    }
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({"status": "healthy", "service": SERVICE_NAME}))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Failed to load .env file");
        }
    }

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".to_string().into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .init();

    tracing::debug!("Parsing arguments...");
    let args = Args::parse();
    tracing::debug!("Parsed args: {:?}", args);

    let config = ApiConfig::from_env();
    if config.api_key.is_empty() || config.api_host.is_empty() {
        tracing::warn!("RAPIDAPI_KEY or RAPIDAPI_HOST is not set, upstream calls will be rejected");
    }
    tracing::debug!(
        "Upstream {} with {:?} timeout",
        config.base_url,
        config.timeout
    );

    match args.command {
        Command::Stdio => {
            eprintln!("Starting MCP server over stdio...");
            let server = BookingAgentServer::new();
            let (stdin, stdout) = rmcp::transport::io::stdio();
            let _running = serve_server(Arc::new(server), (stdin, stdout))
                .await
                .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;
            tracing::info!("MCP server started!");
            std::future::pending::<()>().await;
        }
        Command::Http { host, port } => {
            let addr: SocketAddr = format!("{}:{}", host, port)
                .parse()
                .context("Invalid host:port")?;
            tracing::info!("Starting MCP server over HTTP on {}", addr);
            let server = BookingAgentServer::new();
            let session_manager = Arc::new(LocalSessionManager::default());
            let server_config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..Default::default()
            };
            let service =
                StreamableHttpService::new(move || Ok(server.clone()), session_manager, server_config);
            let app = axum::Router::new()
                .route("/health", axum::routing::get(health_check))
                .nest_service("/mcp", service);
            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .context("Failed to bind to address")?;
            tracing::debug!("Listening on {}", addr);
            axum::serve(listener, app)
                .await
                .context("HTTP server error")?;
        }
    }

    Ok(())
}
