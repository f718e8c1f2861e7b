use crate::{
    client::aoc::AoC,
    core::{
        commands::{SlashCommand, USER_ID_OPTION},
        interaction::{CommandData, Interaction, InteractionResponse, InteractionType, MessageData},
        leaderboard::LeaderboardSnapshot,
        render::{self, RenderedPayload},
        signature::{SignatureVerifier, SIGNATURE_HEADER, TIMESTAMP_HEADER},
        templates::MessageTemplate,
    },
    error::{BotError, BotResult},
};
use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, info};

/// State shared by the interaction handlers.
#[derive(Clone)]
pub struct AppState {
    aoc: Arc<AoC>,
    verifier: Arc<SignatureVerifier>,
    year: i32,
    application_id: u64,
}

impl AppState {
    pub fn new(aoc: AoC, verifier: SignatureVerifier, year: i32, application_id: u64) -> Self {
        Self {
            aoc: Arc::new(aoc),
            verifier: Arc::new(verifier),
            year,
            application_id,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check).post(interactions))
        .fallback(not_found)
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> String {
    format!("👋 {}", state.application_id)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found.")
}

// https://discord.com/developers/docs/interactions/receiving-and-responding#security-and-authorization
fn verify_request(verifier: &SignatureVerifier, headers: &HeaderMap, body: &[u8]) -> BotResult<()> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| BotError::Signature(format!("Missing {name} header")))
    };
    verifier.verify(header(SIGNATURE_HEADER)?, header(TIMESTAMP_HEADER)?, body)
}

async fn interactions(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    if let Err(e) = verify_request(&state.verifier, &headers, &body) {
        error!("Invalid Request. {e}");
        return (StatusCode::UNAUTHORIZED, "Bad request signature.").into_response();
    }

    let interaction = match serde_json::from_slice::<Interaction>(&body) {
        Ok(interaction) => interaction,
        Err(e) => {
            error!("Malformed interaction. {e}");
            return client_error("Malformed interaction");
        }
    };
    debug!("{interaction:?}");

    match (interaction.kind, interaction.data) {
        (InteractionType::Ping, _) => {
            info!("Handling Ping request");
            Json(InteractionResponse::pong()).into_response()
        }
        (InteractionType::ApplicationCommand, Some(data)) => dispatch(&state, &data).await,
        _ => {
            error!("Unknown Type");
            client_error("Unknown Type")
        }
    }
}

async fn dispatch(state: &AppState, data: &CommandData) -> Response {
    let command = match SlashCommand::from_name(&data.name) {
        Some(command) => command,
        None => {
            error!("Unknown Command '{}'", data.name);
            return client_error("Unknown Command");
        }
    };
    info!("handling {} request", command.name());

    let rendered = match command {
        SlashCommand::Invite => return invite(state.application_id),
        SlashCommand::Leaderboard => {
            let link = state.aoc.private_leaderboard_page(state.year);
            fetch_and_render(state, |snapshot| render::leaderboard(snapshot, state.year, &link)).await
        }
        SlashCommand::Stats => {
            let user_id = match data.string_option(USER_ID_OPTION) {
                Some(user_id) => user_id,
                None => return client_error("Missing option user_id"),
            };
            fetch_and_render(state, |snapshot| render::stats(snapshot, user_id)).await
        }
        SlashCommand::Users => fetch_and_render(state, render::users).await,
    };

    match rendered {
        Ok(payload) => message(MessageData::components(payload.into_components())),
        Err(e) => {
            error!("Could not answer {} command. {e}", command.name());
            match MessageTemplate::LeaderboardUnavailable.render(()) {
                Ok(text) => message(MessageData::ephemeral(text)),
                Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            }
        }
    }
}

async fn fetch_and_render<F>(state: &AppState, render: F) -> BotResult<RenderedPayload>
where
    F: FnOnce(&LeaderboardSnapshot) -> BotResult<RenderedPayload>,
{
    let snapshot = state.aoc.private_leaderboard(state.year).await?;
    render(&snapshot)
}

fn invite(application_id: u64) -> Response {
    let invite_url = format!(
        "https://discord.com/oauth2/authorize?client_id={}&scope=applications.commands",
        application_id
    );
    message(MessageData::ephemeral(invite_url))
}

fn message(data: MessageData) -> Response {
    Json(InteractionResponse::message(data)).into_response()
}

fn client_error(reason: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": reason }))).into_response()
}
