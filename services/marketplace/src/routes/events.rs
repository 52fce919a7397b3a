//! New-listing event stream
//!
//! Server-sent events endpoint. Each connected client holds a broadcast
//! subscription; lagged or closed receivers are dropped from the stream
//! silently.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};

use crate::state::AppState;

/// Stream new-listing events to the client
pub async fn listing_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.notifier.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|event| {
        event
            .ok()
            .and_then(|event| Event::default().event("newProduct").json_data(&event).ok())
            .map(Ok)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
