use std::convert::Infallible;
use std::time::Duration;

use axum::http::header::HeaderName;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use futures::{Stream, StreamExt};

use crate::event::StreamEvent;

/// Create an SSE response from a stream of chat events.
///
/// Each event is written as its own frame as soon as it is produced. The
/// response stream owns the event stream, so a client disconnect drops it.
pub fn sse_response<S>(events: S, keep_alive: Duration) -> impl IntoResponse
where
    S: Stream<Item = StreamEvent> + Send + 'static,
{
    let event_stream = events.map(|event| Ok::<Event, Infallible>(event.to_sse()));

    (
        [(HeaderName::from_static("x-accel-buffering"), "no")],
        Sse::new(event_stream).keep_alive(KeepAlive::new().interval(keep_alive)),
    )
}
