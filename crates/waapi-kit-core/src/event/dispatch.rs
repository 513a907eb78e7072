use crate::{event::Event, gateway::Args, value::DecodeError};

///
/// Dispatch
///
/// Outcome of one raw notification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dispatch {
    /// No listeners; the payload was not decoded.
    Skipped,

    /// Decoded and delivered to this many listeners.
    Delivered(usize),
}

/// dispatch
/// Decode `payload` and emit it on `event`, unless nobody is listening.
pub fn dispatch<A>(
    event: &Event<A>,
    payload: &Args,
    decode: impl FnOnce(&Args) -> Result<A, DecodeError>,
) -> Result<Dispatch, DecodeError> {
    if !event.has_listeners() {
        return Ok(Dispatch::Skipped);
    }

    let args = decode(payload)?;

    Ok(Dispatch::Delivered(event.emit(&args)))
}
