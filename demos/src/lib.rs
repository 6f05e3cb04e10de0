//! Runnable demos live under `examples/`:
//!
//! - `answer-server` answers offers POSTed to `/offer` by echoing them back.
//! - `offer-client` pins codecs in an offer and exchanges it with such a server.
