/// Presence - Who else is editing this document
///
/// Unlike document operations, presence is ephemeral:
/// - Full roster arrives with every document snapshot
/// - Incremental `join`/`leave` events keep it current
/// - Nothing is transformed, acknowledged, or persisted
///
/// Rendering the roster is left to the embedding application.
mod state;

pub use state::Presence;
