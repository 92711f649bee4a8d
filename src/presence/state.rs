/// Presence State Management
///
/// Tracks the users connected to the current document.
/// The roster is replaced from each snapshot and updated by join/leave events.
use crate::protocol::ClientInfo;
use std::collections::HashMap;

/// Roster of users editing the current document
#[derive(Debug, Clone, Default)]
pub struct Presence {
    clients: HashMap<String, ClientInfo>,
}

impl Presence {
    /// Create an empty roster
    pub fn new() -> Self {
        Self {
            clients: HashMap::new(),
        }
    }

    /// Replace the roster with the users listed in a snapshot
    pub fn reset<I>(&mut self, clients: I)
    where
        I: IntoIterator<Item = ClientInfo>,
    {
        self.clients = clients
            .into_iter()
            .map(|client| (client.id.clone(), client))
            .collect();
    }

    /// Add or update a user
    pub fn join(&mut self, client: ClientInfo) {
        self.clients.insert(client.id.clone(), client);
    }

    /// Remove a user, returning their info if they were present
    pub fn leave(&mut self, client_id: &str) -> Option<ClientInfo> {
        self.clients.remove(client_id)
    }

    /// Get a specific user
    pub fn get(&self, client_id: &str) -> Option<&ClientInfo> {
        self.clients.get(client_id)
    }

    /// All users, in no particular order
    pub fn clients(&self) -> impl Iterator<Item = &ClientInfo> {
        self.clients.values()
    }

    /// Number of users (including ourselves, if the server listed us)
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Forget everyone (document switch)
    pub fn clear(&mut self) {
        self.clients.clear();
    }
}
