//! Session: binds the sync state machine to an editor and a transport
//!
//! The session owns no copy of the document. It reads the current text from
//! the [`EditorSurface`] when a remote operation has to be applied and writes
//! the result back, mapping the cursor through the same operation.
//!
//! Any engine or protocol failure marks the session out of sync and, unless
//! disabled in [`SessionConfig`], asks the server for a fresh snapshot once.
//! The next `doc` message resets all local state. Transport failures are left
//! to the reconnect path ([`Session::reconnected`]).

use super::config::SessionConfig;
use super::state::{Client, SyncState};
use crate::error::{Result, SyncError};
use crate::ot::{apply, transform_index, Operation, TextChange};
use crate::presence::Presence;
use crate::protocol::{decode_message, ClientInfo, ClientMessage, ServerMessage};
use crate::{DocumentID, Revision};
use std::time::Duration;

/// The text-editing widget the user types into
pub trait EditorSurface {
    /// Current document text
    fn content(&self) -> String;

    /// Cursor position in characters
    fn cursor(&self) -> usize;

    /// Replace the whole text without reporting it as a local edit
    fn replace(&mut self, content: String, cursor: usize);
}

/// Outbound half of the connection to the server
pub trait Transport {
    fn send(&mut self, msg: ClientMessage) -> Result<()>;
}

/// A client's participation in one collaborative document
#[derive(Debug)]
pub struct Session<E, T> {
    config: SessionConfig,
    client: Client,
    editor: E,
    transport: T,
    presence: Presence,
    out_of_sync: bool,
    last_server_error: Option<String>,
}

impl<E: EditorSurface, T: Transport> Session<E, T> {
    pub fn new(config: SessionConfig, editor: E, transport: T) -> Self {
        Self {
            config,
            client: Client::default(),
            editor,
            transport,
            presence: Presence::new(),
            out_of_sync: false,
            last_server_error: None,
        }
    }

    /// Request the snapshot of the configured document
    pub fn join(&mut self) -> Result<()> {
        log::debug!("joining document {}", self.config.doc_id);
        self.transport.send(ClientMessage::Join {
            doc_id: self.config.doc_id.clone(),
        })
    }

    /// Leave the current document and join another
    ///
    /// Unacknowledged local edits of the old document are dropped.
    pub fn switch_document(&mut self, doc_id: impl Into<DocumentID>) -> Result<()> {
        self.config.doc_id = doc_id.into();
        self.client.reset(0);
        self.presence.clear();
        self.out_of_sync = false;
        self.join()
    }

    /// The transport came back after a drop; re-join to get a fresh snapshot
    pub fn reconnected(&mut self) -> Result<()> {
        log::debug!(
            "reconnected in state {}, requesting snapshot",
            self.client.state().name()
        );
        self.join()
    }

    /// Register an edit the user already made in the editor
    pub fn local_edit(&mut self, op: Operation) -> Result<()> {
        let result = self
            .client
            .apply_client(op)
            .and_then(|outgoing| match outgoing {
                Some(op) => self.send_op(op),
                None => Ok(()),
            });

        if let Err(err) = &result {
            self.mark_out_of_sync(err);
        }
        result
    }

    /// Register a raw editor change; the editor already shows its result
    pub fn local_change(&mut self, change: &TextChange) -> Result<()> {
        let after = self.editor.content().chars().count();
        let base_len = (after + change.removed).saturating_sub(change.inserted.chars().count());
        self.local_edit(Operation::from_change(change, base_len))
    }

    /// Decode and handle one inbound wire message
    pub fn receive(&mut self, text: &str) -> Result<()> {
        match decode_message::<ServerMessage>(text) {
            Ok(msg) => self.handle_message(msg),
            Err(err) => {
                self.mark_out_of_sync(&err);
                Err(err)
            }
        }
    }

    /// Handle one inbound message
    pub fn handle_message(&mut self, msg: ServerMessage) -> Result<()> {
        log::trace!(
            "{} message in state {} at revision {}",
            msg.kind(),
            self.client.state().name(),
            self.client.revision()
        );

        let result = self.dispatch(msg);
        if let Err(err) = &result {
            self.mark_out_of_sync(err);
        }
        result
    }

    fn dispatch(&mut self, msg: ServerMessage) -> Result<()> {
        match msg {
            ServerMessage::Doc {
                revision,
                content,
                clients,
            } => {
                self.load_snapshot(revision, content, clients);
                Ok(())
            }
            ServerMessage::Ack { revision } => match self.client.server_ack(revision) {
                Some(buffered) => self.send_op(buffered),
                None => Ok(()),
            },
            ServerMessage::Op { op, revision } => {
                let to_apply = self.client.apply_server(op)?;
                self.apply_to_editor(&to_apply)?;
                if self.client.revision() != revision {
                    log::debug!(
                        "adopting server revision {} (local count {})",
                        revision,
                        self.client.revision()
                    );
                    self.client.set_revision(revision);
                }
                Ok(())
            }
            ServerMessage::Join {
                client_id,
                name,
                color,
            } => {
                self.presence.join(ClientInfo {
                    id: client_id,
                    name,
                    color,
                });
                Ok(())
            }
            ServerMessage::Leave { client_id } => {
                self.presence.leave(&client_id);
                Ok(())
            }
            ServerMessage::Error { message } => {
                log::error!("server error on {}: {}", self.config.doc_id, message);
                self.last_server_error = Some(message);
                Ok(())
            }
        }
    }

    fn load_snapshot(&mut self, revision: Revision, content: String, clients: Vec<ClientInfo>) {
        if !matches!(self.client.state(), SyncState::Synchronized) {
            log::debug!(
                "snapshot at revision {} discards local state {}",
                revision,
                self.client.state().name()
            );
        }

        let cursor = self.editor.cursor().min(content.chars().count());
        self.client.reset(revision);
        self.editor.replace(content, cursor);
        self.presence.reset(clients);
        self.out_of_sync = false;
    }

    fn apply_to_editor(&mut self, op: &Operation) -> Result<()> {
        let content = apply(&self.editor.content(), op)?;
        let cursor = transform_index(self.editor.cursor(), op);
        self.editor.replace(content, cursor);
        Ok(())
    }

    fn send_op(&mut self, op: Operation) -> Result<()> {
        self.transport.send(ClientMessage::Op {
            doc_id: self.config.doc_id.clone(),
            revision: self.client.revision(),
            op,
        })
    }

    fn mark_out_of_sync(&mut self, err: &SyncError) {
        if !err.requires_resync() {
            return;
        }

        log::warn!("document {} out of sync: {}", self.config.doc_id, err);
        let newly = !self.out_of_sync;
        self.out_of_sync = true;

        // One join per episode; the snapshot clears the flag
        if newly && self.config.resync_on_error {
            if let Err(send_err) = self.join() {
                log::error!("resync request failed: {}", send_err);
            }
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn doc_id(&self) -> &str {
        &self.config.doc_id
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn state(&self) -> &SyncState {
        self.client.state()
    }

    pub fn revision(&self) -> Revision {
        self.client.revision()
    }

    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    /// True between an engine failure and the next snapshot
    pub fn is_out_of_sync(&self) -> bool {
        self.out_of_sync
    }

    /// Message of the most recent server `error`
    pub fn last_server_error(&self) -> Option<&str> {
        self.last_server_error.as_deref()
    }

    pub fn reconnect_delay(&self) -> Duration {
        self.config.reconnect_delay()
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
