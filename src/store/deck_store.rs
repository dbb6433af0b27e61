//! Deck store implementation.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::{create_deck, Deck};
use crate::core::{Result, WarError};

/// Identifier of one game session's deck slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Staged writes against a [`DeckStore`].
///
/// Holds its own copy of the deck table. `im` maps share structure, so taking
/// the copy is O(1) and only touched entries are duplicated.
#[derive(Clone, Debug)]
pub struct DeckTransaction {
    decks: ImHashMap<SessionId, Deck>,
}

impl DeckTransaction {
    /// Create and store a fresh deck for `session`.
    ///
    /// Fails with [`WarError::DeckAlreadyExists`] if the session holds one.
    pub fn create_deck(&mut self, session: SessionId) -> Result<&Deck> {
        if self.decks.contains_key(&session) {
            return Err(WarError::DeckAlreadyExists { session });
        }
        self.decks.insert(session, create_deck());
        self.require(session)
    }

    /// Store `deck` for `session`, returning the deck it replaced.
    pub fn replace_deck(&mut self, session: SessionId, deck: Deck) -> Option<Deck> {
        self.decks.insert(session, deck)
    }

    /// Remove the deck of `session`.
    pub fn clear(&mut self, session: SessionId) -> Option<Deck> {
        self.decks.remove(&session)
    }

    #[must_use]
    pub fn deck(&self, session: SessionId) -> Option<&Deck> {
        self.decks.get(&session)
    }

    /// Like [`deck`](Self::deck) but fails with [`WarError::UnknownSession`].
    pub fn require(&self, session: SessionId) -> Result<&Deck> {
        self.decks
            .get(&session)
            .ok_or(WarError::UnknownSession { session })
    }
}

#[derive(Serialize, Deserialize)]
struct StoreSnapshot {
    next_session: u64,
    decks: Vec<(SessionId, Deck)>,
}

/// Decks keyed by session.
///
/// ## Usage
///
/// ```
/// use war_cards::store::DeckStore;
///
/// let mut store = DeckStore::new();
/// let session = store.open_session();
///
/// assert_eq!(store.create_deck(session).unwrap().len(), 52);
/// assert!(store.create_deck(session).is_err());
///
/// store.clear(session);
/// store.create_deck(session).unwrap();
/// assert_eq!(store.card_count(), 52);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckStore {
    decks: ImHashMap<SessionId, Deck>,
    next_session: u64,
}

impl DeckStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new session id. No deck is stored yet.
    pub fn open_session(&mut self) -> SessionId {
        let session = SessionId(self.next_session);
        self.next_session += 1;
        session
    }

    /// Run `f` against a staged copy and commit only if it succeeds.
    ///
    /// On error the store is left exactly as it was.
    pub fn transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut DeckTransaction) -> Result<T>,
    {
        let mut tx = DeckTransaction {
            decks: self.decks.clone(),
        };
        match f(&mut tx) {
            Ok(value) => {
                self.decks = tx.decks;
                debug!(sessions = self.decks.len(), "committed deck transaction");
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, "rolled back deck transaction");
                Err(err)
            }
        }
    }

    /// Create and store a fresh deck for `session`.
    ///
    /// The session must not hold a deck; [`clear`](Self::clear) it first.
    pub fn create_deck(&mut self, session: SessionId) -> Result<&Deck> {
        self.transaction(|tx| tx.create_deck(session).map(|_| ()))?;
        self.require(session)
    }

    /// Store `deck` for `session`, returning the deck it replaced.
    pub fn replace_deck(&mut self, session: SessionId, deck: Deck) -> Option<Deck> {
        debug!(%session, "replacing deck");
        self.decks.insert(session, deck)
    }

    /// Remove the deck of `session`.
    pub fn clear(&mut self, session: SessionId) -> Option<Deck> {
        debug!(%session, "clearing deck");
        self.decks.remove(&session)
    }

    #[must_use]
    pub fn deck(&self, session: SessionId) -> Option<&Deck> {
        self.decks.get(&session)
    }

    /// Like [`deck`](Self::deck) but fails with [`WarError::UnknownSession`].
    pub fn require(&self, session: SessionId) -> Result<&Deck> {
        self.decks
            .get(&session)
            .ok_or(WarError::UnknownSession { session })
    }

    /// Sessions currently holding a deck, in id order.
    #[must_use]
    pub fn sessions(&self) -> Vec<SessionId> {
        let mut sessions: Vec<SessionId> = self.decks.keys().copied().collect();
        sessions.sort();
        sessions
    }

    /// Total number of stored cards across all sessions.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.decks.values().map(Deck::len).sum()
    }

    /// Encode the whole store with bincode.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        let decks = self
            .sessions()
            .into_iter()
            .filter_map(|s| self.decks.get(&s).map(|d| (s, d.clone())))
            .collect();
        let snapshot = StoreSnapshot {
            next_session: self.next_session,
            decks,
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    /// Rebuild a store from [`snapshot`](Self::snapshot) bytes.
    ///
    /// Every deck is validated again while decoding. A session listed twice
    /// fails with [`WarError::DuplicateSession`].
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        let snapshot: StoreSnapshot = bincode::deserialize(bytes)?;
        let mut decks = ImHashMap::new();
        for (session, deck) in snapshot.decks {
            if decks.insert(session, deck).is_some() {
                warn!(%session, "snapshot lists a session twice");
                return Err(WarError::DuplicateSession { session });
            }
        }
        // Never hand out an id that is already in use.
        let next_session = decks
            .keys()
            .map(|s| s.0 + 1)
            .max()
            .unwrap_or(0)
            .max(snapshot.next_session);
        debug!(sessions = decks.len(), "restored deck store");
        Ok(Self {
            decks,
            next_session,
        })
    }
}
