//! Player identity.

use crate::cell::Symbol;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// What the turn coordinator needs to know about whoever is playing.
pub trait Participant {
    /// Display name used in prompts and the win message.
    fn name(&self) -> &str;

    /// The mark this participant places.
    fn symbol(&self) -> Symbol;
}

/// A named player with a fixed symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display, new)]
#[display("{name} ({symbol})")]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }
}
