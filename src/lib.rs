//! A tabular Q-learning agent
//!
//! [`QTableAgent`](algo::tabular::q_table::QTableAgent) keeps a table of action values for a
//! discrete environment, picks actions with an epsilon greedy policy, and learns with the
//! one-step Q-learning update. The environment only has to say which actions are legal in a
//! state; a state with no legal actions is terminal.
//!
//! ### Example
//! ```
//! use qtable::algo::tabular::q_table::{QTableAgent, QTableAgentConfig};
//!
//! let legal_actions = |state: &&'static str| -> Vec<&'static str> {
//!     match *state {
//!         "done" => vec![],
//!         _ => vec!["left", "right"],
//!     }
//! };
//! let config = QTableAgentConfig {
//!     alpha: 0.5,
//!     discount: 0.9,
//!     ..Default::default()
//! };
//! let mut agent = QTableAgent::with_seed(config, legal_actions, 0).unwrap();
//!
//! let action = agent.get_action(&"start").unwrap();
//! agent.update("start", action, 10.0, &"done");
//! assert_eq!(agent.get_qvalue(&"start", &action), 5.0);
//! assert_eq!(agent.get_action(&"done"), None);
//! ```

/// Implemented RL algorithms
pub mod algo;

/// Environment
pub mod env;

/// Configuration errors
pub mod error;

/// Exploration policies
pub mod exploration;

/// Experience records
pub mod memory;

mod util;
