use std::collections::HashMap;

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    env::{Environment, LegalActions},
    error::ConfigError,
    exploration::{Choice, EpsilonGreedy},
    memory::Exp,
    util::ensure_interval,
};

use super::Hashable;

/// Configuration for the [`QTableAgent`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QTableAgentConfig {
    /// The learning rate, in the interval `(0,1]`
    ///
    /// **Default**: `0.5`
    pub alpha: f64,
    /// The probability of taking a uniformly random action, in the interval `[0,1]`
    ///
    /// **Default**: `0.1`
    pub epsilon: f64,
    /// The discount factor γ applied to the value of the next state, in the interval `[0,1]`
    ///
    /// **Default**: `0.99`
    pub discount: f64,
}

impl Default for QTableAgentConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            epsilon: 0.1,
            discount: 0.99,
        }
    }
}

impl QTableAgentConfig {
    /// Check that every hyperparameter is in its interval
    pub fn validate(&self) -> Result<(), ConfigError> {
        let &Self {
            alpha,
            epsilon,
            discount,
        } = self;
        ensure_interval!(alpha, 0.0, 1.0, left_open);
        ensure_interval!(epsilon, 0.0, 1.0);
        ensure_interval!(discount, 0.0, 1.0);
        Ok(())
    }
}

/// Summary of one episode run by [`QTableAgent::go`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EpisodeReport {
    /// Number of actions taken
    pub steps: usize,
    /// Sum of the rewards received
    pub total_reward: f64,
    /// Whether the episode reached a terminal state before the step limit
    pub terminated: bool,
}

/// A Q-learning agent that learns the action values of its environment in a table
///
/// Every `(state, action)` pair that has never been written reads as `0.0`. The table is only
/// written by [`set_qvalue`](QTableAgent::set_qvalue) and [`update`](QTableAgent::update) and
/// never shrinks.
///
/// The agent is not synchronized. If it is shared between threads, hold one exclusive lock
/// around each `update`, otherwise concurrent read-modify-writes lose updates.
///
/// ### Generics
/// - `S`, `A` - The state and action types, used together as the table key
/// - `F` - The [`LegalActions`] enumerator, queried on every call and never cached
/// - `R` - The random number generator driving exploration
pub struct QTableAgent<S, A, F, R = StdRng>
where
    S: Hashable,
    A: Hashable,
{
    q_table: HashMap<(S, A), f64>,
    legal_actions: F,
    exploration: EpsilonGreedy,
    alpha: f64,    // learning rate
    discount: f64, // discount factor
    rng: R,
}

impl<S, A, F> QTableAgent<S, A, F, StdRng>
where
    S: Hashable,
    A: Hashable,
    F: LegalActions<S, A>,
{
    /// Initialize a new `QTableAgent` with an entropy-seeded random number generator
    ///
    /// **Errors** if `alpha` is not in `(0,1]`, or `epsilon` or `discount` is not in `[0,1]`
    pub fn new(config: QTableAgentConfig, legal_actions: F) -> Result<Self, ConfigError> {
        Self::with_rng(config, legal_actions, StdRng::from_entropy())
    }

    /// Initialize a new `QTableAgent` whose exploration is reproducible from `seed`
    pub fn with_seed(
        config: QTableAgentConfig,
        legal_actions: F,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, legal_actions, StdRng::seed_from_u64(seed))
    }
}

impl<S, A, F, R> QTableAgent<S, A, F, R>
where
    S: Hashable,
    A: Hashable,
    F: LegalActions<S, A>,
    R: Rng,
{
    /// Initialize a new `QTableAgent` that draws its exploration decisions from `rng`
    pub fn with_rng(
        config: QTableAgentConfig,
        legal_actions: F,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let exploration = EpsilonGreedy::new(config.epsilon)?;
        debug!(
            "q-table agent created: alpha={} epsilon={} discount={}",
            config.alpha, config.epsilon, config.discount
        );
        Ok(Self {
            q_table: HashMap::new(),
            legal_actions,
            exploration,
            alpha: config.alpha,
            discount: config.discount,
            rng,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn epsilon(&self) -> f64 {
        self.exploration.epsilon()
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Q(state, action), or `0.0` if the pair has never been written
    ///
    /// Reading never inserts into the table.
    pub fn get_qvalue(&self, state: &S, action: &A) -> f64 {
        self.q_table
            .get(&(state.clone(), action.clone()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Set Q(state, action) to `value`
    pub fn set_qvalue(&mut self, state: S, action: A, value: f64) {
        self.q_table.insert((state, action), value);
    }

    /// The highest Q value among the legal actions of `state`, with the first action reaching it
    ///
    /// Ties go to the action enumerated first. `None` if `state` has no legal actions.
    fn best_value_and_action(&self, state: &S) -> Option<(f64, A)> {
        self.legal_actions
            .legal_actions(state)
            .into_iter()
            .fold(None, |best, action| {
                let value = self.get_qvalue(state, &action);
                match best {
                    Some((best_value, _)) if value > best_value => Some((value, action)),
                    None => Some((value, action)),
                    best => best,
                }
            })
    }

    /// V(state) = max<sub>a</sub> Q(state, a) over the legal actions, or `0.0` for a terminal state
    pub fn get_value(&self, state: &S) -> f64 {
        self.best_value_and_action(state)
            .map_or(0.0, |(value, _)| value)
    }

    /// The greedy action for `state`, or `None` for a terminal state
    ///
    /// This is always the action whose Q value [`get_value`](QTableAgent::get_value) returns.
    pub fn get_best_action(&self, state: &S) -> Option<A> {
        self.best_value_and_action(state).map(|(_, action)| action)
    }

    /// Choose an action in `state` with the epsilon greedy policy
    ///
    /// With probability `epsilon` the action is drawn uniformly from the legal actions, otherwise
    /// it is [`get_best_action`](QTableAgent::get_best_action). `None` for a terminal state.
    pub fn get_action(&mut self, state: &S) -> Option<A> {
        let actions = self.legal_actions.legal_actions(state);
        if actions.is_empty() {
            return None;
        }

        match self.exploration.choose(&mut self.rng) {
            Choice::Explore => actions.choose(&mut self.rng).cloned(),
            Choice::Exploit => self.get_best_action(state),
        }
    }

    /// Apply the one-step Q-learning update for a transition
    ///
    /// Q(s, a) ← (1 - α) Q(s, a) + α (r + γ V(s'))
    ///
    /// Both Q(s, a) and V(s') are read before the table is written. If `next_state` is terminal,
    /// V(s') is `0.0` and the target is the reward alone.
    pub fn update(&mut self, state: S, action: A, reward: f64, next_state: &S) {
        let q_value = self.get_qvalue(&state, &action);
        let next_value = self.get_value(next_state);
        let new_q_value =
            (1.0 - self.alpha) * q_value + self.alpha * (reward + self.discount * next_value);
        trace!("q value {q_value} -> {new_q_value} (reward {reward}, next value {next_value})");

        self.set_qvalue(state, action, new_q_value);
    }

    /// Learn from a recorded [experience](Exp)
    pub fn learn(&mut self, experience: Exp<S, A>) {
        let Exp {
            state,
            action,
            reward,
            next_state,
        } = experience;

        self.update(state, action, reward, &next_state);
    }

    /// Run one episode in `env`, learning from every step
    ///
    /// The episode ends when the current state has no legal actions, or after `max_steps` actions.
    pub fn go<E>(&mut self, env: &mut E, max_steps: usize) -> EpisodeReport
    where
        E: Environment<State = S, Action = A>,
    {
        let mut report = EpisodeReport::default();
        let mut state = env.reset();
        while report.steps < max_steps {
            let Some(action) = self.get_action(&state) else {
                report.terminated = true;
                break;
            };
            let (next_state, reward) = env.step(action.clone());
            self.update(state, action, reward, &next_state);
            state = next_state;

            report.steps += 1;
            report.total_reward += reward;
        }

        if !report.terminated && self.legal_actions.legal_actions(&state).is_empty() {
            report.terminated = true;
        }

        debug!(
            "episode finished: steps={} total_reward={} terminated={}",
            report.steps, report.total_reward, report.terminated
        );
        report
    }
}
