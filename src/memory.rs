/// Represents a single experience or transition in the environment
#[derive(Debug, Clone, PartialEq)]
pub struct Exp<S, A> {
    /// The state of the environment before taking the action
    pub state: S,
    /// The action taken in the given state
    pub action: A,
    /// The reward received after taking the action
    pub reward: f64,
    /// The state of the environment after the action is taken
    ///
    /// A terminal state is one with no legal actions, so it needs no special marker here.
    pub next_state: S,
}
