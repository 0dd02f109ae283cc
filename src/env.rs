/// The action enumerator of an environment: the finite, ordered set of legal actions in a state
///
/// An empty list marks `state` as terminal. Agents call this on every query and never cache the
/// result, so implementations are free to return different actions as the environment changes.
///
/// Implemented for any `Fn(&S) -> Vec<A>`, so a closure can be passed wherever a `LegalActions`
/// is expected.
pub trait LegalActions<S, A> {
    /// Get the legal actions for `state`, in enumeration order
    fn legal_actions(&self, state: &S) -> Vec<A>;
}

impl<S, A, F> LegalActions<S, A> for F
where
    F: Fn(&S) -> Vec<A>,
{
    fn legal_actions(&self, state: &S) -> Vec<A> {
        self(state)
    }
}

/// Represents the dynamics of an episodic environment in which an agent can operate.
///
/// Which actions are legal, and therefore which states are terminal, is decided by the
/// [`LegalActions`] the agent was built with.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    type State;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// Update the environment in response to an action taken by an agent, producing a new state and associated reward
    ///
    /// **Returns** `(next_state, reward)`
    fn step(&mut self, action: Self::Action) -> (Self::State, f64);

    /// Reset the environment to an initial state
    ///
    /// **Returns** the state
    fn reset(&mut self) -> Self::State;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countdown(state: &u32) -> Vec<u32> {
        (0..*state).collect()
    }

    #[test]
    fn closures_are_action_enumerators() {
        let enumerator = |state: &u32| -> Vec<char> {
            if *state == 0 {
                vec![]
            } else {
                vec!['l', 'r']
            }
        };
        assert!(enumerator.legal_actions(&0).is_empty());
        assert_eq!(enumerator.legal_actions(&3), ['l', 'r']);
    }

    #[test]
    fn fn_items_are_action_enumerators() {
        assert_eq!(countdown.legal_actions(&3), [0, 1, 2]);
        assert!(countdown.legal_actions(&0).is_empty());
    }
}
