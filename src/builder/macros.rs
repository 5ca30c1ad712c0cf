//! Macros for ergonomic configuration declaration.

/// Declare a [`MachineConfig`](crate::core::MachineConfig) inline.
///
/// States keep the order they are written in. A state with an empty body
/// gets an empty transition table.
///
/// # Example
///
/// ```
/// use retrace::{machine_config, StateMachine};
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle", "finish" => "done" },
///         "done" => {},
///     }
/// };
///
/// let machine = StateMachine::new(config);
/// assert_eq!(machine.states(None), vec!["idle", "running", "done"]);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $to:expr ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::core::StateMap::new();
        $(
            #[allow(unused_mut)]
            let mut definition = $crate::core::StateDefinition::new();
            $( definition = definition.on($event, $to); )*
            states.insert($state, definition);
        )*
        $crate::core::MachineConfig::new($initial, states)
    }};
}
