//! Small problems shared by the strategy unit tests.

use crate::contract::Problem;

/// Positions `0..len` on a line; `left`/`right` moves at unit cost, with an
/// optional impassable cell. Heuristic: distance to the goal.
pub(crate) struct Corridor {
    len: u32,
    start: u32,
    goal: u32,
    wall: Option<u32>,
}

impl Corridor {
    pub(crate) fn new(len: u32, start: u32, goal: u32) -> Self {
        Self {
            len,
            start,
            goal,
            wall: None,
        }
    }

    pub(crate) fn with_wall(len: u32, start: u32, goal: u32, wall: u32) -> Self {
        Self {
            wall: Some(wall),
            ..Self::new(len, start, goal)
        }
    }

    fn open(&self, position: u32) -> bool {
        position < self.len && self.wall != Some(position)
    }
}

impl Problem for Corridor {
    type State = u32;
    type Key = u32;

    fn initial_state(&self) -> &u32 {
        &self.start
    }

    fn goal_state(&self) -> &u32 {
        &self.goal
    }

    fn actions(&self, state: &u32) -> Vec<String> {
        let mut actions = Vec::new();
        if *state > 0 && self.open(state - 1) {
            actions.push("left".to_string());
        }
        if self.open(state + 1) {
            actions.push("right".to_string());
        }
        actions
    }

    fn result(&self, state: &u32, action: &str) -> u32 {
        if action == "left" {
            state - 1
        } else {
            state + 1
        }
    }

    fn action_cost(&self, _current: &u32, _action: &str, _next: &u32) -> u64 {
        1
    }

    fn state_key(&self, state: &u32) -> u32 {
        *state
    }

    fn estimated_cost(&self, state: &u32) -> u64 {
        u64::from(state.abs_diff(self.goal))
    }
}

/// `S -direct(10)-> G` and `S -detour(1)-> A -finish(1)-> G`.
pub(crate) struct WeightedDiamond;

impl Problem for WeightedDiamond {
    type State = char;
    type Key = char;

    fn initial_state(&self) -> &char {
        &'S'
    }

    fn goal_state(&self) -> &char {
        &'G'
    }

    fn actions(&self, state: &char) -> Vec<String> {
        match state {
            'S' => vec!["direct".to_string(), "detour".to_string()],
            'A' => vec!["finish".to_string()],
            _ => Vec::new(),
        }
    }

    fn result(&self, _state: &char, action: &str) -> char {
        match action {
            "detour" => 'A',
            _ => 'G',
        }
    }

    fn action_cost(&self, _current: &char, action: &str, _next: &char) -> u64 {
        if action == "direct" {
            10
        } else {
            1
        }
    }

    fn state_key(&self, state: &char) -> char {
        *state
    }
}

/// `S -short-> A -step-> G` and `S -long-> B -step-> C -step-> G`.
///
/// `long` is listed last, so a stack pops its branch first.
pub(crate) struct Fork;

impl Problem for Fork {
    type State = char;
    type Key = char;

    fn initial_state(&self) -> &char {
        &'S'
    }

    fn goal_state(&self) -> &char {
        &'G'
    }

    fn actions(&self, state: &char) -> Vec<String> {
        match state {
            'S' => vec!["short".to_string(), "long".to_string()],
            'A' | 'B' | 'C' => vec!["step".to_string()],
            _ => Vec::new(),
        }
    }

    fn result(&self, state: &char, action: &str) -> char {
        match (*state, action) {
            ('S', "short") => 'A',
            ('S', _) => 'B',
            ('B', _) => 'C',
            _ => 'G',
        }
    }

    fn action_cost(&self, _current: &char, _action: &str, _next: &char) -> u64 {
        1
    }

    fn state_key(&self, state: &char) -> char {
        *state
    }
}
