use std::num::NonZero;

use shiftpick_core::{Position, Shift, ShiftGrid};
use shiftpick_rules::{Assessment, ColumnCoverage, RuleConfig, Validator, Violation};

use crate::{Action, ActionEffect, Feedback, HelpTopic, Key, undo_redo_stack::UndoRedoStack};

/// Where keyboard and button input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectionState {
    /// No cell is selected; edit requests are ignored.
    Idle,
    /// Edit requests target this cell.
    Selected(Position),
}

/// Options for creating a [`Game`].
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use shiftpick_game::GameOptions;
/// use shiftpick_rules::RuleConfig;
///
/// let options = GameOptions::default()
///     .rule_config(RuleConfig::default().max_per_shift(3))
///     .history_capacity(NonZero::new(50).unwrap());
/// assert_eq!(options.history_capacity_limit().get(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    rule_config: RuleConfig,
    history_capacity: NonZero<usize>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rule_config: RuleConfig::default(),
            history_capacity: Self::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl GameOptions {
    /// Number of grid snapshots kept for undo unless configured otherwise.
    pub const DEFAULT_HISTORY_CAPACITY: NonZero<usize> = NonZero::new(200).unwrap();

    /// Sets the rule limits.
    #[must_use]
    pub fn rule_config(mut self, config: RuleConfig) -> Self {
        self.rule_config = config;
        self
    }

    /// Sets how many snapshots the undo history keeps.
    #[must_use]
    pub fn history_capacity(mut self, capacity: NonZero<usize>) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Returns the rule limits.
    #[must_use]
    pub fn rule_config_value(&self) -> RuleConfig {
        self.rule_config
    }

    /// Returns the undo history capacity.
    #[must_use]
    pub fn history_capacity_limit(&self) -> NonZero<usize> {
        self.history_capacity
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    grid: ShiftGrid,
    selected_at_change: Option<Position>,
}

/// An interactive puzzle session.
///
/// The session owns the current grid, the selection, the latest
/// [`Assessment`] and the win/help [`Feedback`]. Every change goes through
/// [`Game::handle`]; after each edit the grid is re-validated and coverage is
/// recomputed from scratch.
///
/// # Examples
///
/// ```
/// use shiftpick_core::{Position, Shift};
/// use shiftpick_game::{Action, Game};
///
/// let mut game = Game::new("A..\n...".parse().unwrap());
/// game.handle(Action::SelectCell(Position::new(0, 1)));
/// let effect = game.handle(Action::RequestShift(Shift::B));
///
/// assert!(effect.grid_changed);
/// assert_eq!(game.grid().shift(Position::new(0, 1)), Some(Shift::B));
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    initial: ShiftGrid,
    grid: ShiftGrid,
    selected: Option<Position>,
    validator: Validator,
    assessment: Assessment,
    feedback: Feedback,
    history: UndoRedoStack<Snapshot>,
}

impl Game {
    /// Starts a session on `initial` with default options.
    #[must_use]
    pub fn new(initial: ShiftGrid) -> Self {
        Self::with_options(initial, GameOptions::default())
    }

    /// Starts a session on `initial`.
    ///
    /// The starting grid is assessed but not observed, so a session never
    /// opens with a solved notification.
    #[must_use]
    pub fn with_options(initial: ShiftGrid, options: GameOptions) -> Self {
        let validator = Validator::with_config(&options.rule_config);
        let assessment = Assessment::new(&validator, &initial);
        let mut history = UndoRedoStack::new(options.history_capacity);
        history.reset_to(Snapshot {
            grid: initial.clone(),
            selected_at_change: None,
        });
        log::debug!(
            "new session on a {} grid with {} fixed cells",
            initial.dimensions(),
            initial.fixed_positions().count()
        );
        Self {
            grid: initial.clone(),
            initial,
            selected: None,
            validator,
            assessment,
            feedback: Feedback::default(),
            history,
        }
    }

    /// Returns the current grid.
    #[must_use]
    pub fn grid(&self) -> &ShiftGrid {
        &self.grid
    }

    /// Returns the grid the session started from.
    #[must_use]
    pub fn initial_grid(&self) -> &ShiftGrid {
        &self.initial
    }

    /// Returns the selected cell.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Returns the selection state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        match self.selected {
            Some(pos) => SelectionState::Selected(pos),
            None => SelectionState::Idle,
        }
    }

    /// Returns the assessment of the current grid.
    #[must_use]
    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    /// Returns the violations of the current grid.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        self.assessment.violations()
    }

    /// Returns per-column coverage of the current grid.
    #[must_use]
    pub fn coverage(&self) -> &[ColumnCoverage] {
        self.assessment.coverage()
    }

    /// Returns whether the current grid is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.assessment.is_solved()
    }

    /// Returns the notification and overlay state.
    #[must_use]
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Returns the open help overlay.
    #[must_use]
    pub fn overlay(&self) -> Option<HelpTopic> {
        self.feedback.overlay()
    }

    /// Returns whether [`Action::Undo`] would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns whether [`Action::Redo`] would change anything.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Applies a key press. Keys without an action are ignored.
    pub fn handle_key(&mut self, key: Key) -> ActionEffect {
        match key.action() {
            Some(action) => self.handle(action),
            None => {
                log::debug!("ignored key {key:?}");
                ActionEffect::default()
            }
        }
    }

    /// Applies one action and reports what changed.
    pub fn handle(&mut self, action: Action) -> ActionEffect {
        log::debug!("handle {action:?}");

        let grid_before = self.grid.clone();
        let mut push_history_if_changed = true;
        let mut evaluate = true;

        match action {
            Action::SelectCell(pos) => {
                if self.grid.dimensions().contains(pos) {
                    self.selected = Some(pos);
                }
                evaluate = false;
            }
            Action::ClearSelection => {
                self.selected = None;
                evaluate = false;
            }
            Action::MoveSelection(direction) => {
                if let Some(pos) = self.selected {
                    self.selected = Some(self.grid.dimensions().step(pos, direction));
                }
                evaluate = false;
            }
            Action::RequestShift(shift) => self.set_selected(Some(shift)),
            Action::ClearCell => self.set_selected(None),
            Action::ClearAll => {
                push_history_if_changed = false;
                evaluate = false;
                self.reset();
            }
            Action::Undo => {
                push_history_if_changed = false;
                self.undo();
            }
            Action::Redo => {
                push_history_if_changed = false;
                self.redo();
            }
            Action::OpenHelp(topic) => {
                self.feedback.open(topic);
                evaluate = false;
            }
            Action::CloseHelp => {
                self.feedback.close();
                evaluate = false;
            }
        }

        let grid_changed = self.grid != grid_before;
        if push_history_if_changed && grid_changed {
            self.history.push(Snapshot {
                grid: self.grid.clone(),
                selected_at_change: self.selected,
            });
        }

        let mut solved = false;
        if evaluate {
            self.assessment = Assessment::new(&self.validator, &self.grid);
            solved = self.feedback.observe(&self.assessment);
        }

        ActionEffect {
            grid_changed,
            solved,
        }
    }

    fn set_selected(&mut self, shift: Option<Shift>) {
        let Some(pos) = self.selected else {
            return;
        };
        if !self.grid.is_editable(pos) {
            log::debug!("cell {pos} is fixed");
            return;
        }
        self.grid = self.grid.with_shift(pos, shift);
    }

    fn reset(&mut self) {
        self.grid = self.initial.reset();
        self.selected = None;
        self.assessment = Assessment::new(&self.validator, &self.grid);
        self.feedback.reset();
        self.history.reset_to(Snapshot {
            grid: self.grid.clone(),
            selected_at_change: None,
        });
        log::info!("grid reset to its initial configuration");
    }

    fn undo(&mut self) {
        let Some(change_location) = self.history.current().map(|s| s.selected_at_change) else {
            return;
        };
        if let Some(snapshot) = self.history.undo() {
            self.grid = snapshot.grid.clone();
            self.selected = change_location;
        }
    }

    fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            self.grid = snapshot.grid.clone();
            self.selected = snapshot.selected_at_change;
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use shiftpick_core::{CellState, Direction};

    use super::*;

    const DIAGONAL: &str = "A...../.B..../..D.../...A../....E./.....D/E.....";
    const SOLVED: &str = "AABB.C/BBCC.A/CCD.AB/DD.ABE/..AEE./.EE.CD/E..DD.";

    fn game(grid: &str) -> Game {
        Game::new(grid.parse().unwrap())
    }

    fn type_at(game: &mut Game, pos: Position, ch: char) -> ActionEffect {
        game.handle(Action::SelectCell(pos));
        game.handle_key(Key::Char(ch))
    }

    /// Types every editable cell of `SOLVED` and returns the effects in order.
    fn fill_solution(game: &mut Game) -> Vec<ActionEffect> {
        let solved: ShiftGrid = SOLVED.parse().unwrap();
        let mut effects = vec![];
        for pos in solved.dimensions().positions() {
            if game.grid().cell(pos).is_fixed() {
                continue;
            }
            if let Some(shift) = solved.shift(pos) {
                effects.push(type_at(game, pos, shift.as_char().to_ascii_lowercase()));
            }
        }
        effects
    }

    #[test]
    fn test_new_session_is_idle_and_unsolved() {
        let game = game(DIAGONAL);
        assert_eq!(game.state(), SelectionState::Idle);
        assert!(!game.is_solved());
        assert!(game.violations().is_empty());
        assert_eq!(game.coverage().len(), 6);
        assert!(!game.can_undo());
        assert_eq!(game.feedback().notifications(), 0);
    }

    #[test]
    fn test_filling_the_diagonal_puzzle_notifies_exactly_once() {
        let mut game = game(DIAGONAL);
        let effects = fill_solution(&mut game);

        let fired: Vec<_> = effects.iter().map(|e| e.solved).collect();
        assert_eq!(fired.iter().filter(|&&f| f).count(), 1);
        assert_eq!(fired.last(), Some(&true));
        assert!(game.is_solved());
        assert_eq!(game.grid().to_string().to_ascii_uppercase(), SOLVED.replace('/', "\n"));

        // Further no-op edits keep the grid solved without a repeat notification.
        let effect = type_at(&mut game, Position::new(0, 1), 'a');
        assert!(!effect.grid_changed);
        assert!(!effect.solved);
        assert_eq!(game.feedback().notifications(), 1);
    }

    #[test]
    fn test_breaking_and_repairing_notifies_again() {
        let mut game = game(DIAGONAL);
        fill_solution(&mut game);

        let pos = Position::new(0, 1);
        game.handle(Action::SelectCell(pos));
        let effect = game.handle_key(Key::Delete);
        assert!(effect.grid_changed);
        assert!(!game.is_solved());

        let effect = game.handle_key(Key::Char('A'));
        assert!(effect.solved);
        assert_eq!(game.feedback().notifications(), 2);
    }

    #[test]
    fn test_edits_require_a_selection() {
        let mut game = game(DIAGONAL);
        let effect = game.handle_key(Key::Char('b'));
        assert!(!effect.grid_changed);
        assert_eq!(game.grid(), game.initial_grid());

        // Arrow keys do not create a selection.
        game.handle_key(Key::Arrow(Direction::Right));
        assert!(game.state().is_idle());
    }

    #[test]
    fn test_fixed_cells_are_selectable_but_not_editable() {
        let mut game = game(DIAGONAL);
        let pos = Position::new(1, 1);
        game.handle(Action::SelectCell(pos));
        assert_eq!(game.state(), SelectionState::Selected(pos));

        assert!(!game.handle_key(Key::Char('c')).grid_changed);
        assert!(!game.handle_key(Key::Backspace).grid_changed);
        assert_eq!(game.grid().cell(pos), CellState::Fixed(Shift::B));
    }

    #[test]
    fn test_out_of_alphabet_keys_are_ignored() {
        let mut game = game(DIAGONAL);
        let effect = type_at(&mut game, Position::new(0, 1), 'x');
        assert_eq!(effect, ActionEffect::default());
        assert_eq!(game.grid().shift(Position::new(0, 1)), None);
    }

    #[test]
    fn test_typing_is_case_insensitive() {
        let mut game = game(DIAGONAL);
        type_at(&mut game, Position::new(0, 1), 'c');
        type_at(&mut game, Position::new(0, 2), 'C');
        assert_eq!(game.grid().shift(Position::new(0, 1)), Some(Shift::C));
        assert_eq!(game.grid().shift(Position::new(0, 2)), Some(Shift::C));
        assert_eq!(
            game.grid().cell(Position::new(0, 2)),
            CellState::Assigned(Shift::C)
        );
    }

    #[test]
    fn test_arrow_keys_clamp_at_the_edges() {
        let mut game = game(DIAGONAL);
        game.handle(Action::SelectCell(Position::new(0, 0)));
        game.handle_key(Key::Arrow(Direction::Up));
        game.handle_key(Key::Arrow(Direction::Left));
        assert_eq!(game.selected(), Some(Position::new(0, 0)));

        game.handle(Action::SelectCell(Position::new(6, 5)));
        game.handle_key(Key::Arrow(Direction::Down));
        game.handle_key(Key::Arrow(Direction::Right));
        assert_eq!(game.selected(), Some(Position::new(6, 5)));

        game.handle_key(Key::Arrow(Direction::Up));
        assert_eq!(game.selected(), Some(Position::new(5, 5)));

        game.handle_key(Key::Escape);
        assert!(game.state().is_idle());
    }

    #[test]
    fn test_selecting_outside_the_grid_is_ignored() {
        let mut game = game(DIAGONAL);
        game.handle(Action::SelectCell(Position::new(7, 0)));
        assert!(game.state().is_idle());
    }

    #[test]
    fn test_clear_all_restores_initial_grid_and_rearms() {
        let mut game = game(DIAGONAL);
        fill_solution(&mut game);
        assert_eq!(game.feedback().notifications(), 1);

        let effect = game.handle(Action::ClearAll);
        assert!(effect.grid_changed);
        assert!(!effect.solved);
        assert_eq!(game.grid(), game.initial_grid());
        assert!(game.state().is_idle());
        assert!(!game.is_solved());
        assert!(game.feedback().latch().is_armed());
        assert!(!game.can_undo());
        assert!(!game.can_redo());

        fill_solution(&mut game);
        assert_eq!(game.feedback().notifications(), 2);
    }

    #[test]
    fn test_undo_redo_restores_grid_and_selection() {
        let mut game = game(DIAGONAL);
        let first = Position::new(0, 1);
        let second = Position::new(2, 0);
        type_at(&mut game, first, 'a');
        type_at(&mut game, second, 'c');
        game.handle(Action::ClearSelection);

        let effect = game.handle(Action::Undo);
        assert!(effect.grid_changed);
        assert_eq!(game.grid().shift(second), None);
        assert_eq!(game.grid().shift(first), Some(Shift::A));
        assert_eq!(game.selected(), Some(second));

        game.handle(Action::Undo);
        assert_eq!(game.grid(), game.initial_grid());
        assert!(!game.can_undo());

        game.handle(Action::Redo);
        assert_eq!(game.grid().shift(first), Some(Shift::A));
        assert_eq!(game.selected(), Some(first));
        assert!(game.can_redo());

        // A new edit discards the redo branch.
        type_at(&mut game, Position::new(1, 0), 'b');
        assert!(!game.can_redo());
    }

    #[test]
    fn test_undo_into_solved_grid_notifies() {
        let mut game = game(DIAGONAL);
        fill_solution(&mut game);
        type_at(&mut game, Position::new(0, 1), 'e');
        assert!(!game.is_solved());

        let effect = game.handle(Action::Undo);
        assert!(effect.solved);
        assert_eq!(game.feedback().notifications(), 2);
    }

    #[test]
    fn test_help_overlay_does_not_touch_the_grid() {
        let mut game = game(DIAGONAL);
        type_at(&mut game, Position::new(0, 1), 'a');
        let grid = game.grid().clone();

        let effect = game.handle(Action::OpenHelp(HelpTopic::Walkthrough));
        assert!(!effect.grid_changed);
        assert_eq!(game.overlay(), Some(HelpTopic::Walkthrough));
        game.handle(Action::CloseHelp);
        assert_eq!(game.overlay(), None);
        assert_eq!(game.grid(), &grid);
        assert_eq!(game.selected(), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_rule_config_is_applied() {
        let options = GameOptions::default().rule_config(RuleConfig::default().max_per_shift(1));
        let mut game = Game::with_options(DIAGONAL.parse().unwrap(), options);
        type_at(&mut game, Position::new(0, 1), 'a');
        assert_eq!(game.violations().len(), 1);
        assert!(game.assessment().is_violating(Position::new(0, 0)));
    }

    #[test]
    fn test_history_capacity_bounds_undo() {
        let options = GameOptions::default().history_capacity(NonZero::new(2).unwrap());
        let mut game = Game::with_options(DIAGONAL.parse().unwrap(), options);
        type_at(&mut game, Position::new(0, 1), 'a');
        type_at(&mut game, Position::new(0, 2), 'b');
        game.handle(Action::Undo);
        assert!(!game.can_undo());
        assert_eq!(game.grid().shift(Position::new(0, 1)), Some(Shift::A));
    }

    fn arbitrary_action() -> impl Strategy<Value = Action> {
        let pos = (0..8usize, 0..7usize).prop_map(|(r, c)| Position::new(r, c));
        let shift = proptest::sample::select(Shift::ALL.to_vec());
        let direction = proptest::sample::select(vec![
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]);
        prop_oneof![
            3 => pos.prop_map(Action::SelectCell),
            3 => shift.prop_map(Action::RequestShift),
            1 => direction.prop_map(Action::MoveSelection),
            1 => Just(Action::ClearCell),
            1 => Just(Action::ClearSelection),
            1 => Just(Action::Undo),
            1 => Just(Action::Redo),
        ]
    }

    proptest! {
        #[test]
        fn fixed_cells_never_change(actions in proptest::collection::vec(arbitrary_action(), 0..60)) {
            let mut game = game(DIAGONAL);
            let initial = game.initial_grid().clone();
            for action in actions {
                game.handle(action);
                for pos in initial.fixed_positions() {
                    prop_assert_eq!(game.grid().cell(pos), initial.cell(pos));
                }
                let expected = Assessment::new(&Validator::default(), game.grid());
                prop_assert_eq!(game.assessment(), &expected);
            }
        }
    }
}
